use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        project::{
            CreateProjectDto, CreateProjectFormDto, ProjectDto, ProjectListItemDto,
            UpdateProjectDto, UpdateProjectFormDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::project::{CreateProjectParams, UpdateProjectParams},
        service::project::ProjectService,
        state::AppState,
        util::multipart::parse_request_with_thumbnail,
    },
};

pub static PROJECT_TAG: &str = "project";

#[utoipa::path(
    get,
    path = "/api/projects",
    tag = PROJECT_TAG,
    responses(
        (status = 200, description = "All projects with like and subscribe counts", body = Vec<ProjectListItemDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_projects(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let projects = ProjectService::new(&state.db, &state.images)
        .get_all()
        .await?;

    let dto: Vec<ProjectListItemDto> = projects.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    post,
    path = "/api/projects",
    tag = PROJECT_TAG,
    request_body(content = CreateProjectFormDto, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Successfully created project", body = ProjectDto),
        (status = 400, description = "Invalid project data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_project(
    State(state): State<AppState>,
    session: Session,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let (request, thumbnail) = parse_request_with_thumbnail::<CreateProjectDto>(multipart).await?;
    let params = CreateProjectParams::from_dto(request, thumbnail)?;

    let user = AuthGuard::new(&state.db, &session).current_user().await?;

    let project = ProjectService::new(&state.db, &state.images)
        .create(&user, params)
        .await?;

    Ok((StatusCode::CREATED, Json(project.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = PROJECT_TAG,
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "The project", body = ProjectDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let project = ProjectService::new(&state.db, &state.images)
        .get_by_id(id)
        .await?;

    Ok((StatusCode::OK, Json(project.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    tag = PROJECT_TAG,
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    request_body(content = UpdateProjectFormDto, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Successfully updated project", body = ProjectDto),
        (status = 400, description = "Invalid project data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not own the project", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_project(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let (request, thumbnail) = parse_request_with_thumbnail::<UpdateProjectDto>(multipart).await?;
    let params = UpdateProjectParams::from_dto(request, thumbnail)?;

    let user = AuthGuard::new(&state.db, &session).current_user().await?;

    let project = ProjectService::new(&state.db, &state.images)
        .update(id, &user, params)
        .await?;

    Ok((StatusCode::OK, Json(project.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/projects/{id}/likes",
    tag = PROJECT_TAG,
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    responses(
        (status = 201, description = "Like registered"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 409, description = "User already likes the project", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_project_like(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).current_user().await?;

    ProjectService::new(&state.db, &state.images)
        .register_like(id, &user)
        .await?;

    Ok(StatusCode::CREATED)
}

#[utoipa::path(
    delete,
    path = "/api/projects/{id}/likes",
    tag = PROJECT_TAG,
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    responses(
        (status = 204, description = "Like cancelled"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Project or like not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_project_like(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).current_user().await?;

    ProjectService::new(&state.db, &state.images)
        .cancel_like(id, &user)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/projects/{id}/subscribes",
    tag = PROJECT_TAG,
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    responses(
        (status = 201, description = "Subscription registered"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 409, description = "User already subscribes to the project", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_project_subscribe(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).current_user().await?;

    ProjectService::new(&state.db, &state.images)
        .register_subscribe(id, &user)
        .await?;

    Ok(StatusCode::CREATED)
}

#[utoipa::path(
    delete,
    path = "/api/projects/{id}/subscribes",
    tag = PROJECT_TAG,
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    responses(
        (status = 204, description = "Subscription cancelled"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Project or subscription not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_project_subscribe(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).current_user().await?;

    ProjectService::new(&state.db, &state.images)
        .cancel_subscribe(id, &user)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
