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
        article::{
            ArticleDto, ArticleListItemDto, CreateArticleDto, CreateArticleFormDto,
            UpdateArticleDto, UpdateArticleFormDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::article::{CreateArticleParams, UpdateArticleParams},
        service::article::ArticleService,
        state::AppState,
        util::multipart::parse_request_with_thumbnail,
    },
};

pub static ARTICLE_TAG: &str = "article";

#[utoipa::path(
    get,
    path = "/api/articles",
    tag = ARTICLE_TAG,
    responses(
        (status = 200, description = "All articles with like and subscribe counts", body = Vec<ArticleListItemDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_articles(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let articles = ArticleService::new(&state.db, &state.images)
        .get_all()
        .await?;

    let dto: Vec<ArticleListItemDto> = articles.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    post,
    path = "/api/articles",
    tag = ARTICLE_TAG,
    request_body(content = CreateArticleFormDto, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Successfully created article", body = ArticleDto),
        (status = 400, description = "Invalid article data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_article(
    State(state): State<AppState>,
    session: Session,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let (request, thumbnail) = parse_request_with_thumbnail::<CreateArticleDto>(multipart).await?;
    let params = CreateArticleParams::from_dto(request, thumbnail)?;

    let user = AuthGuard::new(&state.db, &session).current_user().await?;

    let article = ArticleService::new(&state.db, &state.images)
        .create(&user, params)
        .await?;

    Ok((StatusCode::CREATED, Json(article.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/articles/{id}",
    tag = ARTICLE_TAG,
    params(
        ("id" = i32, Path, description = "Article ID")
    ),
    responses(
        (status = 200, description = "The article", body = ArticleDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let article = ArticleService::new(&state.db, &state.images)
        .get_by_id(id)
        .await?;

    Ok((StatusCode::OK, Json(article.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/articles/{id}",
    tag = ARTICLE_TAG,
    params(
        ("id" = i32, Path, description = "Article ID")
    ),
    request_body(content = UpdateArticleFormDto, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Successfully updated article", body = ArticleDto),
        (status = 400, description = "Invalid article data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not own the article", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_article(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let (request, thumbnail) = parse_request_with_thumbnail::<UpdateArticleDto>(multipart).await?;
    let params = UpdateArticleParams::from_dto(request, thumbnail)?;

    let user = AuthGuard::new(&state.db, &session).current_user().await?;

    let article = ArticleService::new(&state.db, &state.images)
        .update(id, &user, params)
        .await?;

    Ok((StatusCode::OK, Json(article.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/articles/{id}/likes",
    tag = ARTICLE_TAG,
    params(
        ("id" = i32, Path, description = "Article ID")
    ),
    responses(
        (status = 201, description = "Like registered"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 409, description = "User already likes the article", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_article_like(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).current_user().await?;

    ArticleService::new(&state.db, &state.images)
        .register_like(id, &user)
        .await?;

    Ok(StatusCode::CREATED)
}

#[utoipa::path(
    delete,
    path = "/api/articles/{id}/likes",
    tag = ARTICLE_TAG,
    params(
        ("id" = i32, Path, description = "Article ID")
    ),
    responses(
        (status = 204, description = "Like cancelled"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Article or like not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_article_like(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).current_user().await?;

    ArticleService::new(&state.db, &state.images)
        .cancel_like(id, &user)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/articles/{id}/subscribes",
    tag = ARTICLE_TAG,
    params(
        ("id" = i32, Path, description = "Article ID")
    ),
    responses(
        (status = 201, description = "Subscription registered"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 409, description = "User already subscribes to the article", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_article_subscribe(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).current_user().await?;

    ArticleService::new(&state.db, &state.images)
        .register_subscribe(id, &user)
        .await?;

    Ok(StatusCode::CREATED)
}

#[utoipa::path(
    delete,
    path = "/api/articles/{id}/subscribes",
    tag = ARTICLE_TAG,
    params(
        ("id" = i32, Path, description = "Article ID")
    ),
    responses(
        (status = 204, description = "Subscription cancelled"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Article or subscription not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_article_subscribe(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).current_user().await?;

    ArticleService::new(&state.db, &state.images)
        .cancel_subscribe(id, &user)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
