use axum::Router;
use tower_http::services::ServeDir;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        article::{self, ARTICLE_TAG},
        auth::{self, AUTH_TAG},
        project::{self, PROJECT_TAG},
    },
    service::image::{LocalImageStore, IMAGE_URI_PREFIX},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Spadeworker API", description = "Articles, projects, likes and subscriptions"),
    tags(
        (name = ARTICLE_TAG, description = "Article management and reactions"),
        (name = PROJECT_TAG, description = "Project management and reactions"),
        (name = AUTH_TAG, description = "GitHub login and session"),
    )
)]
struct ApiDoc;

/// Builds the API router with every documented route and the Swagger UI at `/api/docs`.
///
/// Files below the root of `images` are served under `IMAGE_URI_PREFIX`, which is where
/// persisted thumbnail references point.
pub fn router(images: &LocalImageStore) -> Router<AppState> {
    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::callback))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .routes(routes!(article::get_articles, article::create_article))
        .routes(routes!(article::get_article, article::update_article))
        .routes(routes!(
            article::register_article_like,
            article::cancel_article_like
        ))
        .routes(routes!(
            article::register_article_subscribe,
            article::cancel_article_subscribe
        ))
        .routes(routes!(project::get_projects, project::create_project))
        .routes(routes!(project::get_project, project::update_project))
        .routes(routes!(
            project::register_project_like,
            project::cancel_project_like
        ))
        .routes(routes!(
            project::register_project_subscribe,
            project::cancel_project_subscribe
        ))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .nest_service(IMAGE_URI_PREFIX, ServeDir::new(images.root()))
}
