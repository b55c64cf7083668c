//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request handler
//! through Axum's state extraction. It holds:
//! - Database connection pool for data persistence
//! - HTTP client for GitHub API requests
//! - OAuth2 client for GitHub authentication
//! - Image store for uploaded thumbnails
//! - Frontend URL for post-login redirects

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;

use crate::server::service::image::LocalImageStore;

/// Type alias for the OAuth2 client configured for GitHub authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: the database connection and the reqwest client share
/// their pools, and the image store keeps its root behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,

    /// HTTP client for GitHub API calls, configured without redirects.
    pub http_client: reqwest::Client,

    pub oauth_client: OAuth2Client,

    /// Store receiving article and project thumbnails.
    pub images: LocalImageStore,

    /// Frontend base URL, target of the redirect after login.
    pub app_url: String,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        images: LocalImageStore,
        app_url: String,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            images,
            app_url,
        }
    }
}
