use oauth2::{
    basic::BasicTokenType, AuthorizationCode, CsrfToken, EmptyExtraTokenFields, Scope,
    StandardTokenResponse, TokenResponse,
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use url::Url;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{UpsertGithubUserParam, User},
    state::OAuth2Client,
};

const GITHUB_USER_URL: &str = "https://api.github.com/user";

/// Profile fields returned by GitHub's authenticated user endpoint.
#[derive(Debug, Deserialize)]
pub struct GithubUser {
    pub id: i64,
    pub login: String,
    /// Public display name, unset for many accounts.
    pub name: Option<String>,
    pub avatar_url: Option<String>,
}

impl GithubUser {
    /// Builds upsert parameters, falling back to the login when no display name is set.
    pub fn into_upsert_param(self) -> UpsertGithubUserParam {
        let name = self
            .name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(self.login);

        UpsertGithubUserParam {
            github_id: self.id,
            name,
            profile_image_uri: self.avatar_url.unwrap_or_default(),
        }
    }
}

/// Service for the GitHub OAuth2 login flow.
///
/// Acts as the orchestration layer between the GitHub API, the OAuth2 client and the
/// user repository.
pub struct GithubAuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub http_client: &'a reqwest::Client,
    pub oauth_client: &'a OAuth2Client,
}

impl<'a> GithubAuthService<'a> {
    /// Creates a new GithubAuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `http_client` - Reference to the HTTP client for GitHub API requests
    /// - `oauth_client` - Reference to the configured OAuth2 client
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
        }
    }

    /// Generates a GitHub authorize URL with CSRF protection.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - The authorization URL and the CSRF state token to keep in
    ///   the session
    pub fn login_url(&self) -> (Url, CsrfToken) {
        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("read:user".to_string()))
            .url();

        (authorize_url, csrf_state)
    }

    /// Handles the OAuth2 callback and returns the logged-in user.
    ///
    /// Exchanges the authorization code for an access token, fetches the GitHub profile
    /// and creates or refreshes the matching user record.
    ///
    /// # Arguments
    /// - `authorization_code` - OAuth2 authorization code from the GitHub callback
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user with refreshed profile
    /// - `Err(AuthError::TokenExchange)` - The code could not be exchanged
    /// - `Err(AppError::ReqwestErr)` - Failed to fetch the GitHub profile
    /// - `Err(AppError::DbErr)` - Database error during the upsert
    pub async fn callback(&self, authorization_code: String) -> Result<User, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let github_user = self.fetch_github_user(&token).await?;

        let user = UserRepository::new(self.db)
            .upsert_github(github_user.into_upsert_param())
            .await?;

        tracing::info!("User {} logged in with GitHub", user.name);

        Ok(user)
    }

    async fn fetch_github_user(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<GithubUser, AppError> {
        let access_token = token.access_token().secret();

        let user = self
            .http_client
            .get(GITHUB_USER_URL)
            .header("Authorization", format!("Bearer {}", access_token))
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", env!("CARGO_PKG_NAME"))
            .send()
            .await?
            .error_for_status()?
            .json::<GithubUser>()
            .await?;

        Ok(user)
    }
}
