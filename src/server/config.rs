use std::{net::SocketAddr, path::PathBuf};

use crate::server::error::{config::ConfigError, AppError};

const GITHUB_AUTH_URL: &str = "https://github.com/login/oauth/authorize";
const GITHUB_TOKEN_URL: &str = "https://github.com/login/oauth/access_token";

const DEFAULT_IMAGE_STORAGE_DIR: &str = "storage/images";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,

    pub github_client_id: String,
    pub github_client_secret: String,
    pub github_redirect_url: String,

    pub github_auth_url: String,
    pub github_token_url: String,

    /// Frontend origin, used for CORS and as the post-login redirect.
    pub app_url: String,
    pub image_storage_dir: PathBuf,
    pub bind_address: SocketAddr,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    ///
    /// # Returns
    /// - `Ok(Config)` - Every required variable present and parseable
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is unset
    /// - `Err(ConfigError::InvalidValue)` - `BIND_ADDRESS` is not a socket address
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let bind_address = lookup("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue {
                name: "BIND_ADDRESS".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            github_client_id: required("GITHUB_CLIENT_ID")?,
            github_client_secret: required("GITHUB_CLIENT_SECRET")?,
            github_redirect_url: required("GITHUB_REDIRECT_URL")?,
            github_auth_url: GITHUB_AUTH_URL.to_string(),
            github_token_url: GITHUB_TOKEN_URL.to_string(),
            app_url: required("APP_URL")?,
            image_storage_dir: lookup("IMAGE_STORAGE_DIR")
                .unwrap_or_else(|| DEFAULT_IMAGE_STORAGE_DIR.to_string())
                .into(),
            bind_address,
        })
    }
}
