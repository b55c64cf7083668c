use oauth2::{basic::BasicClient, AuthType, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    service::image::LocalImageStore,
    state::OAuth2Client,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions live in the same Sqlite pool as the application tables and expire after seven
/// days without activity. Cookies are only marked secure when the frontend is served over
/// HTTPS.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to attach to the router
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool().clone();
    let store = SqliteStore::new(pool);
    store.migrate().await?;

    let secure = config.app_url.starts_with("https://");

    Ok(SessionManagerLayer::new(store)
        .with_secure(secure)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Builds the HTTP client used for the token exchange and GitHub API calls.
///
/// Redirects are disabled so the OAuth2 token exchange cannot be redirected to another
/// host.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the GitHub OAuth2 client from configuration.
///
/// GitHub expects the client credentials in the token request body.
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client with authorize, token and redirect URLs set
/// - `Err(ConfigError::InvalidValue)` - One of the URLs does not parse
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let invalid = |name: &str| {
        let name = name.to_string();
        move |e: url::ParseError| ConfigError::InvalidValue {
            name,
            reason: e.to_string(),
        }
    };

    let auth_url =
        AuthUrl::new(config.github_auth_url.clone()).map_err(invalid("GITHUB_AUTH_URL"))?;
    let token_url =
        TokenUrl::new(config.github_token_url.clone()).map_err(invalid("GITHUB_TOKEN_URL"))?;
    let redirect_url = RedirectUrl::new(config.github_redirect_url.clone())
        .map_err(invalid("GITHUB_REDIRECT_URL"))?;

    let client = BasicClient::new(ClientId::new(config.github_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.github_client_secret.clone()))
        .set_auth_uri(auth_url)
        .set_token_uri(token_url)
        .set_redirect_uri(redirect_url)
        .set_auth_type(AuthType::RequestBody);

    Ok(client)
}

/// Creates the thumbnail directory if needed and returns the store writing into it.
pub async fn setup_image_store(config: &Config) -> Result<LocalImageStore, AppError> {
    tokio::fs::create_dir_all(&config.image_storage_dir).await?;

    tracing::info!("Storing images in {}", config.image_storage_dir.display());

    Ok(LocalImageStore::new(config.image_storage_dir.clone()))
}
