//! Initialization of the database, session store, cache, mailer, and the
//! bootstrap admin account.

use std::sync::Arc;

use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::{
    cache::{memory::MemoryCacheStore, redis::RedisCacheStore, CacheStore},
    config::Config,
    data::user::UserRepository,
    error::AppError,
    mail::{LogMailer, Mailer, SmtpMailer},
    model::user::Role,
    service::auth::AuthService,
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
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer backed by the Sqlite database.
///
/// Sessions live in their own table in the same database as the application
/// data and expire after seven days of inactivity. Cookies are not marked
/// secure so local development over plain HTTP works.
pub async fn connect_to_session(
    db: &sea_orm::DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool().clone();

    let store = SqliteStore::new(pool);
    store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to migrate session store: {}", e)))?;

    Ok(SessionManagerLayer::new(store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(7))))
}

/// Creates the bootstrap admin account if no admin exists yet.
///
/// Runs on every startup and is a no-op once an admin account is present, so
/// a renamed or additional admin never gets clobbered.
pub async fn seed_admin(db: &sea_orm::DatabaseConnection, config: &Config) -> Result<(), AppError> {
    if UserRepository::new(db).admin_exists().await? {
        return Ok(());
    }

    let admin = AuthService::new(db)
        .create_with_role(
            config.admin_username.clone(),
            config.admin_email.clone(),
            &config.admin_password,
            Role::Admin,
        )
        .await?;

    tracing::info!("Created bootstrap admin account '{}'", admin.username);

    Ok(())
}

/// Selects the cache store for the lot listing.
///
/// With `REDIS_URL` configured the cache lives in Redis and survives restarts;
/// otherwise an in-process store is used.
pub async fn setup_cache(config: &Config) -> Result<Arc<dyn CacheStore>, AppError> {
    match &config.redis_url {
        Some(url) => {
            let store = RedisCacheStore::connect(url).await?;
            tracing::info!("Using Redis cache store");
            Ok(Arc::new(store))
        }
        None => {
            tracing::info!("REDIS_URL not set, using in-process cache store");
            Ok(Arc::new(MemoryCacheStore::new()))
        }
    }
}

/// Selects the outgoing mailer.
///
/// With `SMTP_HOST` configured mail goes through the relay; otherwise messages
/// are written to the log.
pub fn setup_mailer(config: &Config) -> Result<Arc<dyn Mailer>, AppError> {
    match &config.smtp_host {
        Some(host) => {
            let credentials = match (&config.smtp_username, &config.smtp_password) {
                (Some(username), Some(password)) => Some((username.clone(), password.clone())),
                _ => None,
            };

            let mailer = SmtpMailer::new(host, config.smtp_port, credentials, &config.mail_from)?;
            tracing::info!("Using SMTP mailer via {}", host);
            Ok(Arc::new(mailer))
        }
        None => {
            tracing::info!("SMTP_HOST not set, outgoing mail will be logged only");
            Ok(Arc::new(LogMailer))
        }
    }
}
