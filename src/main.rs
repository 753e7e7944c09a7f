use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use parkboard::{
    config::Config,
    error::AppError,
    jobs::{self, scheduler},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session_layer = startup::connect_to_session(&db).await?;
    startup::seed_admin(&db, &config).await?;

    let cache_store = startup::setup_cache(&config).await?;
    let mailer = startup::setup_mailer(&config)?;

    let (job_queue, worker_cancel) = jobs::start_worker(db.clone(), mailer);
    let _scheduler = scheduler::start_scheduler(job_queue.clone()).await?;

    let cors_origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .map_err(|_| AppError::InternalError(format!("Invalid CORS origin: {}", config.cors_origin)))?;
    let cors = CorsLayer::new()
        .allow_origin(cors_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    let state = AppState::new(
        db,
        parkboard::cache::lot_listing::LotListingCache::new(cache_store),
        job_queue,
    );

    let app = parkboard::router::router()
        .with_state(state)
        .layer(session_layer)
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    worker_cancel.cancel();

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
