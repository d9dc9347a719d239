//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use seraya_common::{AppConfig, AppError, DisplayZone, JwtService};
use seraya_core::RewardCatalog;
use seraya_db::{create_pool, ensure_schema, DatabaseConfig, PgEventRepository, PgLinkRepository};
use seraya_service::{notifier, EventService, ServiceContextBuilder};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let router = create_router(&config.rate_limit)?;
    let router = apply_middleware(router, &config.cors, config.app.env.is_production());
    Ok(router.with_state(state))
}

/// Connect to the database, bootstrap the schema and wire the services
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&DatabaseConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    ensure_schema(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL ready");

    let notifier =
        notifier::from_config(&config.webhook).map_err(|e| AppError::Config(e.to_string()))?;
    if config.webhook.discord_url.is_none() {
        warn!("DISCORD_WEBHOOK_URL not set, winner announcements are disabled");
    }

    let reward_catalog = match &config.giveaway.reward_roles {
        Some(roles) => RewardCatalog::new(roles.iter().cloned())?,
        None => RewardCatalog::default(),
    };
    let display_zone =
        DisplayZone::from_config(&config.display).map_err(|e| AppError::Config(e.to_string()))?;

    let service_context = ServiceContextBuilder::new()
        .pool(pool.clone())
        .event_repo(Arc::new(PgEventRepository::new(pool.clone())))
        .link_repo(Arc::new(PgLinkRepository::new(pool)))
        .notifier(notifier)
        .jwt_service(Arc::new(JwtService::new(
            &config.jwt.secret,
            config.jwt.token_expiry,
        )))
        .admin(config.admin.clone())
        .reward_catalog(reward_catalog)
        .display_zone(display_zone)
        .build()?;

    info!(roles = service_context.reward_catalog().len(), "Services ready");

    if config.giveaway.seed_demo_event {
        EventService::new(&service_context)
            .seed_demo_if_empty()
            .await?;
    }

    Ok(AppState::new(service_context, config))
}

/// Serve until Ctrl+C or SIGTERM
pub async fn run_server(app: Router, listener: TcpListener) -> Result<(), AppError> {
    let addr = listener
        .local_addr()
        .map_err(|e| AppError::Config(e.to_string()))?;
    info!("Server listening on http://{}", addr);

    // Rate limiting keys fall back to the peer address
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    run_server(app, listener).await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received terminate signal, shutting down"),
    }
}
