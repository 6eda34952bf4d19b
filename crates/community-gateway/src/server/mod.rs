//! Gateway server setup
//!
//! Wires configuration, the database pool, repositories and the service
//! context into the axum application.

mod handler;
mod state;

pub use handler::gateway_handler;
pub use state::GatewayState;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use community_common::{AppConfig, AppError, JwtService};
use community_service::ServiceContext;

use crate::connection::ConnectionManager;

/// Create the gateway router
pub fn create_router() -> Router<GatewayState> {
    Router::new()
        .route("/socket", get(gateway_handler))
        .route("/health", get(health_check))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Build the complete application
pub fn create_app(state: GatewayState) -> Router {
    create_router()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Initialize all dependencies and create `GatewayState`
pub async fn create_gateway_state(config: AppConfig) -> Result<GatewayState, AppError> {
    tracing::info!("Connecting to PostgreSQL...");
    let pool = community_db::create_pool(&config.database)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Database connection failed: {e}")))?;
    tracing::info!("PostgreSQL connection established");

    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
    ));

    let service_context = ServiceContext::new(
        Arc::new(community_db::PgUserRepository::new(pool.clone())),
        Arc::new(community_db::PgCommunityRepository::new(pool.clone())),
        Arc::new(community_db::PgMembershipRepository::new(pool.clone())),
        Arc::new(community_db::PgJoinRequestRepository::new(pool.clone())),
        Arc::new(community_db::PgAdminRepository::new(pool.clone())),
        Arc::new(community_db::PgAuditLogRepository::new(pool.clone())),
        Arc::new(community_db::PgPrivateMessageRepository::new(pool.clone())),
        Arc::new(community_db::PgCommunityMessageRepository::new(pool.clone())),
        Arc::new(community_db::PgPostRepository::new(pool.clone())),
        Arc::new(community_db::PgNotificationRepository::new(pool)),
    );

    let connection_manager = ConnectionManager::new_shared();

    Ok(GatewayState::new(
        service_context,
        connection_manager,
        jwt_service,
        config,
    ))
}

/// Run the gateway server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    tracing::info!("Starting gateway server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to bind to {addr}: {e}")))?;

    tracing::info!("Gateway listening on ws://{}/socket", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete gateway server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.gateway.port));

    let state = create_gateway_state(config).await?;
    let app = create_app(state);

    run_server(app, addr).await
}
