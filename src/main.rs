//! Gemini chat relay server
//!
//! Accepts conversations on `POST /api/chat`, forwards them to Gemini and
//! serves the static front-end.

use gemini_chat::api::{create_router, AppState, ServerConfig};
use gemini_chat::llm::{build_service, LlmConfig};
use std::net::SocketAddr;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gemini_chat=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Configuration
    let server_config = ServerConfig::from_env();
    let llm_config = LlmConfig::from_env();

    let llm = build_service(&llm_config).inspect_err(|e| {
        tracing::error!(error = %e, "Cannot start without an LLM provider");
    })?;
    tracing::info!(model = %llm.model_id(), "Gemini service initialized");

    let static_dir = server_config.static_dir();
    match &static_dir {
        Some(dir) => tracing::info!(path = %dir.display(), "Serving static files"),
        None => tracing::warn!(
            path = %server_config.public_dir.display(),
            "Static directory not found, serving API only"
        ),
    }

    // Create router
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_router(AppState::new(llm), static_dir.as_deref())
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], server_config.port));
    tracing::info!("Server ready on http://localhost:{}", server_config.port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
