use common::utils::logging::{init_logging_default, init_logging_json};
use configs::{AppConfig, LogFormat};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

/// Initialize logging via shared common utils
pub fn init_logging(format: LogFormat) {
    match format {
        LogFormat::Compact => init_logging_default(),
        LogFormat::Json => init_logging_json(),
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Config file and env overrides, normalized.
pub fn load_config() -> Result<AppConfig, StartupError> {
    AppConfig::load_and_validate().map_err(|e| StartupError::InvalidConfig(e.to_string()))
}

/// Build state and router, optionally seed, then serve until the task ends.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let state = ServerState::new();
    if cfg.seed.on_startup {
        let outcome = state.seed.run_seed().await;
        info!(outcome, "startup seed");
    }

    let app = routes::build_router(state, build_cors());

    let addr = cfg.server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.clone(), source })?;
    info!(addr = %listener.local_addr()?, "starting server");
    axum::serve(listener, app).await?;
    Ok(())
}
