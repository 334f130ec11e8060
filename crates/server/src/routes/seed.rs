use axum::extract::State;

use crate::state::ServerState;

/// Replace both collections with the sample dataset.
#[utoipa::path(get, path = "/seed", tag = "seed", responses((status = 200, description = "Seed executed successfully", body = String)))]
pub async fn run_seed(State(state): State<ServerState>) -> &'static str {
    state.seed.run_seed().await
}
