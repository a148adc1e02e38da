pub mod assets;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                      store probe + asset count
///
/// /assets                      list
/// /assets/mint                 mint (POST)
/// /assets/{id}                 get
/// /assets/{id}/stats           token stats
/// /assets/{id}/contract        record deployed contract (PATCH)
/// /assets/{id}/staking         set staked amount (PATCH)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/assets", assets::router())
}
