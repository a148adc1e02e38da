//! Route definitions for the asset registry.
//!
//! All routes are mounted under `/api/assets`.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::assets;
use crate::state::AppState;

/// Asset routes mounted at `/assets`.
///
/// ```text
/// GET    /                -> list_assets
/// POST   /mint            -> mint_asset
/// GET    /{id}            -> get_asset
/// GET    /{id}/stats      -> get_asset_stats
/// PATCH  /{id}/contract   -> update_contract
/// PATCH  /{id}/staking    -> update_staking
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(assets::list_assets))
        .route("/mint", post(assets::mint_asset))
        .route("/{id}", get(assets::get_asset))
        .route("/{id}/stats", get(assets::get_asset_stats))
        .route("/{id}/contract", patch(assets::update_contract))
        .route("/{id}/staking", patch(assets::update_staking))
}
