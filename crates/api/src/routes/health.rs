use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use axum::{routing::get, Router};
use rwa_core::types::Timestamp;
use rwa_db::repositories::AssetRepo;
use rwa_db::DbPool;
use serde::Serialize;

use crate::response::{envelope, ErrorResponse};
use crate::state::AppState;

/// Static service information.
#[derive(Serialize)]
pub struct ServiceInfo {
    pub name: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
}

/// Health check payload.
#[derive(Serialize)]
pub struct HealthReport {
    /// `ok` or `degraded`.
    pub status: &'static str,
    pub timestamp: Timestamp,
    /// `connected` or `unreachable`.
    pub database: &'static str,
    /// Number of stored assets; absent when the store is unreachable.
    pub total_assets: Option<i64>,
}

/// GET / -- static service information.
async fn service_info() -> Response {
    envelope(
        StatusCode::OK,
        "RWA Backend API is running",
        ServiceInfo {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        },
    )
}

/// GET /api/health -- probes the store and reports the asset count.
///
/// A storage failure is reported as a degraded 500 envelope, never as a raw
/// error.
async fn health_check(State(state): State<AppState>) -> Response {
    match probe_store(&state.pool).await {
        Ok(total_assets) => envelope(
            StatusCode::OK,
            "API is healthy",
            HealthReport {
                status: "ok",
                timestamp: chrono::Utc::now(),
                database: "connected",
                total_assets: Some(total_assets),
            },
        ),
        Err(err) => {
            tracing::error!(error = %err, "Health check failed");
            ErrorResponse::new("STORAGE_UNAVAILABLE", "Database ping failed", err.to_string())
                .with_data(HealthReport {
                    status: "degraded",
                    timestamp: chrono::Utc::now(),
                    database: "unreachable",
                    total_assets: None,
                })
                .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

async fn probe_store(pool: &DbPool) -> Result<i64, sqlx::Error> {
    rwa_db::health_check(pool).await?;
    AssetRepo::count(pool).await
}

/// Root-level service info route.
pub fn root_router() -> Router<AppState> {
    Router::new().route("/", get(service_info))
}

/// Health route, mounted under `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
