use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use finscore_storage_sqlite::get_connection;

use crate::{config::APP_NAME, error::ApiResult, main_lib::AppState, models::HealthResponse};

fn health(database: Option<String>) -> HealthResponse {
    HealthResponse {
        status: "healthy".to_string(),
        application: APP_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database,
        timestamp: Utc::now(),
    }
}

#[utoipa::path(get, path = "/", responses((status = 200, body = HealthResponse)), tag = "Health")]
pub async fn root() -> Json<HealthResponse> {
    Json(health(None))
}

/// Also checks that a pooled database connection can be acquired.
#[utoipa::path(get, path = "/health", responses((status = 200, body = HealthResponse)), tag = "Health")]
pub async fn health_check(State(state): State<Arc<AppState>>) -> ApiResult<Json<HealthResponse>> {
    get_connection(&state.pool)?;
    Ok(Json(health(Some("connected".to_string()))))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}
