//! Health check handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match &state.db_pool {
        Some(pool) => match pool.health_check().await {
            Ok(true) => Some("connected"),
            Ok(false) | Err(_) => Some("unreachable"),
        },
        None => None,
    };

    let status = if database == Some("unreachable") {
        "degraded"
    } else {
        "ok"
    };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database.map(String::from),
    })
}
