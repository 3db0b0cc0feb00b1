use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::error::AppError;
use crate::AppState;

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "goaltrack-api",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn readyz(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let (database, schema) = match crate::db::pool::schema_ready(&state.db).await {
        Ok(schema_ok) => (true, schema_ok),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            (false, false)
        }
    };

    let status = if database && schema {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(json!({
            "status": if status == StatusCode::OK { "ready" } else { "not_ready" },
            "checks": {
                "database": if database { "ok" } else { "failed" },
                "schema": if schema { "ok" } else { "missing" },
            },
        })),
    )
}

pub async fn not_found() -> AppError {
    AppError::NotFound("Not found".into())
}
