use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::AppState;

async fn database_alive(state: &AppState) -> bool {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.db)
        .await
        .is_ok()
}

pub async fn root(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "service": "Benny Daily Check-in Backend",
        "database_connected": database_alive(&state).await,
    }))
}

pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let db_ok = database_alive(&state).await;
    let status = if db_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(json!({
            "status": if db_ok { "healthy" } else { "unhealthy" },
            "database_connected": db_ok,
        })),
    )
}
