use axum::Json;
use serde_json::{json, Value};

/// 存活探针
pub(super) async fn read_root() -> Json<Value> {
    Json(json!({ "message": "Depot operations backend is running" }))
}
