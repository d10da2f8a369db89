use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;

use crate::api::error::ApiError;
use crate::app::state::AppState;
use crate::domain::status::CleaningStatus;

use super::common::parse_body;

// ==========================================
// 保洁相关路由
// ==========================================

pub(super) async fn get_cleaning_status(
    State(state): State<Arc<AppState>>,
    Path(train_id): Path<String>,
) -> Result<Json<CleaningStatus>, ApiError> {
    Ok(Json(state.cleaning_api.get_cleaning_status(&train_id)?))
}

pub(super) async fn update_cleaning_status(
    State(state): State<Arc<AppState>>,
    Path(train_id): Path<String>,
    payload: Result<Json<CleaningStatus>, JsonRejection>,
) -> Result<Json<CleaningStatus>, ApiError> {
    let status = parse_body(payload)?;
    Ok(Json(state.cleaning_api.update_cleaning_status(&train_id, status)?))
}
