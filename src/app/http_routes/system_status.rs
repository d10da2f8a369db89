use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::app::state::AppState;
use crate::domain::status::{SignallingStatus, TelecomStatus};

use super::common::parse_body;

// ==========================================
// 信号/通信状态相关路由
// ==========================================

pub(super) async fn get_signalling_status(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SignallingStatus>, ApiError> {
    Ok(Json(state.system_status_api.get_signalling_status()?))
}

pub(super) async fn update_signalling_status(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SignallingStatus>, JsonRejection>,
) -> Result<Json<SignallingStatus>, ApiError> {
    let status = parse_body(payload)?;
    Ok(Json(state.system_status_api.update_signalling_status(status)?))
}

pub(super) async fn get_telecom_status(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TelecomStatus>, ApiError> {
    Ok(Json(state.system_status_api.get_telecom_status()?))
}

pub(super) async fn update_telecom_status(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TelecomStatus>, JsonRejection>,
) -> Result<Json<TelecomStatus>, ApiError> {
    let status = parse_body(payload)?;
    Ok(Json(state.system_status_api.update_telecom_status(status)?))
}
