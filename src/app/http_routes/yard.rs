use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::app::state::AppState;
use crate::domain::yard::{YardInput, YardPlan};

use super::common::parse_body;

// ==========================================
// 股道计划相关路由
// ==========================================

/// 查询当前计划
pub(super) async fn get_yard_plan(
    State(state): State<Arc<AppState>>,
) -> Result<Json<YardPlan>, ApiError> {
    Ok(Json(state.yard_api.current_plan()?))
}

/// 按股道数与列车序列生成计划
pub(super) async fn create_yard_plan(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<YardInput>, JsonRejection>,
) -> Result<Json<YardPlan>, ApiError> {
    let input = parse_body(payload)?;
    Ok(Json(state.yard_api.generate_plan(input)?))
}

/// 值班员覆写计划
pub(super) async fn update_yard_plan(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<YardPlan>, JsonRejection>,
) -> Result<Json<YardPlan>, ApiError> {
    let plan = parse_body(payload)?;
    Ok(Json(state.yard_api.override_plan(plan)?))
}
