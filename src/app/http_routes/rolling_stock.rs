use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;

use crate::api::error::ApiError;
use crate::app::state::AppState;
use crate::domain::rolling_stock::RollingStockData;

use super::common::parse_body;

// ==========================================
// 车辆检修相关路由
// ==========================================

/// 查询列车检修数据（未录入返回默认值）
pub(super) async fn get_rolling_stock_data(
    State(state): State<Arc<AppState>>,
    Path(train_id): Path<String>,
) -> Result<Json<RollingStockData>, ApiError> {
    let data = state.rolling_stock_api.get_rolling_stock(&train_id)?;
    Ok(Json(data))
}

/// 整条覆盖列车检修数据
pub(super) async fn update_rolling_stock_data(
    State(state): State<Arc<AppState>>,
    Path(train_id): Path<String>,
    payload: Result<Json<RollingStockData>, JsonRejection>,
) -> Result<Json<RollingStockData>, ApiError> {
    let data = parse_body(payload)?;
    let stored = state
        .rolling_stock_api
        .update_rolling_stock(&train_id, data)?;
    Ok(Json(stored))
}
