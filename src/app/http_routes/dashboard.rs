use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;

use crate::api::error::ApiError;
use crate::app::state::AppState;
use crate::domain::dashboard::SupervisorOverview;

/// 值班主任总览（单列车）
pub(super) async fn get_supervisor_overview(
    State(state): State<Arc<AppState>>,
    Path(train_id): Path<String>,
) -> Result<Json<SupervisorOverview>, ApiError> {
    Ok(Json(state.dashboard_api.supervisor_overview(&train_id)?))
}
