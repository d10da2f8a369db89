use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::app::state::AppState;
use crate::domain::branding::{BrandingCampaign, BrandingCampaignCreate};

use super::common::parse_body;

// ==========================================
// 品牌广告相关路由
// ==========================================

pub(super) async fn create_branding_campaign(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BrandingCampaignCreate>, JsonRejection>,
) -> Result<Json<BrandingCampaign>, ApiError> {
    let create = parse_body(payload)?;
    Ok(Json(state.branding_api.create_campaign(create)?))
}

pub(super) async fn get_branding_campaigns(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BrandingCampaign>>, ApiError> {
    Ok(Json(state.branding_api.list_campaigns()?))
}
