// ==========================================
// 车辆段运营状态服务 - HTTP 路由（按域拆分）
// ==========================================
// 职责: axum 路由定义,连接调用方与后端 API
// 跨域: 不限制来源、方法、请求头
// ==========================================

mod branding;
mod cleaning;
mod common;
mod dashboard;
mod health;
mod rolling_stock;
mod system_status;
mod yard;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::app::state::AppState;

pub use common::ErrorResponse;

/// 构建完整路由（含跨域与请求追踪中间件）
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health::read_root))
        .route(
            "/api/rollingstock/{train_id}",
            get(rolling_stock::get_rolling_stock_data).post(rolling_stock::update_rolling_stock_data),
        )
        .route(
            "/api/signalling/status",
            get(system_status::get_signalling_status).post(system_status::update_signalling_status),
        )
        .route(
            "/api/telecom/status",
            get(system_status::get_telecom_status).post(system_status::update_telecom_status),
        )
        .route(
            "/api/cleaning/{train_id}/status",
            get(cleaning::get_cleaning_status).post(cleaning::update_cleaning_status),
        )
        .route(
            "/api/yard/plan",
            get(yard::get_yard_plan)
                .post(yard::create_yard_plan)
                .put(yard::update_yard_plan),
        )
        .route(
            "/api/branding/campaigns",
            get(branding::get_branding_campaigns).post(branding::create_branding_campaign),
        )
        .route(
            "/api/supervisor/overview/{train_id}",
            get(dashboard::get_supervisor_overview),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
