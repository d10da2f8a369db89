// ==========================================
// 车辆段运营状态服务 - 应用层
// ==========================================
// 职责: HTTP 集成,连接调用方与后端 API
// ==========================================

pub mod http_routes;
pub mod state;

// 重导出
pub use http_routes::router;
pub use state::{AppState, DEMO_TRAIN_ID};
