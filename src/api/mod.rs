// ==========================================
// 车辆段运营状态服务 - API 层
// ==========================================
// 职责: 提供业务 API 接口,供 HTTP 路由调用
// ==========================================

pub mod branding_api;
pub mod cleaning_api;
pub mod dashboard_api;
pub mod error;
pub mod rolling_stock_api;
pub mod system_status_api;
pub mod yard_api;

// 重导出核心类型
pub use branding_api::BrandingApi;
pub use cleaning_api::CleaningApi;
pub use dashboard_api::DashboardApi;
pub use error::{ApiError, ApiResult};
pub use rolling_stock_api::RollingStockApi;
pub use system_status_api::SystemStatusApi;
pub use yard_api::YardApi;
