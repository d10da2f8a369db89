// ==========================================
// 车辆段运营状态服务 - 核心库
// ==========================================
// 技术栈: axum + Rust + SQLite(内存库)
// 系统定位: 车辆段日常运营记录 (检修/信号/通信/保洁/股道计划/品牌广告)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 引擎层 - 股道计划分配
pub mod engine;

// 配置层 - 服务配置
pub mod config;

// 数据库基础设施（内存库初始化/建表）
pub mod db;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// 应用层 - HTTP 集成
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{
    BrandingCampaign, BrandingCampaignCreate, CampaignTimestamp, CleaningStatus, DutyGroup,
    RollingStockChecklist, RollingStockData, SignallingStatus, SupervisorOverview, TelecomStatus, YardInput, YardPlan,
};

// 引擎
pub use engine::YardAllocator;

// API
pub use api::{BrandingApi, CleaningApi, DashboardApi, RollingStockApi, SystemStatusApi, YardApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "车辆段运营状态服务";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
