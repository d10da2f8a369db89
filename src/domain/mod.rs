// ==========================================
// 车辆段运营状态服务 - 领域模型层
// ==========================================
// 职责: 定义领域实体、默认值、值班分组
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod branding;
pub mod dashboard;
pub mod rolling_stock;
pub mod status;
pub mod types;
pub mod yard;

// 重导出核心类型
pub use branding::{BrandingCampaign, BrandingCampaignCreate, CampaignTimestamp};
pub use dashboard::SupervisorOverview;
pub use rolling_stock::{RollingStockChecklist, RollingStockData};
pub use status::{CleaningStatus, HealthFlags, SignallingStatus, TelecomStatus};
pub use types::{DutyGroup, ResourceKind};
pub use yard::{track_label, YardInput, YardPlan, TRACK_LABEL_PREFIX};
