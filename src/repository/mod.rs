// ==========================================
// 车辆段运营状态服务 - 数据仓储层
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================
// 职责: 提供记录存取接口,屏蔽 SQLite 细节
// 约束: 所有查询使用参数化
// ==========================================

pub mod branding_repo;
pub mod error;
pub mod record_repo;
pub mod yard_plan_repo;

// 重导出核心仓储
pub use branding_repo::BrandingCampaignRepository;
pub use error::{RepositoryError, RepositoryResult};
pub use record_repo::{KeyedRecordRepository, SingletonRecordRepository, SINGLETON_KEY};
pub use yard_plan_repo::{YardPlanRepository, CURRENT_PLAN_KEY};
