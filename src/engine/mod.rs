// ==========================================
// 车辆段运营状态服务 - 引擎层
// ==========================================
// 职责: 实现业务规则引擎,不访问存储
// ==========================================

pub mod yard_allocator;

// 重导出核心引擎
pub use yard_allocator::YardAllocator;
