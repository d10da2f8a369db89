// ==========================================
// 车辆段运营状态服务 - 配置层
// ==========================================
// 职责: 服务监听地址、日志格式、演示数据开关
// 来源: 环境变量 (DEPOT_OPS_*)，缺省取默认值
// ==========================================

pub mod server_config;

// 重导出核心配置
pub use server_config::{config_keys, LogFormat, ServerConfig};
