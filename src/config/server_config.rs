// ==========================================
// 车辆段运营状态服务 - 服务配置
// ==========================================
// 职责: 从环境变量加载服务配置，缺失或非法时回退默认值
// ==========================================

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    /// 监听地址
    pub const HOST: &str = "DEPOT_OPS_HOST";
    /// 监听端口
    pub const PORT: &str = "DEPOT_OPS_PORT";
    /// 日志格式: pretty / json
    pub const LOG_FORMAT: &str = "DEPOT_OPS_LOG_FORMAT";
    /// 是否写入 train_001 演示数据
    pub const SEED_DEMO: &str = "DEPOT_OPS_SEED_DEMO";
}

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1));
pub const DEFAULT_PORT: u16 = 8000;

// ==========================================
// LogFormat - 日志输出格式
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("未知日志格式: {}", other)),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Pretty => write!(f, "pretty"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

// ==========================================
// ServerConfig - 服务配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub log_format: LogFormat,
    pub seed_demo_data: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            log_format: LogFormat::Pretty,
            seed_demo_data: true,
        }
    }
}

impl ServerConfig {
    /// 从进程环境变量加载
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源加载（便于测试）
    ///
    /// 非法值记录告警并回退默认值，不中断启动
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            host: parse_or_default(&lookup, config_keys::HOST, defaults.host),
            port: parse_or_default(&lookup, config_keys::PORT, defaults.port),
            log_format: parse_or_default(&lookup, config_keys::LOG_FORMAT, defaults.log_format),
            seed_demo_data: lookup(config_keys::SEED_DEMO)
                .map(|raw| parse_flag(config_keys::SEED_DEMO, &raw, defaults.seed_demo_data))
                .unwrap_or(defaults.seed_demo_data),
        }
    }

    /// 监听地址
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or_default<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, fallback = %default, "配置值非法，使用默认值");
            default
        }),
        None => default,
    }
}

fn parse_flag(key: &str, raw: &str, default: bool) -> bool {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => {
            tracing::warn!(key, value = raw, fallback = default, "配置值非法，使用默认值");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ServerConfig::from_lookup(|_| None);
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:8000");
    }

    #[test]
    fn test_values_from_lookup() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            (config_keys::HOST, "0.0.0.0"),
            (config_keys::PORT, "9090"),
            (config_keys::LOG_FORMAT, "JSON"),
            (config_keys::SEED_DEMO, "off"),
        ]));

        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:9090");
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(!config.seed_demo_data);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            (config_keys::PORT, "eighty"),
            (config_keys::LOG_FORMAT, "xml"),
            (config_keys::SEED_DEMO, "maybe"),
        ]));

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(config.seed_demo_data);
    }
}
