// ==========================================
// 车辆段运营状态服务 - 系统状态领域模型
// ==========================================
// 信号/通信为全局单例，默认全部正常 (true)
// 保洁按列车号记录，默认全部未完成 (false)
// ==========================================

use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

// ==========================================
// SignallingStatus - 信号系统状态
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignallingStatus {
    #[serde(default = "default_true")]
    pub track_communication_stable: bool,
    #[serde(default = "default_true")]
    pub safety_limits_operational: bool,
    #[serde(default = "default_true")]
    pub no_errors_detected: bool,
}

impl Default for SignallingStatus {
    fn default() -> Self {
        Self {
            track_communication_stable: true,
            safety_limits_operational: true,
            no_errors_detected: true,
        }
    }
}

// ==========================================
// TelecomStatus - 通信系统状态
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelecomStatus {
    #[serde(default = "default_true")]
    pub voice_data_functional: bool,
    #[serde(default = "default_true")]
    pub emergency_comm_operational: bool,
    #[serde(default = "default_true")]
    pub no_interference_detected: bool,
}

impl Default for TelecomStatus {
    fn default() -> Self {
        Self {
            voice_data_functional: true,
            emergency_comm_operational: true,
            no_interference_detected: true,
        }
    }
}

// ==========================================
// CleaningStatus - 保洁状态
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningStatus {
    #[serde(default)]
    pub interior_cleaning: bool,
    #[serde(default)]
    pub pest_control: bool,
    #[serde(default)]
    pub exterior_cleaning: bool,
}

// ==========================================
// Trait: HealthFlags
// ==========================================
// 用途: 驾驶舱汇总 "全部标志为真"
pub trait HealthFlags {
    fn all_ok(&self) -> bool;
}

impl HealthFlags for SignallingStatus {
    fn all_ok(&self) -> bool {
        self.track_communication_stable && self.safety_limits_operational && self.no_errors_detected
    }
}

impl HealthFlags for TelecomStatus {
    fn all_ok(&self) -> bool {
        self.voice_data_functional
            && self.emergency_comm_operational
            && self.no_interference_detected
    }
}

impl HealthFlags for CleaningStatus {
    fn all_ok(&self) -> bool {
        self.interior_cleaning && self.pest_control && self.exterior_cleaning
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signalling_missing_fields_default_true() {
        let status: SignallingStatus =
            serde_json::from_str(r#"{"no_errors_detected":false}"#).unwrap();
        assert!(status.track_communication_stable);
        assert!(status.safety_limits_operational);
        assert!(!status.no_errors_detected);
        assert!(!status.all_ok());
    }

    #[test]
    fn test_defaults() {
        assert!(SignallingStatus::default().all_ok());
        assert!(TelecomStatus::default().all_ok());
        assert!(!CleaningStatus::default().all_ok());
    }
}
