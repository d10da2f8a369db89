// ==========================================
// 车辆段运营状态服务 - 车辆检修领域模型
// ==========================================
// 职责: 按列车号记录检修清单、巡检告警、计划修程、特别备注
// 红线: 读取未知列车号返回默认记录，不报错
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// RollingStockChecklist - 检修清单
// ==========================================
// 入参字段可省略，缺省为 false
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollingStockChecklist {
    #[serde(default)]
    pub fitness_certificates: bool, // 适用性证书
    #[serde(default)]
    pub component_wear: bool, // 部件磨耗
    #[serde(default)]
    pub mileage: bool, // 走行公里
}

// ==========================================
// RollingStockData - 单列车检修数据
// ==========================================
// 四个顶层字段入参必填（结构校验）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollingStockData {
    pub checklist: RollingStockChecklist,
    pub inspection_alerts: Vec<String>,
    pub scheduled_maintenance: Vec<String>,
    pub special_notes: Vec<String>,
}

impl RollingStockData {
    /// 未关闭的巡检告警数
    pub fn open_alert_count(&self) -> usize {
        self.inspection_alerts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checklist_fields_default_to_false() {
        let data: RollingStockData = serde_json::from_str(
            r#"{"checklist":{"mileage":true},"inspection_alerts":[],"scheduled_maintenance":[],"special_notes":[]}"#,
        )
        .unwrap();

        assert!(data.checklist.mileage);
        assert!(!data.checklist.fitness_certificates);
        assert!(!data.checklist.component_wear);
    }

    #[test]
    fn test_top_level_fields_required() {
        let result: Result<RollingStockData, _> =
            serde_json::from_str(r#"{"checklist":{},"inspection_alerts":[]}"#);
        assert!(result.is_err());
    }
}
