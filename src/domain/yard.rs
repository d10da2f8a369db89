// ==========================================
// 车辆段运营状态服务 - 股道计划领域模型
// ==========================================
// 职责: 定义股道计划输入 (YardInput) 与计划 (YardPlan)
// 红线: 当前计划只有一份，生成与人工覆写共用同一存储位
// ==========================================

use crate::domain::types::DutyGroup;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 股道标签前缀，编号从 1 开始
pub const TRACK_LABEL_PREFIX: &str = "track_";

/// 生成股道标签: track_<n>
pub fn track_label(number: usize) -> String {
    format!("{}{}", TRACK_LABEL_PREFIX, number)
}

// ==========================================
// YardInput - 股道计划输入
// ==========================================
// tracks 允许为 0 或负数（不校验），只影响股道分配条目数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YardInput {
    pub tracks: i64,
    pub trainsets: Vec<String>,
}

// ==========================================
// YardPlan - 股道计划
// ==========================================
// suggested_map: 股道标签 -> 列车号，保持插入顺序
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YardPlan {
    #[serde(alias = "track_assignment")]
    pub suggested_map: IndexMap<String, String>,
    pub service: Vec<String>,
    pub standby: Vec<String>,
    pub maintenance: Vec<String>,
}

impl YardPlan {
    /// 取某值班分组的列车序列
    pub fn group(&self, group: DutyGroup) -> &[String] {
        match group {
            DutyGroup::Service => &self.service,
            DutyGroup::Standby => &self.standby,
            DutyGroup::Maintenance => &self.maintenance,
        }
    }

    pub(crate) fn group_mut(&mut self, group: DutyGroup) -> &mut Vec<String> {
        match group {
            DutyGroup::Service => &mut self.service,
            DutyGroup::Standby => &mut self.standby,
            DutyGroup::Maintenance => &mut self.maintenance,
        }
    }

    /// 三个分组的列车总数
    pub fn assigned_count(&self) -> usize {
        self.service.len() + self.standby.len() + self.maintenance.len()
    }

    /// 是否为空计划（尚未生成/提交）
    pub fn is_empty(&self) -> bool {
        self.suggested_map.is_empty() && self.assigned_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_assignment_alias_accepted() {
        let plan: YardPlan = serde_json::from_str(
            r#"{"track_assignment":{"track_2":"B","track_1":"A"},"service":["A"],"standby":[],"maintenance":["B"]}"#,
        )
        .unwrap();

        let labels: Vec<&str> = plan.suggested_map.keys().map(String::as_str).collect();
        assert_eq!(labels, vec!["track_2", "track_1"]);
        assert_eq!(plan.group(DutyGroup::Maintenance), ["B".to_string()]);
    }

    #[test]
    fn test_serializes_as_suggested_map() {
        let mut plan = YardPlan::default();
        plan.suggested_map.insert(track_label(1), "T01".to_string());
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["suggested_map"]["track_1"], "T01");
        assert!(json.get("track_assignment").is_none());
    }
}
