// ==========================================
// 车辆段运营状态服务 - 股道计划分配引擎
// ==========================================
// 职责: 按输入顺序把列车划入值班分组，并为前 N 条股道生成停放建议
// 输入: 股道数 + 有序列车号序列
// 输出: YardPlan（不落库，由 YardApi 写入当前计划）
// ==========================================
// 规则:
// 1) 值班分组按位置轮转: i mod 3 = 0/1/2 -> service/standby/maintenance
// 2) 股道分配: i < min(tracks, N) 时 track_<i+1> -> trainsets[i]
// 3) 两步互不影响；重复列车号按位置各算一次；tracks <= 0 时不分配股道
// 分组与列车状态、公里数无关，是固定轮转而非约束求解
// ==========================================

use crate::domain::types::DutyGroup;
use crate::domain::yard::{track_label, YardPlan};
use tracing::instrument;

// ==========================================
// YardAllocator - 股道计划分配引擎
// ==========================================
#[derive(Debug, Default, Clone, Copy)]
pub struct YardAllocator;

impl YardAllocator {
    pub fn new() -> Self {
        Self
    }

    /// 生成股道计划
    ///
    /// # 参数
    /// - tracks: 可用股道数（允许 0 或负数）
    /// - trainsets: 有序列车号序列（顺序决定分配结果）
    #[instrument(skip(self, trainsets), fields(trainset_count = trainsets.len()))]
    pub fn plan(&self, tracks: i64, trainsets: &[String]) -> YardPlan {
        let mut plan = YardPlan::default();

        for (index, trainset) in trainsets.iter().enumerate() {
            plan.group_mut(DutyGroup::for_position(index)).push(trainset.clone());
        }

        let track_count = usable_track_count(tracks, trainsets.len());
        for (index, trainset) in trainsets.iter().take(track_count).enumerate() {
            plan.suggested_map.insert(track_label(index + 1), trainset.clone());
        }

        tracing::debug!(
            tracks,
            assigned_tracks = plan.suggested_map.len(),
            service = plan.service.len(),
            standby = plan.standby.len(),
            maintenance = plan.maintenance.len(),
            "股道计划已生成"
        );

        plan
    }
}

/// 实际可分配的股道数: min(max(tracks, 0), N)
fn usable_track_count(tracks: i64, trainset_count: usize) -> usize {
    usize::try_from(tracks.max(0))
        .unwrap_or(usize::MAX)
        .min(trainset_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn map_entries(plan: &YardPlan) -> Vec<(&str, &str)> {
        plan.suggested_map
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    #[test]
    fn test_plan_two_tracks_four_trainsets() {
        let plan = YardAllocator::new().plan(2, &ids(&["A", "B", "C", "D"]));

        assert_eq!(plan.service, ids(&["A", "D"]));
        assert_eq!(plan.standby, ids(&["B"]));
        assert_eq!(plan.maintenance, ids(&["C"]));
        assert_eq!(map_entries(&plan), vec![("track_1", "A"), ("track_2", "B")]);
    }

    #[test]
    fn test_plan_zero_tracks() {
        let plan = YardAllocator::new().plan(0, &ids(&["A"]));

        assert!(plan.suggested_map.is_empty());
        assert_eq!(plan.service, ids(&["A"]));
        assert!(plan.standby.is_empty());
        assert!(plan.maintenance.is_empty());
    }

    #[test]
    fn test_plan_negative_tracks_accepted() {
        let plan = YardAllocator::new().plan(-5, &ids(&["A", "B", "C"]));

        assert!(plan.suggested_map.is_empty());
        assert_eq!(plan.assigned_count(), 3);
    }

    #[test]
    fn test_plan_empty_trainsets() {
        let plan = YardAllocator::new().plan(10, &[]);
        assert!(plan.is_empty());
    }

    #[test]
    fn test_plan_more_tracks_than_trainsets_no_padding() {
        let plan = YardAllocator::new().plan(i64::MAX, &ids(&["A", "B"]));
        assert_eq!(map_entries(&plan), vec![("track_1", "A"), ("track_2", "B")]);
    }

    #[test]
    fn test_plan_duplicates_processed_by_position() {
        let plan = YardAllocator::new().plan(2, &ids(&["A", "A", "A", "A"]));

        assert_eq!(plan.service, ids(&["A", "A"]));
        assert_eq!(plan.standby, ids(&["A"]));
        assert_eq!(plan.maintenance, ids(&["A"]));
        assert_eq!(map_entries(&plan), vec![("track_1", "A"), ("track_2", "A")]);
    }

    #[test]
    fn test_partition_and_track_properties() {
        let allocator = YardAllocator::new();
        let trainsets: Vec<String> = (0..23).map(|i| format!("T{:03}", i)).collect();

        for tracks in [-3_i64, 0, 1, 7, 22, 23, 40] {
            for len in [0_usize, 1, 2, 3, 10, 23] {
                let input = &trainsets[..len];
                let plan = allocator.plan(tracks, input);

                assert_eq!(plan.assigned_count(), len);
                for (i, trainset) in input.iter().enumerate() {
                    let group = plan.group(DutyGroup::for_position(i));
                    assert_eq!(&group[i / 3], trainset);
                }

                let expected_tracks = (tracks.max(0) as usize).min(len);
                assert_eq!(plan.suggested_map.len(), expected_tracks);
                for (label, trainset) in &plan.suggested_map {
                    let number: usize = label.trim_start_matches("track_").parse().unwrap();
                    assert_eq!(&input[number - 1], trainset);
                }
            }
        }
    }

    #[test]
    fn test_duty_group_independent_of_track() {
        // 第 3 列车进检修组，但仍获得 track_3
        let plan = YardAllocator::new().plan(3, &ids(&["A", "B", "C"]));
        assert_eq!(plan.maintenance, ids(&["C"]));
        assert_eq!(plan.suggested_map.get("track_3").map(String::as_str), Some("C"));
    }
}
