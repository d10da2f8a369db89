// ==========================================
// 车辆段运营状态服务 - 股道计划仓储
// ==========================================
// 红线: 当前计划只有一份；生成与覆写都是整份替换，无合并、无版本
// ==========================================

use crate::domain::types::ResourceKind;
use crate::domain::yard::YardPlan;
use crate::repository::error::RepositoryResult;
use crate::repository::record_repo::KeyedRecordRepository;
use rusqlite::Connection;
use std::sync::{Arc, Mutex};

/// 当前计划在 record_kv 中的键
pub const CURRENT_PLAN_KEY: &str = "current_plan";

// ==========================================
// YardPlanRepository - 股道计划仓储
// ==========================================
pub struct YardPlanRepository {
    records: KeyedRecordRepository<YardPlan>,
}

impl YardPlanRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self {
            records: KeyedRecordRepository::new(conn, ResourceKind::YardPlan),
        }
    }

    /// 当前计划
    ///
    /// # 返回
    /// - Ok(None): 尚未生成或提交过计划
    pub fn current(&self) -> RepositoryResult<Option<YardPlan>> {
        self.records.find(CURRENT_PLAN_KEY)
    }

    /// 替换当前计划，返回写入的计划
    pub fn save_current(&self, plan: YardPlan) -> RepositoryResult<YardPlan> {
        self.records.replace(CURRENT_PLAN_KEY, plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_shared_connection;

    #[test]
    fn test_save_current_replaces_whole_plan() {
        let repo = YardPlanRepository::new(open_shared_connection().unwrap());
        assert!(repo.current().unwrap().is_none());

        let mut first = YardPlan::default();
        first.service = vec!["A".to_string(), "B".to_string()];
        repo.save_current(first).unwrap();

        let mut second = YardPlan::default();
        second.maintenance = vec!["C".to_string()];
        repo.save_current(second.clone()).unwrap();

        assert_eq!(repo.current().unwrap(), Some(second));
    }
}
