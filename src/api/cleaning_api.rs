// ==========================================
// 车辆段运营状态服务 - 保洁 API
// ==========================================

use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::domain::status::{CleaningStatus, HealthFlags};
use crate::repository::record_repo::KeyedRecordRepository;

/// 保洁API：按列车号查询/覆盖保洁状态
pub struct CleaningApi {
    cleaning_repo: Arc<KeyedRecordRepository<CleaningStatus>>,
}

impl CleaningApi {
    pub fn new(cleaning_repo: Arc<KeyedRecordRepository<CleaningStatus>>) -> Self {
        Self { cleaning_repo }
    }

    /// 未录入的列车返回全部未完成
    pub fn get_cleaning_status(&self, train_id: &str) -> ApiResult<CleaningStatus> {
        tracing::debug!(train_id, "查询保洁状态");
        Ok(self.cleaning_repo.get_or_default(train_id)?)
    }

    pub fn update_cleaning_status(
        &self,
        train_id: &str,
        status: CleaningStatus,
    ) -> ApiResult<CleaningStatus> {
        let stored = self.cleaning_repo.replace(train_id, status)?;
        tracing::info!(train_id, complete = stored.all_ok(), "保洁状态已更新");
        Ok(stored)
    }
}
