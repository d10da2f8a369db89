// ==========================================
// 车辆段运营状态服务 - 车辆检修 API
// ==========================================
// 职责: 按列车号查询/整条覆盖检修数据
// ==========================================

use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::domain::rolling_stock::RollingStockData;
use crate::repository::record_repo::KeyedRecordRepository;

// ==========================================
// RollingStockApi - 车辆检修 API
// ==========================================
pub struct RollingStockApi {
    rolling_stock_repo: Arc<KeyedRecordRepository<RollingStockData>>,
}

impl RollingStockApi {
    /// 创建新的RollingStockApi实例
    pub fn new(rolling_stock_repo: Arc<KeyedRecordRepository<RollingStockData>>) -> Self {
        Self { rolling_stock_repo }
    }

    /// 查询列车检修数据（未录入的列车返回空白清单）
    pub fn get_rolling_stock(&self, train_id: &str) -> ApiResult<RollingStockData> {
        tracing::debug!(train_id, "查询车辆检修数据");
        Ok(self.rolling_stock_repo.get_or_default(train_id)?)
    }

    /// 整条覆盖列车检修数据，返回写入值
    pub fn update_rolling_stock(
        &self,
        train_id: &str,
        data: RollingStockData,
    ) -> ApiResult<RollingStockData> {
        let stored = self.rolling_stock_repo.replace(train_id, data)?;
        tracing::info!(
            train_id,
            inspection_alerts = stored.inspection_alerts.len(),
            "车辆检修数据已更新"
        );
        Ok(stored)
    }
}
