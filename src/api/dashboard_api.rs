// ==========================================
// 车辆段运营状态服务 - 驾驶舱 API
// ==========================================
// 职责: 值班主任总览（信号、通信、车辆检修告警、保洁），只读聚合
// 架构: 委托给各资源 API，不直接访问仓储
// ==========================================

use std::sync::Arc;

use crate::api::cleaning_api::CleaningApi;
use crate::api::error::ApiResult;
use crate::api::rolling_stock_api::RollingStockApi;
use crate::api::system_status_api::SystemStatusApi;
use crate::domain::dashboard::SupervisorOverview;
use crate::domain::status::HealthFlags;

// ==========================================
// DashboardApi - 驾驶舱 API
// ==========================================
pub struct DashboardApi {
    system_status_api: Arc<SystemStatusApi>,
    rolling_stock_api: Arc<RollingStockApi>,
    cleaning_api: Arc<CleaningApi>,
}

impl DashboardApi {
    pub fn new(
        system_status_api: Arc<SystemStatusApi>,
        rolling_stock_api: Arc<RollingStockApi>,
        cleaning_api: Arc<CleaningApi>,
    ) -> Self {
        Self {
            system_status_api,
            rolling_stock_api,
            cleaning_api,
        }
    }

    /// 单列车的值班主任总览
    ///
    /// - signalling_ok / telecom_ok: 对应状态的全部标志为真
    /// - open_inspection_alerts: 巡检告警条数
    /// - cleaning_complete: 三项保洁全部完成
    pub fn supervisor_overview(&self, train_id: &str) -> ApiResult<SupervisorOverview> {
        let signalling = self.system_status_api.get_signalling_status()?;
        let telecom = self.system_status_api.get_telecom_status()?;
        let rolling_stock = self.rolling_stock_api.get_rolling_stock(train_id)?;
        let cleaning = self.cleaning_api.get_cleaning_status(train_id)?;

        Ok(SupervisorOverview {
            train_id: train_id.to_string(),
            signalling_ok: signalling.all_ok(),
            telecom_ok: telecom.all_ok(),
            open_inspection_alerts: rolling_stock.open_alert_count(),
            cleaning_complete: cleaning.all_ok(),
        })
    }
}
