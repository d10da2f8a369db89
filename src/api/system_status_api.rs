// ==========================================
// 车辆段运营状态服务 - 信号/通信状态 API
// ==========================================
// 职责: 全局单例状态的查询与整体覆盖
// 默认: 启动时全部标志为 true
// ==========================================

use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::domain::status::{HealthFlags, SignallingStatus, TelecomStatus};
use crate::repository::record_repo::SingletonRecordRepository;

// ==========================================
// SystemStatusApi - 信号/通信状态 API
// ==========================================
pub struct SystemStatusApi {
    signalling_repo: Arc<SingletonRecordRepository<SignallingStatus>>,
    telecom_repo: Arc<SingletonRecordRepository<TelecomStatus>>,
}

impl SystemStatusApi {
    pub fn new(
        signalling_repo: Arc<SingletonRecordRepository<SignallingStatus>>,
        telecom_repo: Arc<SingletonRecordRepository<TelecomStatus>>,
    ) -> Self {
        Self {
            signalling_repo,
            telecom_repo,
        }
    }

    // ==========================================
    // 信号系统
    // ==========================================

    pub fn get_signalling_status(&self) -> ApiResult<SignallingStatus> {
        Ok(self.signalling_repo.get()?)
    }

    pub fn update_signalling_status(&self, status: SignallingStatus) -> ApiResult<SignallingStatus> {
        let stored = self.signalling_repo.replace(status)?;
        tracing::info!(all_ok = stored.all_ok(), "信号系统状态已更新");
        Ok(stored)
    }

    // ==========================================
    // 通信系统
    // ==========================================

    pub fn get_telecom_status(&self) -> ApiResult<TelecomStatus> {
        Ok(self.telecom_repo.get()?)
    }

    pub fn update_telecom_status(&self, status: TelecomStatus) -> ApiResult<TelecomStatus> {
        let stored = self.telecom_repo.replace(status)?;
        tracing::info!(all_ok = stored.all_ok(), "通信系统状态已更新");
        Ok(stored)
    }
}
