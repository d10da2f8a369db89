// ==========================================
// 车辆段运营状态服务 - 驾驶舱汇总视图
// ==========================================
// 只读派生视图，不落库
// ==========================================

use serde::{Deserialize, Serialize};

/// 值班主任总览（单列车）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupervisorOverview {
    pub train_id: String,
    pub signalling_ok: bool,
    pub telecom_ok: bool,
    pub open_inspection_alerts: usize,
    pub cleaning_complete: bool,
}
