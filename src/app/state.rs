// ==========================================
// 车辆段运营状态服务 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// 说明: 所有状态由 AppState 持有并注入路由，不使用模块级全局变量
// ==========================================

use std::sync::Arc;

use crate::api::{BrandingApi, CleaningApi, DashboardApi, RollingStockApi, SystemStatusApi, YardApi};
use crate::config::ServerConfig;
use crate::db::open_shared_connection;
use crate::domain::rolling_stock::{RollingStockChecklist, RollingStockData};
use crate::domain::status::CleaningStatus;
use crate::domain::types::ResourceKind;
use crate::engine::YardAllocator;
use crate::repository::{
    BrandingCampaignRepository, KeyedRecordRepository, SingletonRecordRepository,
    YardPlanRepository,
};

/// 演示数据使用的列车号
pub const DEMO_TRAIN_ID: &str = "train_001";

/// 应用状态
///
/// 包含所有API实例；进程内内存库，进程退出即丢失
pub struct AppState {
    /// 车辆检修API
    pub rolling_stock_api: Arc<RollingStockApi>,

    /// 信号/通信状态API
    pub system_status_api: Arc<SystemStatusApi>,

    /// 保洁API
    pub cleaning_api: Arc<CleaningApi>,

    /// 股道计划API
    pub yard_api: Arc<YardApi>,

    /// 品牌广告API
    pub branding_api: Arc<BrandingApi>,

    /// 驾驶舱API
    pub dashboard_api: Arc<DashboardApi>,
}

impl AppState {
    /// 创建新的AppState实例
    ///
    /// # 说明
    /// 该方法会：
    /// 1. 打开内存库并建表
    /// 2. 初始化所有Repository与Engine
    /// 3. 创建所有API实例
    /// 4. 按配置写入演示数据
    pub fn new(config: &ServerConfig) -> Result<Self, String> {
        tracing::info!(seed_demo_data = config.seed_demo_data, "初始化AppState");

        // 共享连接：所有仓储共用同一把锁
        let conn = open_shared_connection().map_err(|e| format!("无法打开内存数据库: {}", e))?;

        // ==========================================
        // 初始化Repository层
        // ==========================================
        let rolling_stock_repo = Arc::new(KeyedRecordRepository::<RollingStockData>::new(
            conn.clone(),
            ResourceKind::RollingStock,
        ));
        let cleaning_repo = Arc::new(KeyedRecordRepository::<CleaningStatus>::new(
            conn.clone(),
            ResourceKind::Cleaning,
        ));
        let signalling_repo = Arc::new(SingletonRecordRepository::new(
            conn.clone(),
            ResourceKind::Signalling,
        ));
        let telecom_repo = Arc::new(SingletonRecordRepository::new(
            conn.clone(),
            ResourceKind::Telecom,
        ));
        let yard_plan_repo = Arc::new(YardPlanRepository::new(conn.clone()));
        let branding_repo = Arc::new(BrandingCampaignRepository::new(conn));

        // ==========================================
        // 创建API层
        // ==========================================
        let rolling_stock_api = Arc::new(RollingStockApi::new(rolling_stock_repo));
        let system_status_api = Arc::new(SystemStatusApi::new(signalling_repo, telecom_repo));
        let cleaning_api = Arc::new(CleaningApi::new(cleaning_repo));
        let yard_api = Arc::new(YardApi::new(YardAllocator::new(), yard_plan_repo));
        let branding_api = Arc::new(BrandingApi::new(branding_repo));
        let dashboard_api = Arc::new(DashboardApi::new(
            system_status_api.clone(),
            rolling_stock_api.clone(),
            cleaning_api.clone(),
        ));

        let state = Self {
            rolling_stock_api,
            system_status_api,
            cleaning_api,
            yard_api,
            branding_api,
            dashboard_api,
        };

        if config.seed_demo_data {
            state
                .seed_demo_data()
                .map_err(|e| format!("写入演示数据失败: {}", e))?;
        }

        tracing::info!("AppState初始化成功");
        Ok(state)
    }

    /// 写入 train_001 的演示检修与保洁数据
    fn seed_demo_data(&self) -> crate::api::ApiResult<()> {
        self.rolling_stock_api.update_rolling_stock(
            DEMO_TRAIN_ID,
            RollingStockData {
                checklist: RollingStockChecklist {
                    fitness_certificates: true,
                    component_wear: false,
                    mileage: true,
                },
                inspection_alerts: vec![
                    "Brake pad wear at 70%".to_string(),
                    "Window crack on car 3".to_string(),
                ],
                scheduled_maintenance: vec!["HVAC filter replacement due in 1 week".to_string()],
                special_notes: vec!["Vandalism reported on car 2, awaiting cleaning".to_string()],
            },
        )?;

        self.cleaning_api.update_cleaning_status(
            DEMO_TRAIN_ID,
            CleaningStatus {
                interior_cleaning: true,
                pest_control: true,
                exterior_cleaning: false,
            },
        )?;

        tracing::info!(train_id = DEMO_TRAIN_ID, "演示数据已写入");
        Ok(())
    }
}
