// ==========================================
// 车辆段运营状态服务 - 品牌广告 API
// ==========================================
// 职责: 新建广告活动（服务端生成ID）、列出全部活动
// ==========================================

use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::domain::branding::{BrandingCampaign, BrandingCampaignCreate};
use crate::repository::branding_repo::BrandingCampaignRepository;

// ==========================================
// BrandingApi - 品牌广告 API
// ==========================================
pub struct BrandingApi {
    branding_repo: Arc<BrandingCampaignRepository>,
}

impl BrandingApi {
    pub fn new(branding_repo: Arc<BrandingCampaignRepository>) -> Self {
        Self { branding_repo }
    }

    /// 新建广告活动
    ///
    /// # 返回
    /// - Ok(BrandingCampaign): 带 campaign_id (UUID v4) 的已存储记录
    pub fn create_campaign(&self, create: BrandingCampaignCreate) -> ApiResult<BrandingCampaign> {
        let campaign = BrandingCampaign::from_create(uuid::Uuid::new_v4().to_string(), create);
        self.branding_repo.insert(&campaign)?;

        tracing::info!(
            campaign_id = %campaign.campaign_id,
            brand_name = %campaign.brand_name,
            start_date = %campaign.start_date,
            with_offset = campaign.start_date.has_offset(),
            "品牌广告活动已创建"
        );
        Ok(campaign)
    }

    /// 列出全部广告活动（按创建顺序）
    pub fn list_campaigns(&self) -> ApiResult<Vec<BrandingCampaign>> {
        Ok(self.branding_repo.list_all()?)
    }
}
