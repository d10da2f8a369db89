// ==========================================
// 车辆段运营状态服务 - 品牌广告仓储
// ==========================================
// 红线: Repository 不含业务逻辑
// 存储: branding_campaign 表，只追加
// ==========================================

use crate::domain::branding::{BrandingCampaign, CampaignTimestamp};
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::Utc;
use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex, MutexGuard};

// ==========================================
// BrandingCampaignRepository - 品牌广告仓储
// ==========================================
/// 品牌广告仓储
/// 职责: 管理 branding_campaign 表的插入与查询
pub struct BrandingCampaignRepository {
    conn: Arc<Mutex<Connection>>,
}

impl BrandingCampaignRepository {
    /// 从已有连接创建仓储实例
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// 获取数据库连接
    fn get_conn(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 插入广告活动（campaign_id 重复时返回唯一约束错误）
    pub fn insert(&self, campaign: &BrandingCampaign) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO branding_campaign (
                campaign_id, brand_name, ad_content, start_date, end_date, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                campaign.campaign_id,
                campaign.brand_name,
                campaign.ad_content,
                campaign.start_date.as_str(),
                campaign.end_date.as_str(),
                Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// 查询全部广告活动（插入顺序）
    pub fn list_all(&self) -> RepositoryResult<Vec<BrandingCampaign>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT campaign_id, brand_name, ad_content, start_date, end_date
            FROM branding_campaign
            ORDER BY seq ASC
            "#,
        )?;

        let rows = stmt
            .query_map([], RawCampaignRow::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        rows.into_iter().map(RawCampaignRow::into_campaign).collect()
    }
}

// 行数据，时间列按提交原文存储
struct RawCampaignRow {
    campaign_id: String,
    brand_name: String,
    ad_content: String,
    start_date: String,
    end_date: String,
}

impl RawCampaignRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            campaign_id: row.get(0)?,
            brand_name: row.get(1)?,
            ad_content: row.get(2)?,
            start_date: row.get(3)?,
            end_date: row.get(4)?,
        })
    }

    fn into_campaign(self) -> RepositoryResult<BrandingCampaign> {
        Ok(BrandingCampaign {
            start_date: parse_timestamp("start_date", &self.start_date)?,
            end_date: parse_timestamp("end_date", &self.end_date)?,
            campaign_id: self.campaign_id,
            brand_name: self.brand_name,
            ad_content: self.ad_content,
        })
    }
}

fn parse_timestamp(field: &str, raw: &str) -> RepositoryResult<CampaignTimestamp> {
    CampaignTimestamp::parse(raw).map_err(|message| RepositoryError::FieldValueError {
        field: field.to_string(),
        message,
    })
}
