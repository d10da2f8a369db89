// ==========================================
// 车辆段运营状态服务 - 品牌广告领域模型
// ==========================================
// 职责: 车身品牌广告活动记录
// 约束: 只追加，campaign_id 由服务端生成 (UUID v4)
// ==========================================

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

// 不带时区的时间格式（%.f 允许省略小数秒）
const LOCAL_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const DATE_ONLY_FORMAT: &str = "%Y-%m-%d";

// ==========================================
// CampaignTimestamp - 广告起止时间
// ==========================================
// 接受 RFC 3339（带偏移）、无时区日期时间、纯日期；
// 校验后按提交的原文保存与返回，不做时区换算
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CampaignTimestamp(String);

impl CampaignTimestamp {
    /// 校验并构造
    pub fn parse(raw: &str) -> Result<Self, String> {
        let text = raw.trim();
        let accepted = DateTime::parse_from_rfc3339(text).is_ok()
            || LOCAL_DATETIME_FORMATS
                .iter()
                .any(|fmt| NaiveDateTime::parse_from_str(text, fmt).is_ok())
            || NaiveDate::parse_from_str(text, DATE_ONLY_FORMAT).is_ok();

        if accepted {
            Ok(Self(text.to_string()))
        } else {
            Err(format!("无法识别的时间格式: {}", raw))
        }
    }

    /// 是否带时区偏移
    pub fn has_offset(&self) -> bool {
        DateTime::parse_from_rfc3339(&self.0).is_ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CampaignTimestamp {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<CampaignTimestamp> for String {
    fn from(ts: CampaignTimestamp) -> Self {
        ts.0
    }
}

impl fmt::Display for CampaignTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ==========================================
// BrandingCampaignCreate - 新建请求
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandingCampaignCreate {
    pub brand_name: String,
    pub ad_content: String,
    pub start_date: CampaignTimestamp,
    pub end_date: CampaignTimestamp,
}

// ==========================================
// BrandingCampaign - 已存储的广告活动
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandingCampaign {
    pub campaign_id: String,
    pub brand_name: String,
    pub ad_content: String,
    pub start_date: CampaignTimestamp,
    pub end_date: CampaignTimestamp,
}

impl BrandingCampaign {
    /// 以生成的ID落成广告活动
    pub fn from_create(campaign_id: String, create: BrandingCampaignCreate) -> Self {
        Self {
            campaign_id,
            brand_name: create.brand_name,
            ad_content: create.ad_content,
            start_date: create.start_date,
            end_date: create.end_date,
        }
    }
}
