use crate::utils::relation::RelationNode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 被推荐用户（扁平列表里的一条）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Referral {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// 直接上级的用户 id；顶层（自己邀请的人）指向自己
    #[serde(default)]
    pub referrer_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl RelationNode for Referral {
    type Id = String;

    fn node_id(&self) -> Self::Id {
        self.id.clone()
    }

    fn parent_id(&self) -> Option<Self::Id> {
        self.referrer_id.clone()
    }
}

/// 三级推荐树投影（只读，除计数外无任何计算）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralTree {
    #[serde(default)]
    pub level1: Vec<Referral>,
    #[serde(default)]
    pub level2: Vec<Referral>,
    #[serde(default)]
    pub level3: Vec<Referral>,
    #[serde(default)]
    pub total_referrals: usize,
}

impl ReferralTree {
    /// 重新统计总人数（各级之和）
    pub fn recount(&mut self) {
        self.total_referrals = self.level1.len() + self.level2.len() + self.level3.len();
    }
}
