use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter};

/// 充值状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, AsRefStr)]
#[serde(rename_all = "lowercase")]
pub enum DepositStatus {
    #[strum(to_string = "处理中")]
    Pending,
    #[strum(to_string = "已入账")]
    Confirmed,
    #[strum(to_string = "失败")]
    Failed,
}

/// 充值类型 (链上真实充值 / 演示额度)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepositType {
    Real,
    Demo,
}

/// 充值订单
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deposit {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub amount: Decimal,
    pub status: DepositStatus,
    #[serde(default)]
    pub tx_hash: Option<String>,
    #[serde(default)]
    pub from_address: Option<String>,
    /// 链上确认数
    #[serde(default)]
    pub confirmations: u32,
    #[serde(rename = "type", default)]
    pub deposit_type: Option<DepositType>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub processed_at: Option<DateTime<Utc>>,
}
