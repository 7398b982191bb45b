use crate::models::label::Label;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, IntoEnumIterator};

/// 提现状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, AsRefStr)]
#[serde(rename_all = "lowercase")]
pub enum WithdrawalStatus {
    /// 待审批
    #[strum(to_string = "待审批")]
    Pending,
    /// 已批准（等待链上转账）
    #[strum(to_string = "已批准")]
    Approved,
    /// 已拒绝
    #[strum(to_string = "已拒绝")]
    Rejected,
    /// 已完成
    #[strum(to_string = "已完成")]
    Completed,
}

impl WithdrawalStatus {
    /// 是否已经出账（批准即视为出账，链上完成只是补充凭证）
    pub fn is_paid_out(self) -> bool {
        matches!(self, WithdrawalStatus::Approved | WithdrawalStatus::Completed)
    }

    pub fn description(&self) -> String {
        self.as_ref().to_string()
    }

    /// 获取所有枚举的 Label 列表
    pub fn all_labels() -> Vec<Label<String, String>> {
        Self::iter()
            .map(|e| Label {
                value: serde_json::to_value(e)
                    .ok()
                    .and_then(|v| v.as_str().map(str::to_string))
                    .unwrap_or_default(),
                label: e.description(),
            })
            .collect()
    }
}

/// 提现申请记录
///
/// investment_id 为空表示余额/推荐奖励提现（金额本身已是净额，手续费为 0）。
/// 不变式: net_amount = amount - fee_amount（两者都存在时）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Withdrawal {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub investment_id: Option<String>,
    /// 毛额
    pub amount: Decimal,
    #[serde(default)]
    pub fee_amount: Option<Decimal>,
    #[serde(default)]
    pub net_amount: Option<Decimal>,
    pub status: WithdrawalStatus,
    #[serde(default)]
    pub wallet_address: Option<String>,
    #[serde(default)]
    pub tx_hash: Option<String>,
    pub requested_at: DateTime<Utc>,
    #[serde(default)]
    pub processed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notes: Option<String>,
}
