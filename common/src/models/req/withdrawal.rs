use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 按周期提现：提取某笔投资累计的可提收益
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalRequest {
    pub investment_id: String,
    pub wallet_address: String,
}

/// 一键提现：金额 ≤ 可提净额，需提现密码二次确认
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawAllRequest {
    pub amount: Decimal,
    pub wallet_address: String,
    pub withdrawal_password: String,
}
