use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 提交链上充值凭证
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositSubmitRequest {
    pub tx_hash: String,
    pub amount: Decimal,
    pub from_address: String,
}

/// 修正失败充值的交易信息，等待重新入账
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedDepositUpdateRequest {
    pub deposit_id: String,
    pub tx_hash: String,
    pub amount: Decimal,
}
