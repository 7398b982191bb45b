use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 后台直接设置用户余额
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceUpdateRequest {
    pub user_id: String,
    pub new_balance: Decimal,
    #[serde(default)]
    pub note: Option<String>,
}

/// 后台调整活跃度积分（正数加分，负数减分）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreUpdateRequest {
    pub user_id: String,
    pub score_change: i32,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordResetRequest {
    pub user_id: String,
    pub new_password: String,
}

/// 后台代注册（跳过邀请码）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminRegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub withdrawal_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailUpdateRequest {
    pub user_id: String,
    pub new_email: String,
}

/// 后台人工入账
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessDepositRequest {
    pub deposit_id: String,
    pub action: String,
    #[serde(default)]
    pub note: Option<String>,
}

/// 批准某用户全部待审提现（合并打款，附链上凭证）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproveUserWithdrawalsRequest {
    pub user_id: String,
    pub tx_hash: String,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectUserWithdrawalsRequest {
    pub user_id: String,
    #[serde(default)]
    pub notes: Option<String>,
}
