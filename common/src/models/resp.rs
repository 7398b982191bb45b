use crate::models::admin::{AdminUserView, PendingWithdrawalGroup};
use crate::models::deposit::Deposit;
use crate::models::investment::{Investment, InvestmentTier};
use crate::models::referral::Referral;
use crate::models::user::{AccountSummary, UserProfile};
use crate::models::withdrawal::Withdrawal;
use serde::{Deserialize, Serialize};

/// 后端错误响应体 ({"error": "..."})
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// 通用成功响应 ({"message": "..."})
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    pub user: UserProfile,
}

/// 用户主面板：账户汇总 + 活跃投资
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub account_summary: AccountSummary,
    #[serde(default)]
    pub active_investments: Vec<Investment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TiersResponse {
    pub tiers: Vec<InvestmentTier>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferralsResponse {
    #[serde(default)]
    pub referrals: Vec<Referral>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvitationResponse {
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawalsResponse {
    #[serde(default)]
    pub withdrawals: Vec<Withdrawal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositsResponse {
    #[serde(default)]
    pub deposits: Vec<Deposit>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersResponse {
    #[serde(default)]
    pub users: Vec<AdminUserView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingWithdrawalsResponse {
    #[serde(default)]
    pub grouped_withdrawals: Vec<PendingWithdrawalGroup>,
}
