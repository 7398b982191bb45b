use crate::models::deposit::Deposit;
use crate::models::user::UserProfile;
use crate::models::withdrawal::Withdrawal;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 后台用户列表行
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserView {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub balance: Decimal,
    #[serde(default)]
    pub score: i32,
    #[serde(default)]
    pub is_blocked: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// 后台总览指标
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminMetrics {
    pub total_users: u64,
    pub total_deposits: Decimal,
    pub total_investments: Decimal,
    pub pending_deposits: u64,
    pub pending_withdrawals: u64,
}

/// 趋势采样点（按日/周/月聚合）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub period: String,
    pub count: u64,
    #[serde(default)]
    pub amount: Decimal,
}

/// 运营分析报表
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub summary: AnalyticsSummary,
    #[serde(default)]
    pub user_growth: Vec<TrendPoint>,
    #[serde(default)]
    pub deposit_trends: Vec<TrendPoint>,
    #[serde(default)]
    pub investment_trends: Vec<TrendPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_users: u64,
    pub total_deposits: Decimal,
    pub total_investments: Decimal,
}

/// 按用户聚合的待审批提现组
///
/// 后端把同一用户的多笔待审提现合并审批，金额三项满足
/// total_net = total_gross - total_fee。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingWithdrawalGroup {
    pub user: UserProfile,
    pub withdrawals: Vec<Withdrawal>,
    pub count: usize,
    pub total_gross_amount: Decimal,
    pub total_fee_amount: Decimal,
    pub total_net_amount: Decimal,
    pub earliest_request: DateTime<Utc>,
}

/// 后台总览（指标 + 最近动态）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    pub metrics: AdminMetrics,
    #[serde(default)]
    pub recent_activity: Vec<Deposit>,
}
