// 平台数据模型
// 与后端 JSON 字段一一对应 (camelCase)，按业务域拆分文件

pub mod admin;
pub mod deposit;
pub mod investment;
pub mod label;
pub mod referral;
pub mod req;
pub mod resp;
pub mod user;
pub mod withdrawal;

pub use admin::{AdminMetrics, AdminUserView, AnalyticsReport, PendingWithdrawalGroup, TrendPoint};
pub use deposit::{Deposit, DepositStatus, DepositType};
pub use investment::{CycleEarning, Investment, InvestmentTier};
pub use label::Label;
pub use referral::{Referral, ReferralTree};
pub use user::{AccountSummary, UserProfile};
pub use withdrawal::{Withdrawal, WithdrawalStatus};
