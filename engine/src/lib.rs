// 纯业务引擎
// 周期状态机、提现汇总、积分倍率、推荐树投影。无任何 I/O，
// 所有时间均由调用方注入，便于在任意时间点上做推导和测试。

pub mod cycle;
pub mod referral;
pub mod score;
pub mod summary;

pub use cycle::{CycleAction, CycleEngine, CycleProfile, CycleState};
pub use summary::{compute_withdrawal_summary, WithdrawalSummary};
