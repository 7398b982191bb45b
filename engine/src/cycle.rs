// 收益周期状态机
//
// 平台各处（用户面板、提现页、监控服务）都消费同一个 CycleEngine，
// 周期长度/费率/工作日限制等常量全部注入，不在界面层重复实现。
use crate::score;
use chrono::{DateTime, Duration, Utc};
use common::config::CycleSettings;
use common::models::Investment;
use common::utils::time_util::{format_remaining, is_weekday};
use common::{AppError, AppResult};
use rust_decimal::Decimal;
use serde::Serialize;

/// 周期参数集
///
/// production: 8 小时周期，仅工作日，15% 手续费，批准后 48 小时等待期。
/// demo: 5 分钟周期（周末 20 分钟），单周期收益率 = 日利率 / 3，不限工作日。
#[derive(Debug, Clone)]
pub struct CycleProfile {
    /// 单个收益周期时长
    pub cycle_duration: Duration,
    /// 周末的周期时长（None 表示与平日一致）
    pub weekend_cycle_duration: Option<Duration>,
    /// 单周期收益率 = 日利率 / rate_divisor
    pub rate_divisor: u32,
    /// 平台手续费率（只对收益部分收取）
    pub fee_rate: Decimal,
    /// 是否只允许在工作日启动/结算周期
    pub weekday_gate: bool,
    /// 提现批准后到下一个周期可用的等待期
    pub waiting_period: Duration,
}

impl CycleProfile {
    /// 生产参数: 8 小时周期 + 工作日限制
    pub fn production() -> Self {
        Self {
            cycle_duration: Duration::hours(8),
            weekend_cycle_duration: None,
            rate_divisor: 1,
            fee_rate: Decimal::new(15, 2),
            weekday_gate: true,
            waiting_period: Duration::hours(48),
        }
    }

    /// 演示参数: 5 分钟周期，周末 20 分钟，随时可玩
    pub fn demo() -> Self {
        Self {
            cycle_duration: Duration::minutes(5),
            weekend_cycle_duration: Some(Duration::minutes(20)),
            rate_divisor: 3,
            fee_rate: Decimal::new(15, 2),
            weekday_gate: false,
            waiting_period: Duration::hours(48),
        }
    }

    /// 从配置装配：profile 选择预置，逐项覆盖生效
    pub fn from_settings(settings: &CycleSettings) -> AppResult<Self> {
        let mut profile = match settings.profile.as_str() {
            "production" => Self::production(),
            "demo" => Self::demo(),
            other => {
                return Err(AppError::ConfigError(format!(
                    "未知的周期 profile: {}",
                    other
                )))
            }
        };

        if let Some(minutes) = settings.cycle_minutes {
            profile.cycle_duration = Duration::minutes(minutes);
        }
        if let Some(minutes) = settings.weekend_cycle_minutes {
            profile.weekend_cycle_duration = Some(Duration::minutes(minutes));
        }
        if let Some(divisor) = settings.rate_divisor {
            if divisor == 0 {
                return Err(AppError::ConfigError("rate_divisor 不能为 0".to_string()));
            }
            profile.rate_divisor = divisor;
        }
        if let Some(fee) = settings.fee_rate {
            profile.fee_rate = Decimal::try_from(fee)
                .map_err(|e| AppError::ConfigError(format!("fee_rate 非法: {}", e)))?;
        }
        if let Some(gate) = settings.weekday_gate {
            profile.weekday_gate = gate;
        }
        if let Some(hours) = settings.waiting_hours {
            profile.waiting_period = Duration::hours(hours);
        }

        Ok(profile)
    }

    /// 指定时刻启动的周期应使用的时长
    pub fn cycle_duration_at(&self, ts: DateTime<Utc>) -> Duration {
        if !is_weekday(ts) {
            if let Some(weekend) = self.weekend_cycle_duration {
                return weekend;
            }
        }
        self.cycle_duration
    }
}

/// 周期状态（完全由投资记录字段 + 注入的当前时间推导）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "state")]
pub enum CycleState {
    /// 未启动周期
    Idle,
    /// 收益中（now < cycle_end_time）
    Earning { ends_at: DateTime<Utc> },
    /// 周期到点，等待用户结算
    ReadyToComplete { ended_at: DateTime<Utc> },
    /// 收益已结算，等待发起提现
    EarningCompleted,
    /// 提现待管理员审批
    WithdrawalPending { requested_at: DateTime<Utc> },
    /// 批准后的等待期（到点自动回到 Idle）
    WaitingPeriod { until: DateTime<Utc> },
}

/// 用户可发起的周期操作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CycleAction {
    StartEarning,
    CompleteCycle,
    RequestWithdrawal,
}

#[derive(Debug, Clone)]
pub struct CycleEngine {
    profile: CycleProfile,
}

impl CycleEngine {
    pub fn new(profile: CycleProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &CycleProfile {
        &self.profile
    }

    /// 推导周期状态。纯函数，每个轮询 tick 重新计算，不做任何变更。
    ///
    /// 分支顺序与服务端写字段的顺序一致：进行中的周期优先，
    /// 然后是已结算待提现，再看审批链，最后回落到 Idle。
    pub fn state_of(&self, inv: &Investment, now: DateTime<Utc>) -> CycleState {
        if let Some(end) = inv.cycle_end_time {
            if now < end {
                return CycleState::Earning { ends_at: end };
            }
            return CycleState::ReadyToComplete { ended_at: end };
        }

        if inv.can_withdraw {
            return CycleState::EarningCompleted;
        }

        if let Some(requested_at) = inv.withdrawal_requested_at {
            if inv.withdrawal_approved_at.is_none() {
                return CycleState::WithdrawalPending { requested_at };
            }
        }

        if let Some(until) = self.waiting_until(inv) {
            if now < until {
                return CycleState::WaitingPeriod { until };
            }
        }

        CycleState::Idle
    }

    /// 等待期截止时间：优先用服务端下发的 next_cycle_available_at，
    /// 缺失时按批准时间 + 等待期补算
    fn waiting_until(&self, inv: &Investment) -> Option<DateTime<Utc>> {
        inv.next_cycle_available_at.or_else(|| {
            inv.withdrawal_approved_at
                .map(|approved| approved + self.profile.waiting_period)
        })
    }

    /// 启动周期前的本地校验（周末直接拒绝，不发请求）
    pub fn check_start(&self, inv: &Investment, now: DateTime<Utc>) -> AppResult<()> {
        if self.profile.weekday_gate && !is_weekday(now) {
            return Err(AppError::validation("周末不能启动收益周期"));
        }
        match self.state_of(inv, now) {
            CycleState::Idle => Ok(()),
            state => Err(AppError::business(format!(
                "当前状态不能启动周期: {:?}",
                state
            ))),
        }
    }

    /// 结算周期前的本地校验
    pub fn check_complete(&self, inv: &Investment, now: DateTime<Utc>) -> AppResult<()> {
        if self.profile.weekday_gate && !is_weekday(now) {
            return Err(AppError::validation("周末不能结算收益周期"));
        }
        match self.state_of(inv, now) {
            CycleState::ReadyToComplete { .. } => Ok(()),
            CycleState::Earning { ends_at } => Err(AppError::business(format!(
                "周期尚未结束，{}",
                format_remaining(ends_at, now, "")
            ))),
            state => Err(AppError::business(format!(
                "当前状态不能结算周期: {:?}",
                state
            ))),
        }
    }

    /// 发起提现前的本地校验：需已结算且填写钱包地址
    pub fn check_request_withdrawal(
        &self,
        inv: &Investment,
        now: DateTime<Utc>,
        wallet_address: &str,
    ) -> AppResult<()> {
        if wallet_address.trim().is_empty() {
            return Err(AppError::validation("请填写钱包地址"));
        }
        match self.state_of(inv, now) {
            CycleState::EarningCompleted => Ok(()),
            state => Err(AppError::business(format!(
                "当前状态不能发起提现: {:?}",
                state
            ))),
        }
    }

    /// 当前时刻允许的操作集合
    pub fn permitted_actions(&self, inv: &Investment, now: DateTime<Utc>) -> Vec<CycleAction> {
        let weekday_ok = !self.profile.weekday_gate || is_weekday(now);
        match self.state_of(inv, now) {
            CycleState::Idle if weekday_ok => vec![CycleAction::StartEarning],
            CycleState::ReadyToComplete { .. } if weekday_ok => vec![CycleAction::CompleteCycle],
            CycleState::EarningCompleted => vec![CycleAction::RequestWithdrawal],
            _ => Vec::new(),
        }
    }

    /// 单周期毛收益 = 本金 × (日利率 / rate_divisor) / 100 × 积分倍率
    ///
    /// 周期收益按「每周期记一次」计算，不按小时折算。
    pub fn cycle_earning(&self, amount: Decimal, daily_rate: Decimal, score_points: i32) -> Decimal {
        let per_cycle_rate = daily_rate / Decimal::from(self.profile.rate_divisor);
        amount * per_cycle_rate / Decimal::ONE_HUNDRED * score::earnings_multiplier(score_points)
    }

    /// 倒计时文案（只有周期进行中/到点时才有）
    pub fn countdown(&self, inv: &Investment, now: DateTime<Utc>) -> Option<String> {
        inv.cycle_end_time
            .map(|end| format_remaining(end, now, "Ready to complete!"))
    }

    /// 不变式：任一时刻 {收益中, 提现待审, 等待期} 至多一个成立
    pub fn validate_exclusive(&self, inv: &Investment, now: DateTime<Utc>) -> AppResult<()> {
        let earning = inv.cycle_end_time.is_some();
        let pending = inv.withdrawal_requested_at.is_some() && inv.withdrawal_approved_at.is_none();
        let waiting = self
            .waiting_until(inv)
            .map(|until| now < until)
            .unwrap_or(false);

        let active = [earning, pending, waiting].iter().filter(|b| **b).count();
        if active > 1 {
            return Err(AppError::business(format!(
                "投资 {} 同时处于多个活跃状态 (earning={}, pending={}, waiting={})",
                inv.id, earning, pending, waiting
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn base_investment() -> Investment {
        serde_json::from_value(serde_json::json!({
            "_id": "inv-1",
            "tier": "Tier 1",
            "amount": 1000,
            "dailyRate": 3.3
        }))
        .unwrap()
    }

    fn engine() -> CycleEngine {
        CycleEngine::new(CycleProfile::production())
    }

    // 2026-08-03 周一, 2026-08-08 周六
    fn monday(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 3, h, m, 0).unwrap()
    }

    fn saturday(h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 8, h, 0, 0).unwrap()
    }

    #[test]
    fn test_earning_then_ready_to_complete() {
        // 周一 09:00 启动，17:00 到期
        let mut inv = base_investment();
        inv.earning_started = true;
        inv.cycle_end_time = Some(monday(17, 0));

        let eng = engine();

        // 17:00 前: 收益中，倒计时非负
        let state = eng.state_of(&inv, monday(9, 30));
        assert_eq!(
            state,
            CycleState::Earning {
                ends_at: monday(17, 0)
            }
        );
        let text = eng.countdown(&inv, monday(16, 59)).unwrap();
        assert!(text.ends_with("remaining"), "countdown: {}", text);

        // 17:00 及之后（工作日）: 可结算
        assert!(matches!(
            eng.state_of(&inv, monday(17, 0)),
            CycleState::ReadyToComplete { .. }
        ));
        assert!(eng.check_complete(&inv, monday(17, 30)).is_ok());
        assert_eq!(
            eng.permitted_actions(&inv, monday(18, 0)),
            vec![CycleAction::CompleteCycle]
        );
    }

    #[test]
    fn test_weekend_gate_blocks_without_network() {
        let eng = engine();

        // 周末启动被本地拒绝
        let idle = base_investment();
        assert!(matches!(
            eng.check_start(&idle, saturday(10)),
            Err(AppError::ValidationError(_))
        ));

        // 周期早已到点，但周六仍然不能结算
        let mut inv = base_investment();
        inv.cycle_end_time = Some(monday(17, 0));
        assert!(matches!(
            eng.check_complete(&inv, saturday(10)),
            Err(AppError::ValidationError(_))
        ));
        assert!(eng.permitted_actions(&inv, saturday(10)).is_empty());
    }

    #[test]
    fn test_demo_profile_ignores_weekend_gate() {
        let eng = CycleEngine::new(CycleProfile::demo());
        let idle = base_investment();
        assert!(eng.check_start(&idle, saturday(10)).is_ok());
        // 周末启动的周期用 20 分钟时长
        assert_eq!(
            eng.profile().cycle_duration_at(saturday(10)),
            Duration::minutes(20)
        );
        assert_eq!(
            eng.profile().cycle_duration_at(monday(10, 0)),
            Duration::minutes(5)
        );
    }

    #[test]
    fn test_earning_completed_and_withdrawal_chain() {
        let eng = engine();
        let mut inv = base_investment();
        inv.total_earned = dec!(33);
        inv.can_withdraw = true;

        assert_eq!(eng.state_of(&inv, monday(9, 0)), CycleState::EarningCompleted);
        assert!(eng
            .check_request_withdrawal(&inv, monday(9, 0), "0xabc")
            .is_ok());
        assert!(matches!(
            eng.check_request_withdrawal(&inv, monday(9, 0), "  "),
            Err(AppError::ValidationError(_))
        ));

        // 发起提现后: 待审批
        inv.can_withdraw = false;
        inv.withdrawal_requested_at = Some(monday(10, 0));
        assert!(matches!(
            eng.state_of(&inv, monday(11, 0)),
            CycleState::WithdrawalPending { .. }
        ));

        // 批准后: 48 小时等待期
        inv.withdrawal_approved_at = Some(monday(12, 0));
        inv.next_cycle_available_at = Some(monday(12, 0) + Duration::hours(48));
        assert!(matches!(
            eng.state_of(&inv, monday(13, 0)),
            CycleState::WaitingPeriod { .. }
        ));

        // 等待期过后回到 Idle
        let after = monday(12, 0) + Duration::hours(49);
        assert_eq!(eng.state_of(&inv, after), CycleState::Idle);
    }

    #[test]
    fn test_waiting_until_falls_back_to_approval_time() {
        let eng = engine();
        let mut inv = base_investment();
        inv.withdrawal_requested_at = Some(monday(10, 0));
        inv.withdrawal_approved_at = Some(monday(12, 0));
        // 服务端没下发 next_cycle_available_at，按批准时间 + 48h 补算
        assert!(matches!(
            eng.state_of(&inv, monday(13, 0)),
            CycleState::WaitingPeriod { until } if until == monday(12, 0) + Duration::hours(48)
        ));
    }

    #[test]
    fn test_exclusive_invariant() {
        let eng = engine();
        let now = monday(9, 0);

        let mut ok = base_investment();
        ok.cycle_end_time = Some(monday(17, 0));
        assert!(eng.validate_exclusive(&ok, now).is_ok());

        // 同时处于收益中 + 提现待审: 非法
        let mut bad = base_investment();
        bad.cycle_end_time = Some(monday(17, 0));
        bad.withdrawal_requested_at = Some(monday(8, 0));
        assert!(eng.validate_exclusive(&bad, now).is_err());
    }

    #[test]
    fn test_cycle_earning_math() {
        let eng = engine();
        // 1000 × 3.3% = 33，满积分不打折
        assert_eq!(eng.cycle_earning(dec!(1000), dec!(3.3), 50), dec!(33));
        // 积分 45 → 90%
        assert_eq!(eng.cycle_earning(dec!(1000), dec!(3.3), 45), dec!(29.7));

        // demo: 日利率 ÷ 3
        let demo = CycleEngine::new(CycleProfile::demo());
        assert_eq!(demo.cycle_earning(dec!(1000), dec!(3.3), 50), dec!(11));
    }

    #[test]
    fn test_state_is_stable_across_repeated_evaluation() {
        // 同一时刻重复推导，结果不漂移
        let eng = engine();
        let mut inv = base_investment();
        inv.cycle_end_time = Some(monday(17, 0));
        let now = monday(12, 0);
        let first = eng.state_of(&inv, now);
        for _ in 0..10 {
            assert_eq!(eng.state_of(&inv, now), first);
        }
    }

    #[test]
    fn test_profile_from_settings_overrides() {
        let settings = CycleSettings {
            profile: "production".to_string(),
            cycle_minutes: Some(60),
            fee_rate: Some(0.10),
            ..CycleSettings::default()
        };
        let profile = CycleProfile::from_settings(&settings).unwrap();
        assert_eq!(profile.cycle_duration, Duration::minutes(60));
        assert_eq!(profile.fee_rate, dec!(0.10));
        assert!(profile.weekday_gate);

        assert!(CycleProfile::from_settings(&CycleSettings {
            profile: "mystery".to_string(),
            ..CycleSettings::default()
        })
        .is_err());
    }
}
