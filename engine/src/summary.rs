// 提现汇总
//
// 所有展示提现总额的地方都走这一个函数，手续费只对收益部分收取，
// 余额和推荐奖励本身已是净额。
use common::models::{AccountSummary, Investment, Withdrawal, WithdrawalStatus};
use common::{AppError, AppResult};
use rust_decimal::Decimal;
use serde::Serialize;

/// 四个展示数字：总收益 / 可提净额 / 待审批 / 已提取
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalSummary {
    /// 未申请提现的周期毛收益合计
    pub total_earnings: Decimal,
    /// 可提净额 = 毛收益 × (1 - 费率) + 余额 + 推荐奖励
    pub net_available: Decimal,
    /// 待审批合计（净额）
    pub pending_total: Decimal,
    /// 已提取合计（净额，含已批准和已完成）
    pub withdrawn_total: Decimal,
}

/// 汇总计算。纯函数：同样的输入永远给出同样的四个数字。
pub fn compute_withdrawal_summary(
    investments: &[Investment],
    withdrawals: &[Withdrawal],
    account: &AccountSummary,
    fee_rate: Decimal,
) -> WithdrawalSummary {
    let net_factor = Decimal::ONE - fee_rate;

    // 1. 所有投资里尚未申请提现的周期收益（毛额）
    let cycle_earnings_gross: Decimal = investments
        .iter()
        .flat_map(|inv| inv.cycle_earnings.iter())
        .filter(|cycle| !cycle.withdrawal_requested)
        .map(|cycle| cycle.gross_amount)
        .sum();

    // 2. 可提净额：手续费只作用于收益部分
    let net_available =
        cycle_earnings_gross * net_factor + account.balance + account.referral_rewards;

    // 3/4. 提现单按状态分桶；老记录缺 netAmount 时按毛额折净
    let net_of = |w: &Withdrawal| w.net_amount.unwrap_or(w.amount * net_factor);

    let pending_total: Decimal = withdrawals
        .iter()
        .filter(|w| w.status == WithdrawalStatus::Pending)
        .map(net_of)
        .sum();

    let withdrawn_total: Decimal = withdrawals
        .iter()
        .filter(|w| w.status.is_paid_out())
        .map(net_of)
        .sum();

    WithdrawalSummary {
        total_earnings: cycle_earnings_gross,
        net_available,
        pending_total,
        withdrawn_total,
    }
}

/// 一键提现的本地校验：不通过就不发请求
pub fn check_withdraw_all(
    amount: Decimal,
    wallet_address: &str,
    withdrawal_password: &str,
    login_password: &str,
    summary: &WithdrawalSummary,
) -> AppResult<()> {
    if wallet_address.trim().is_empty() {
        return Err(AppError::validation("请填写钱包地址"));
    }
    if amount <= Decimal::ZERO {
        return Err(AppError::validation("提现金额必须大于 0"));
    }
    if amount > summary.net_available {
        return Err(AppError::validation(format!(
            "提现金额超过可提净额 {}",
            summary.net_available
        )));
    }
    if withdrawal_password.is_empty() {
        return Err(AppError::validation("请填写提现密码"));
    }
    if withdrawal_password == login_password {
        return Err(AppError::validation("提现密码不能与登录密码相同"));
    }
    Ok(())
}

/// 提现记录不变式: net_amount = amount - fee_amount（两者都存在时）
pub fn check_record_invariant(w: &Withdrawal) -> AppResult<()> {
    if let (Some(fee), Some(net)) = (w.fee_amount, w.net_amount) {
        if net != w.amount - fee {
            return Err(AppError::business(format!(
                "提现单 {} 金额不一致: {} - {} != {}",
                w.id, w.amount, fee, net
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::models::CycleEarning;
    use rust_decimal_macros::dec;

    fn account(balance: Decimal, referral: Decimal) -> AccountSummary {
        AccountSummary {
            balance,
            total_investment: dec!(1000),
            total_earnings: Decimal::ZERO,
            withdrawable_balance: Decimal::ZERO,
            referral_rewards: referral,
            score: 50,
        }
    }

    fn investment_with_cycles(cycles: Vec<CycleEarning>) -> Investment {
        let mut inv: Investment = serde_json::from_value(serde_json::json!({
            "_id": "inv-1",
            "tier": "Tier 1",
            "amount": 1000,
            "dailyRate": 3.3
        }))
        .unwrap();
        inv.cycle_earnings = cycles;
        inv
    }

    fn cycle(gross: Decimal, requested: bool) -> CycleEarning {
        CycleEarning {
            gross_amount: gross,
            withdrawal_requested: requested,
            earned_at: None,
        }
    }

    fn withdrawal(
        status: WithdrawalStatus,
        amount: Decimal,
        fee: Option<Decimal>,
        net: Option<Decimal>,
    ) -> Withdrawal {
        serde_json::from_value::<Withdrawal>(serde_json::json!({
            "_id": "w-1",
            "amount": amount,
            "status": serde_json::to_value(status).unwrap(),
            "requestedAt": "2026-08-03T09:00:00Z"
        }))
        .map(|mut w| {
            w.fee_amount = fee;
            w.net_amount = net;
            w
        })
        .unwrap()
    }

    #[test]
    fn test_net_available_scenario() {
        // gross=100, balance=20, referral=5 → 100×0.85 + 20 + 5 = 110
        let investments = vec![investment_with_cycles(vec![
            cycle(dec!(60), false),
            cycle(dec!(40), false),
            cycle(dec!(30), true), // 已申请的不计入
        ])];
        let summary = compute_withdrawal_summary(
            &investments,
            &[],
            &account(dec!(20), dec!(5)),
            dec!(0.15),
        );
        assert_eq!(summary.total_earnings, dec!(100));
        assert_eq!(summary.net_available, dec!(110));
    }

    #[test]
    fn test_status_buckets_and_net_fallback() {
        let withdrawals = vec![
            withdrawal(WithdrawalStatus::Pending, dec!(100), Some(dec!(15)), Some(dec!(85))),
            // 老记录没有 netAmount，按 amount × 0.85 折净
            withdrawal(WithdrawalStatus::Pending, dec!(20), None, None),
            withdrawal(WithdrawalStatus::Approved, dec!(40), None, Some(dec!(34))),
            withdrawal(WithdrawalStatus::Completed, dec!(10), None, Some(dec!(8.5))),
            // 被拒绝的不进任何桶
            withdrawal(WithdrawalStatus::Rejected, dec!(999), None, None),
        ];
        let summary = compute_withdrawal_summary(
            &[],
            &withdrawals,
            &account(Decimal::ZERO, Decimal::ZERO),
            dec!(0.15),
        );
        assert_eq!(summary.pending_total, dec!(102)); // 85 + 17
        assert_eq!(summary.withdrawn_total, dec!(42.5)); // 34 + 8.5
        assert_eq!(summary.total_earnings, Decimal::ZERO);
    }

    #[test]
    fn test_repeated_computation_is_stable() {
        // 没有写操作的重复计算不得漂移
        let investments = vec![investment_with_cycles(vec![cycle(dec!(12.34), false)])];
        let withdrawals = vec![withdrawal(
            WithdrawalStatus::Pending,
            dec!(5),
            None,
            None,
        )];
        let acct = account(dec!(1), dec!(2));
        let first = compute_withdrawal_summary(&investments, &withdrawals, &acct, dec!(0.15));
        for _ in 0..5 {
            assert_eq!(
                compute_withdrawal_summary(&investments, &withdrawals, &acct, dec!(0.15)),
                first
            );
        }
    }

    #[test]
    fn test_withdraw_all_validation() {
        let summary = WithdrawalSummary {
            total_earnings: dec!(100),
            net_available: dec!(110),
            pending_total: Decimal::ZERO,
            withdrawn_total: Decimal::ZERO,
        };

        assert!(check_withdraw_all(dec!(110), "0xabc", "w-pass", "login", &summary).is_ok());

        // 超过可提净额：本地拒绝
        assert!(matches!(
            check_withdraw_all(dec!(110.01), "0xabc", "w-pass", "login", &summary),
            Err(AppError::ValidationError(_))
        ));
        // 缺钱包地址
        assert!(check_withdraw_all(dec!(10), " ", "w-pass", "login", &summary).is_err());
        // 提现密码与登录密码相同
        assert!(check_withdraw_all(dec!(10), "0xabc", "same", "same", &summary).is_err());
        // 非正金额
        assert!(check_withdraw_all(dec!(0), "0xabc", "w-pass", "login", &summary).is_err());
    }

    #[test]
    fn test_record_invariant() {
        let good = withdrawal(
            WithdrawalStatus::Pending,
            dec!(100),
            Some(dec!(15)),
            Some(dec!(85)),
        );
        assert!(check_record_invariant(&good).is_ok());

        let bad = withdrawal(
            WithdrawalStatus::Pending,
            dec!(100),
            Some(dec!(15)),
            Some(dec!(90)),
        );
        assert!(check_record_invariant(&bad).is_err());

        // 字段缺失时不做判断
        let sparse = withdrawal(WithdrawalStatus::Pending, dec!(100), None, None);
        assert!(check_record_invariant(&sparse).is_ok());
    }
}
