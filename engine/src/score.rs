// 活跃度积分与收益倍率
//
// 积分本身由服务端维护（首充 +50，邀请注册 +3，后台手工调整），
// 客户端只需要把积分换算成收益倍率。
use once_cell::sync::Lazy;
use rust_decimal::Decimal;

/// 积分档位表：(最低积分, 倍率)，从高到低
static MULTIPLIER_BRACKETS: Lazy<Vec<(i32, Decimal)>> = Lazy::new(|| {
    vec![
        (50, Decimal::new(100, 2)),
        (40, Decimal::new(90, 2)),
        (30, Decimal::new(80, 2)),
        (20, Decimal::new(70, 2)),
        (10, Decimal::new(60, 2)),
    ]
});

/// 积分不足 10 时的保底倍率
const FLOOR_MULTIPLIER: Decimal = Decimal::from_parts(50, 0, 0, false, 2);

/// 积分 → 收益倍率
///
/// ≥50 → 100%，40-49 → 90%，30-39 → 80%，20-29 → 70%，10-19 → 60%，其余 50%
pub fn earnings_multiplier(score: i32) -> Decimal {
    for (threshold, multiplier) in MULTIPLIER_BRACKETS.iter() {
        if score >= *threshold {
            return *multiplier;
        }
    }
    FLOOR_MULTIPLIER
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_bracket_boundaries() {
        assert_eq!(earnings_multiplier(100), dec!(1.00));
        assert_eq!(earnings_multiplier(50), dec!(1.00));
        assert_eq!(earnings_multiplier(49), dec!(0.90));
        assert_eq!(earnings_multiplier(40), dec!(0.90));
        assert_eq!(earnings_multiplier(39), dec!(0.80));
        assert_eq!(earnings_multiplier(30), dec!(0.80));
        assert_eq!(earnings_multiplier(29), dec!(0.70));
        assert_eq!(earnings_multiplier(20), dec!(0.70));
        assert_eq!(earnings_multiplier(19), dec!(0.60));
        assert_eq!(earnings_multiplier(10), dec!(0.60));
        assert_eq!(earnings_multiplier(9), dec!(0.50));
        assert_eq!(earnings_multiplier(0), dec!(0.50));
    }

    #[test]
    fn test_negative_score_hits_floor() {
        assert_eq!(earnings_multiplier(-5), dec!(0.50));
    }
}
