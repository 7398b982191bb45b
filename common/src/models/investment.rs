use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 投资档位
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentTier {
    pub tier: String,
    pub amount: Decimal,
    pub daily_rate: Decimal,
}

/// 单个周期的收益记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleEarning {
    pub gross_amount: Decimal,
    #[serde(default)]
    pub withdrawal_requested: bool,
    #[serde(default)]
    pub earned_at: Option<DateTime<Utc>>,
}

/// 投资记录
///
/// 周期状态不落在某个字段上，而是由时间戳和标志位组合推导，
/// 推导逻辑见 engine 的周期状态机。记录只增不删（历史留存）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    #[serde(rename = "_id")]
    pub id: String,
    pub tier: String,
    pub amount: Decimal,
    pub daily_rate: Decimal,
    #[serde(default)]
    pub earning_started: bool,
    #[serde(default)]
    pub cycle_end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub earning_completed: bool,
    #[serde(default)]
    pub total_earned: Decimal,
    #[serde(default)]
    pub cycles_completed: u32,
    #[serde(default)]
    pub can_withdraw: bool,
    #[serde(default)]
    pub withdrawal_requested_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub withdrawal_approved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub next_cycle_available_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub cycle_earnings: Vec<CycleEarning>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_investment_deserializes_sparse_payload() {
        // 后端早期记录缺少大部分标志位字段
        let json = r#"{
            "_id": "65f0c2",
            "tier": "Tier 3",
            "amount": 5000,
            "dailyRate": 3.5
        }"#;
        let inv: Investment = serde_json::from_str(json).expect("sparse investment");
        assert_eq!(inv.id, "65f0c2");
        assert!(!inv.earning_started);
        assert!(inv.cycle_end_time.is_none());
        assert!(inv.cycle_earnings.is_empty());
    }

    #[test]
    fn test_cycle_earning_fields() {
        let json = r#"{"grossAmount": "12.5", "withdrawalRequested": true}"#;
        let ce: CycleEarning = serde_json::from_str(json).expect("cycle earning");
        assert!(ce.withdrawal_requested);
        assert_eq!(ce.gross_amount.to_string(), "12.5");
    }
}
