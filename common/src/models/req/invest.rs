use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 购买投资档位
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestRequest {
    pub amount: Decimal,
}

/// 周期操作（启动 / 结算）都只带投资 id
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleActionRequest {
    pub investment_id: String,
}
