use serde::{Deserialize, Serialize};

/// 通用的 值/文案 对，用于枚举下拉展示
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label<V, L> {
    pub value: V,
    pub label: L,
}
