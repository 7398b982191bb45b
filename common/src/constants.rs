/// 应用常量定义
use rust_decimal::Decimal;

/// 认证请求头名称
pub const AUTH_HEADER_NAME: &str = "Authorization";

/// Bearer token 前缀
pub const BEARER_PREFIX: &str = "Bearer ";

/// 封号响应的识别关键字 (403 + 错误信息包含该字符串)
pub const BLOCKED_KEYWORD: &str = "blocked";

/// 服务器未返回错误信息时的兜底文案
pub const FALLBACK_ERROR_MSG: &str = "请求失败，请稍后重试";

/// 最小充值金额 (USDC)
pub const MIN_DEPOSIT_AMOUNT: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// 密码最小长度（登录密码和提现密码一致）
pub const MIN_PASSWORD_LEN: usize = 6;

/// 凭证缓存文件
pub mod store_keys {
    /// 默认凭证文件名 (token + 缓存的钱包地址)
    pub const CREDENTIAL_FILE: &str = ".hpr_credentials.json";
}
