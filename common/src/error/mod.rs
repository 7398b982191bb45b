// 错误处理模块
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("网络错误: {0}")]
    NetworkError(String),

    #[error("接口错误 [{code}]: {msg}")]
    ApiError { code: u16, msg: String },

    #[error("未授权: {0}")]
    Unauthorized(String),

    /// 账号被封禁。区别于普通的 403：会话进入封禁态但保留 token
    #[error("账号已被封禁: {0}")]
    AccountBlocked(String),

    #[error("配置错误: {0}")]
    ConfigError(String),

    #[error("验证错误: {0}")]
    ValidationError(String),

    #[error("未找到: {0}")]
    NotFound(String),

    #[error("业务错误: {0}")]
    BusinessError(String),

    #[error("内部错误: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::ValidationError(msg.into())
    }

    pub fn business(msg: impl Into<String>) -> Self {
        AppError::BusinessError(msg.into())
    }

    /// 是否可以简单重试 (网络/接口类错误; 封禁和未授权不算)
    pub fn is_retryable_by_user(&self) -> bool {
        matches!(
            self,
            AppError::NetworkError(_) | AppError::ApiError { .. } | AppError::ValidationError(_)
        )
    }
}

// 从 reqwest 错误转换
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::NetworkError(err.to_string())
    }
}

// 从 config 错误转换
impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

// 从 serde_json 错误转换
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InternalError(format!("JSON 解析失败: {}", err))
    }
}
