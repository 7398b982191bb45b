// REST 封装
//
// 统一处理 base_url 拼接、bearer 头、错误体解析和会话降级。
// 没有重试/退避：失败直接上抛，由用户手动重试（或等下一个轮询 tick）。
use crate::session::{classify_failure, AuthFailure, SessionContext};
use common::config::ApiConfig;
use common::constants::{AUTH_HEADER_NAME, BEARER_PREFIX, FALLBACK_ERROR_MSG};
use common::models::resp::ErrorBody;
use common::{AppError, AppResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<RwLock<SessionContext>>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session: Arc::new(RwLock::new(SessionContext::anonymous())),
        })
    }

    /// 共享会话句柄（所有 Feed 和调用方共用同一份）
    pub fn session(&self) -> Arc<RwLock<SessionContext>> {
        self.session.clone()
    }

    /// 用持久化 token 恢复会话
    pub async fn restore_token(&self, token: String) {
        *self.session.write().await = SessionContext::with_token(token);
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn bearer(&self) -> Option<String> {
        self.session
            .read()
            .await
            .token()
            .map(|t| format!("{}{}", BEARER_PREFIX, t))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let mut req = self.http.get(self.url(path));
        if let Some(bearer) = self.bearer().await {
            req = req.header(AUTH_HEADER_NAME, bearer);
        }
        self.handle(req.send().await?).await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        let mut req = self.http.post(self.url(path)).json(body);
        if let Some(bearer) = self.bearer().await {
            req = req.header(AUTH_HEADER_NAME, bearer);
        }
        self.handle(req.send().await?).await
    }

    /// 无载荷的 POST（如 toggle-block）
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        self.post_json(path, &serde_json::json!({})).await
    }

    pub(crate) async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        let mut req = self.http.put(self.url(path)).json(body);
        if let Some(bearer) = self.bearer().await {
            req = req.header(AUTH_HEADER_NAME, bearer);
        }
        self.handle(req.send().await?).await
    }

    /// 统一响应处理：成功解 JSON；失败解析错误体并按认证语义降级会话
    async fn handle<T: DeserializeOwned>(&self, resp: reqwest::Response) -> AppResult<T> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp.json::<T>().await?);
        }

        let code = status.as_u16();
        let text = resp.text().await.unwrap_or_default();
        let msg = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.error)
            .unwrap_or_else(|_| FALLBACK_ERROR_MSG.to_string());

        if let Some(failure) = classify_failure(code, &msg) {
            self.session.write().await.apply_failure(failure);
            return Err(match failure {
                AuthFailure::Blocked => AppError::AccountBlocked(msg),
                AuthFailure::TokenInvalid => AppError::Unauthorized(msg),
            });
        }

        Err(AppError::ApiError { code, msg })
    }
}
