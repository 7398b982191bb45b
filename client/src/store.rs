// 凭证缓存
//
// 客户端唯一持久化的状态: bearer token + 用户填过的提现钱包地址。
use async_trait::async_trait;
use common::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::sync::Mutex;

/// 持久化内容
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredCredentials {
    pub token: String,
    #[serde(default)]
    pub wallet_address: Option<String>,
}

/// 凭证存取接口
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn load(&self) -> AppResult<Option<StoredCredentials>>;
    async fn save(&self, creds: &StoredCredentials) -> AppResult<()>;
    async fn clear(&self) -> AppResult<()>;
}

/// 内存实现（测试和一次性会话用）
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Option<StoredCredentials>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn load(&self) -> AppResult<Option<StoredCredentials>> {
        Ok(self.inner.lock().await.clone())
    }

    async fn save(&self, creds: &StoredCredentials) -> AppResult<()> {
        *self.inner.lock().await = Some(creds.clone());
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        *self.inner.lock().await = None;
        Ok(())
    }
}

/// JSON 文件实现
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 放在用户主目录下的默认位置
    pub fn default_location() -> Self {
        let mut path = dirs_home();
        path.push(common::constants::store_keys::CREDENTIAL_FILE);
        Self { path }
    }
}

fn dirs_home() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

#[async_trait]
impl CredentialStore for FileStore {
    async fn load(&self) -> AppResult<Option<StoredCredentials>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => {
                let creds = serde_json::from_slice(&bytes)?;
                Ok(Some(creds))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::InternalError(format!(
                "读取凭证文件失败: {}",
                e
            ))),
        }
    }

    async fn save(&self, creds: &StoredCredentials) -> AppResult<()> {
        let bytes = serde_json::to_vec_pretty(creds)?;
        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|e| AppError::InternalError(format!("写入凭证文件失败: {}", e)))
    }

    async fn clear(&self) -> AppResult<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::InternalError(format!(
                "删除凭证文件失败: {}",
                e
            ))),
        }
    }
}
