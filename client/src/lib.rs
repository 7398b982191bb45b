// 平台 API 客户端
// 会话管理、凭证缓存、REST 封装和按数据域划分的轮询订阅。

pub mod api;
pub mod http;
pub mod session;
pub mod store;
pub mod subscribe;

pub use http::ApiClient;
pub use session::{AuthFailure, Identity, SessionContext};
pub use store::{CredentialStore, FileStore, MemoryStore, StoredCredentials};
pub use subscribe::{DomainFeeds, Feed, FeedHandle};
