// 请求载荷定义
pub mod admin;
pub mod auth;
pub mod deposit;
pub mod invest;
pub mod withdrawal;

pub use admin::*;
pub use auth::*;
pub use deposit::*;
pub use invest::*;
pub use withdrawal::*;
