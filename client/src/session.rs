// 会话上下文
//
// 用一个显式对象承载 {token, 身份}，取代散落在各处的隐式全局状态。
// 封号是通过「403 + 错误信息包含 blocked」识别的专门状态：进入封号态
// 时保留 token（以便后台解封后恢复），而普通的 401/403 则清空 token。
use common::constants::BLOCKED_KEYWORD;
use common::models::UserProfile;

/// 当前身份
#[derive(Debug, Clone, PartialEq)]
pub enum Identity {
    /// 未登录
    Anonymous,
    /// 已登录
    Authenticated(Box<UserProfile>),
    /// 账号被封禁（只能等管理员解封）
    Blocked,
}

/// 认证类失败的分类结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailure {
    /// 账号被封禁
    Blocked,
    /// token 失效/无权限
    TokenInvalid,
}

/// 会话上下文：bearer token + 身份，显式传递
#[derive(Debug, Clone)]
pub struct SessionContext {
    token: Option<String>,
    identity: Identity,
}

impl SessionContext {
    pub fn anonymous() -> Self {
        Self {
            token: None,
            identity: Identity::Anonymous,
        }
    }

    /// 用持久化的 token 恢复会话（身份待 /user/me 确认）
    pub fn with_token(token: String) -> Self {
        Self {
            token: Some(token),
            identity: Identity::Anonymous,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.identity, Identity::Authenticated(_))
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self.identity, Identity::Blocked)
    }

    /// 登录成功
    pub fn on_login(&mut self, token: String, profile: UserProfile) {
        self.token = Some(token);
        self.identity = Identity::Authenticated(Box::new(profile));
    }

    /// 身份确认（/user/me 返回后）
    pub fn on_profile(&mut self, profile: UserProfile) {
        self.identity = Identity::Authenticated(Box::new(profile));
    }

    /// 主动登出
    pub fn on_logout(&mut self) {
        self.token = None;
        self.identity = Identity::Anonymous;
    }

    /// 应用认证失败
    ///
    /// 封号: 切到 Blocked 但保留 token。
    /// token 失效: 清空 token 回到未登录；已封号的会话不被失效降级。
    pub fn apply_failure(&mut self, failure: AuthFailure) {
        match failure {
            AuthFailure::Blocked => {
                self.identity = Identity::Blocked;
            }
            AuthFailure::TokenInvalid => {
                if !self.is_blocked() {
                    self.token = None;
                    self.identity = Identity::Anonymous;
                }
            }
        }
    }
}

/// 对失败响应做认证分类
///
/// 403 且错误信息包含 "blocked" → 封号；其余 401/403 → token 失效；
/// 其它状态码与认证无关，返回 None。
pub fn classify_failure(status: u16, error_msg: &str) -> Option<AuthFailure> {
    match status {
        403 if error_msg.to_lowercase().contains(BLOCKED_KEYWORD) => Some(AuthFailure::Blocked),
        401 | 403 => Some(AuthFailure::TokenInvalid),
        _ => None,
    }
}
