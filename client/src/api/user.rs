// 用户侧接口: 认证、面板、投资与周期操作、充值、推荐
use crate::http::ApiClient;
use chrono::Utc;
use common::constants::MIN_PASSWORD_LEN;
use common::models::req::{
    CycleActionRequest, DepositSubmitRequest, ForgotPasswordRequest, InvestRequest, LoginRequest,
    ProfileUpdateRequest, ResetPasswordRequest, SendCodeRequest, SignupRequest,
};
use common::models::resp::{
    DashboardResponse, DepositsResponse, InvitationResponse, LoginResponse, MeResponse,
    MessageResponse, ReferralsResponse, TiersResponse,
};
use common::models::{Deposit, Investment, InvestmentTier, Referral, UserProfile};
use common::{AppError, AppResult};
use engine::CycleEngine;
use rust_decimal::Decimal;

impl ApiClient {
    /// POST /login
    pub async fn login(&self, req: &LoginRequest) -> AppResult<LoginResponse> {
        let resp: LoginResponse = self.post_json("/login", req).await?;
        self.session()
            .write()
            .await
            .on_login(resp.token.clone(), resp.user.clone());
        log::info!("登录成功: {}", resp.user.email);
        Ok(resp)
    }

    /// POST /register
    ///
    /// 注册前本地校验：两次密码一致、长度达标、提现密码独立、邀请码必填。
    pub async fn register(&self, req: &SignupRequest) -> AppResult<LoginResponse> {
        if req.invitation_code.trim().is_empty() {
            return Err(AppError::validation("请填写邀请码"));
        }
        if req.password.len() < MIN_PASSWORD_LEN {
            return Err(AppError::validation("登录密码至少 6 位"));
        }
        if req.password != req.confirm_password {
            return Err(AppError::validation("两次输入的密码不一致"));
        }
        if req.withdrawal_password.len() < MIN_PASSWORD_LEN {
            return Err(AppError::validation("提现密码至少 6 位"));
        }
        if req.withdrawal_password == req.password {
            return Err(AppError::validation("提现密码不能与登录密码相同"));
        }

        let resp: LoginResponse = self.post_json("/register", req).await?;
        self.session()
            .write()
            .await
            .on_login(resp.token.clone(), resp.user.clone());
        Ok(resp)
    }

    /// POST /send-code (注册用邮箱验证码)
    pub async fn send_code(&self, email: &str) -> AppResult<MessageResponse> {
        self.post_json(
            "/send-code",
            &SendCodeRequest {
                email: email.to_string(),
            },
        )
        .await
    }

    /// POST /forgot-password
    pub async fn forgot_password(&self, req: &ForgotPasswordRequest) -> AppResult<MessageResponse> {
        self.post_json("/forgot-password", req).await
    }

    /// POST /reset-password
    pub async fn reset_password(&self, req: &ResetPasswordRequest) -> AppResult<MessageResponse> {
        self.post_json("/reset-password", req).await
    }

    /// GET /user/me — 用持久化 token 恢复身份
    pub async fn me(&self) -> AppResult<UserProfile> {
        let resp: MeResponse = self.get_json("/user/me").await?;
        self.session().write().await.on_profile(resp.user.clone());
        Ok(resp.user)
    }

    /// 本地登出（平台没有登出端点，丢弃 token 即可）
    pub async fn logout(&self) {
        self.session().write().await.on_logout();
    }

    /// GET /user/dashboard
    pub async fn dashboard(&self) -> AppResult<DashboardResponse> {
        self.get_json("/user/dashboard").await
    }

    /// GET /user/investment-tiers
    pub async fn investment_tiers(&self) -> AppResult<Vec<InvestmentTier>> {
        let resp: TiersResponse = self.get_json("/user/investment-tiers").await?;
        Ok(resp.tiers)
    }

    /// GET /user/referrals
    pub async fn referrals(&self) -> AppResult<Vec<Referral>> {
        let resp: ReferralsResponse = self.get_json("/user/referrals").await?;
        Ok(resp.referrals)
    }

    /// POST /user/generate-invitation
    pub async fn generate_invitation(&self) -> AppResult<String> {
        let resp: InvitationResponse = self.post_empty("/user/generate-invitation").await?;
        Ok(resp.code)
    }

    /// POST /user/invest — 购买档位
    pub async fn invest(&self, amount: Decimal) -> AppResult<MessageResponse> {
        if amount <= Decimal::ZERO {
            return Err(AppError::validation("投资金额必须大于 0"));
        }
        self.post_json("/user/invest", &InvestRequest { amount }).await
    }

    /// POST /user/start-cycle
    ///
    /// 先过状态机（周末/状态不对直接本地拒绝，不发请求）。
    pub async fn start_cycle(
        &self,
        engine: &CycleEngine,
        inv: &Investment,
    ) -> AppResult<MessageResponse> {
        engine.check_start(inv, Utc::now())?;
        self.post_json(
            "/user/start-cycle",
            &CycleActionRequest {
                investment_id: inv.id.clone(),
            },
        )
        .await
    }

    /// POST /user/complete-cycle
    pub async fn complete_cycle(
        &self,
        engine: &CycleEngine,
        inv: &Investment,
    ) -> AppResult<MessageResponse> {
        engine.check_complete(inv, Utc::now())?;
        self.post_json(
            "/user/complete-cycle",
            &CycleActionRequest {
                investment_id: inv.id.clone(),
            },
        )
        .await
    }

    /// GET /user/deposit-history
    pub async fn deposit_history(&self) -> AppResult<Vec<Deposit>> {
        let resp: DepositsResponse = self.get_json("/user/deposit-history").await?;
        Ok(resp.deposits)
    }

    /// POST /user/process-deposit — 提交链上充值凭证
    pub async fn submit_deposit(&self, req: &DepositSubmitRequest) -> AppResult<MessageResponse> {
        if req.tx_hash.trim().is_empty() || req.from_address.trim().is_empty() {
            return Err(AppError::validation("请填写交易哈希和来源地址"));
        }
        if req.amount < common::constants::MIN_DEPOSIT_AMOUNT {
            return Err(AppError::validation(format!(
                "最小充值金额为 {} USDC",
                common::constants::MIN_DEPOSIT_AMOUNT
            )));
        }
        self.post_json("/user/process-deposit", req).await
    }

    /// PUT /user/profile
    pub async fn update_profile(&self, req: &ProfileUpdateRequest) -> AppResult<MessageResponse> {
        self.put_json("/user/profile", req).await
    }
}
