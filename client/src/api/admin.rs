// 后台接口
//
// 每个后台页面都是「拉列表 → 动作 → 重拉」的薄封装，
// 没有批量操作也没有乐观并发，后写的覆盖先写的。
use crate::http::ApiClient;
use common::models::admin::{AdminDashboard, AdminUserView, AnalyticsReport, PendingWithdrawalGroup};
use common::models::req::{
    AdminRegisterRequest, ApproveUserWithdrawalsRequest, BalanceUpdateRequest, EmailUpdateRequest,
    PasswordResetRequest, ProcessDepositRequest, RejectUserWithdrawalsRequest, ScoreUpdateRequest,
};
use common::models::resp::{
    DepositsResponse, MessageResponse, PendingWithdrawalsResponse, UsersResponse,
    WithdrawalsResponse,
};
use common::models::{Deposit, Withdrawal};
use common::{AppError, AppResult};

impl ApiClient {
    /// GET /admin/users
    pub async fn admin_users(&self) -> AppResult<Vec<AdminUserView>> {
        let resp: UsersResponse = self.get_json("/admin/users").await?;
        Ok(resp.users)
    }

    /// GET /admin/dashboard — 指标 + 最近动态
    pub async fn admin_dashboard(&self) -> AppResult<AdminDashboard> {
        self.get_json("/admin/dashboard").await
    }

    /// GET /admin/deposits
    pub async fn admin_deposits(&self) -> AppResult<Vec<Deposit>> {
        let resp: DepositsResponse = self.get_json("/admin/deposits").await?;
        Ok(resp.deposits)
    }

    /// POST /admin/process-deposit — 人工入账/驳回
    pub async fn admin_process_deposit(
        &self,
        req: &ProcessDepositRequest,
    ) -> AppResult<MessageResponse> {
        self.post_json("/admin/process-deposit", req).await
    }

    /// POST /admin/update-user-balance
    pub async fn admin_update_balance(
        &self,
        req: &BalanceUpdateRequest,
    ) -> AppResult<MessageResponse> {
        if req.new_balance.is_sign_negative() {
            return Err(AppError::validation("余额不能设置为负数"));
        }
        self.post_json("/admin/update-user-balance", req).await
    }

    /// POST /admin/update-user-score — 正数加分负数减分
    pub async fn admin_update_score(&self, req: &ScoreUpdateRequest) -> AppResult<MessageResponse> {
        if req.score_change == 0 {
            return Err(AppError::validation("积分变更不能为 0"));
        }
        self.post_json("/admin/update-user-score", req).await
    }

    /// POST /admin/reset-user-password
    pub async fn admin_reset_password(
        &self,
        req: &PasswordResetRequest,
    ) -> AppResult<MessageResponse> {
        self.post_json("/admin/reset-user-password", req).await
    }

    /// POST /admin-register — 后台代注册（无需邀请码）
    pub async fn admin_register(&self, req: &AdminRegisterRequest) -> AppResult<MessageResponse> {
        self.post_json("/admin-register", req).await
    }

    /// POST /user/admin/toggle-block/{id} — 封禁/解封开关
    pub async fn admin_toggle_block(&self, user_id: &str) -> AppResult<MessageResponse> {
        self.post_empty(&format!("/user/admin/toggle-block/{}", user_id))
            .await
    }

    /// GET /user/admin/analytics?period=...
    pub async fn admin_analytics(&self, period: &str) -> AppResult<AnalyticsReport> {
        self.get_json(&format!("/user/admin/analytics?period={}", period))
            .await
    }

    /// GET /user/admin/pending-deposits
    pub async fn admin_pending_deposits(&self) -> AppResult<Vec<Deposit>> {
        let resp: DepositsResponse = self.get_json("/user/admin/pending-deposits").await?;
        Ok(resp.deposits)
    }

    /// POST /user/admin/manual-process/{id} — 手工触发一笔充值的入账
    pub async fn admin_manual_process(&self, deposit_id: &str) -> AppResult<MessageResponse> {
        self.post_empty(&format!("/user/admin/manual-process/{}", deposit_id))
            .await
    }

    /// PUT /user/admin/update-email
    pub async fn admin_update_email(&self, req: &EmailUpdateRequest) -> AppResult<MessageResponse> {
        self.put_json("/user/admin/update-email", req).await
    }

    /// GET /withdrawal/admin/pending — 按用户聚合的待审提现
    pub async fn admin_pending_withdrawals(&self) -> AppResult<Vec<PendingWithdrawalGroup>> {
        let resp: PendingWithdrawalsResponse = self.get_json("/withdrawal/admin/pending").await?;
        Ok(resp.grouped_withdrawals)
    }

    /// GET /withdrawal/admin/all
    pub async fn admin_all_withdrawals(&self) -> AppResult<Vec<Withdrawal>> {
        let resp: WithdrawalsResponse = self.get_json("/withdrawal/admin/all").await?;
        Ok(resp.withdrawals)
    }

    /// POST /withdrawal/admin/approve-user — 批准该用户全部待审提现
    pub async fn admin_approve_withdrawals(
        &self,
        req: &ApproveUserWithdrawalsRequest,
    ) -> AppResult<MessageResponse> {
        if req.tx_hash.trim().is_empty() {
            return Err(AppError::validation("请填写链上交易哈希"));
        }
        self.post_json("/withdrawal/admin/approve-user", req).await
    }

    /// POST /withdrawal/admin/reject-user
    pub async fn admin_reject_withdrawals(
        &self,
        req: &RejectUserWithdrawalsRequest,
    ) -> AppResult<MessageResponse> {
        self.post_json("/withdrawal/admin/reject-user", req).await
    }
}
