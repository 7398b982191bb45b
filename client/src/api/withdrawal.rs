// 提现接口
use crate::http::ApiClient;
use chrono::Utc;
use common::models::req::{FailedDepositUpdateRequest, WithdrawAllRequest, WithdrawalRequest};
use common::models::resp::{DashboardResponse, DepositsResponse, MessageResponse, WithdrawalsResponse};
use common::models::{Deposit, Investment, Withdrawal};
use common::AppResult;
use engine::summary::check_withdraw_all;
use engine::{CycleEngine, WithdrawalSummary};
use futures::try_join;

impl ApiClient {
    /// GET /withdrawal/my-withdrawals
    pub async fn my_withdrawals(&self) -> AppResult<Vec<Withdrawal>> {
        let resp: WithdrawalsResponse = self.get_json("/withdrawal/my-withdrawals").await?;
        Ok(resp.withdrawals)
    }

    /// 提现页需要的两份数据并行取（面板 + 提现历史）
    pub async fn withdrawal_overview(&self) -> AppResult<(DashboardResponse, Vec<Withdrawal>)> {
        let (dashboard, withdrawals) = try_join!(self.dashboard(), self.my_withdrawals())?;
        Ok((dashboard, withdrawals))
    }

    /// POST /withdrawal/request — 提取某笔投资的周期收益
    ///
    /// 先过状态机（必须已结算、钱包地址非空），不通过不发请求。
    pub async fn request_withdrawal(
        &self,
        engine: &CycleEngine,
        inv: &Investment,
        wallet_address: &str,
    ) -> AppResult<MessageResponse> {
        engine.check_request_withdrawal(inv, Utc::now(), wallet_address)?;
        self.post_json(
            "/withdrawal/request",
            &WithdrawalRequest {
                investment_id: inv.id.clone(),
                wallet_address: wallet_address.to_string(),
            },
        )
        .await
    }

    /// POST /withdrawal/request-all — 一键提现
    ///
    /// 金额 ≤ 可提净额、钱包地址与提现密码齐全才放行；
    /// 提现密码必须与登录密码不同。
    pub async fn withdraw_all(
        &self,
        req: &WithdrawAllRequest,
        summary: &WithdrawalSummary,
        login_password: &str,
    ) -> AppResult<MessageResponse> {
        check_withdraw_all(
            req.amount,
            &req.wallet_address,
            &req.withdrawal_password,
            login_password,
            summary,
        )?;
        self.post_json("/withdrawal/request-all", req).await
    }

    /// GET /withdrawal/failed-deposits — 等待修正的失败充值
    pub async fn failed_deposits(&self) -> AppResult<Vec<Deposit>> {
        let resp: DepositsResponse = self.get_json("/withdrawal/failed-deposits").await?;
        Ok(resp.deposits)
    }

    /// POST /withdrawal/update-failed-deposit — 修正后重新入账
    pub async fn update_failed_deposit(
        &self,
        req: &FailedDepositUpdateRequest,
    ) -> AppResult<MessageResponse> {
        self.post_json("/withdrawal/update-failed-deposit", req).await
    }
}
