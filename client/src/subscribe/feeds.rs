// 各数据域的 Feed 装配
use crate::http::ApiClient;
use crate::subscribe::{spawn_feed, Feed, FeedHandle};
use common::config::PollConfig;
use common::models::resp::DashboardResponse;
use common::models::{Deposit, Referral, Withdrawal};
use std::sync::Arc;
use std::time::Duration;

/// 四个数据域的订阅集合（面板 / 提现 / 推荐 / 充值）
pub struct DomainFeeds {
    pub dashboard: Feed<DashboardResponse>,
    pub dashboard_handle: FeedHandle,
    pub withdrawals: Feed<Vec<Withdrawal>>,
    pub withdrawals_handle: FeedHandle,
    pub referrals: Feed<Vec<Referral>>,
    pub referrals_handle: FeedHandle,
    pub deposits: Feed<Vec<Deposit>>,
    pub deposits_handle: FeedHandle,
}

impl DomainFeeds {
    /// 按配置的间隔启动全部轮询
    pub fn start(client: Arc<ApiClient>, poll: &PollConfig) -> Self {
        let c = client.clone();
        let (dashboard, dashboard_handle) = spawn_feed(
            "dashboard",
            Duration::from_secs(poll.dashboard_secs),
            move || {
                let c = c.clone();
                async move { c.dashboard().await }
            },
        );

        let c = client.clone();
        let (withdrawals, withdrawals_handle) = spawn_feed(
            "withdrawals",
            Duration::from_secs(poll.withdrawals_secs),
            move || {
                let c = c.clone();
                async move { c.my_withdrawals().await }
            },
        );

        let c = client.clone();
        let (referrals, referrals_handle) = spawn_feed(
            "referrals",
            Duration::from_secs(poll.referrals_secs),
            move || {
                let c = c.clone();
                async move { c.referrals().await }
            },
        );

        let c = client;
        let (deposits, deposits_handle) = spawn_feed(
            "deposits",
            Duration::from_secs(poll.deposits_secs),
            move || {
                let c = c.clone();
                async move { c.deposit_history().await }
            },
        );

        Self {
            dashboard,
            dashboard_handle,
            withdrawals,
            withdrawals_handle,
            referrals,
            referrals_handle,
            deposits,
            deposits_handle,
        }
    }

    /// 停掉全部轮询
    pub fn stop_all(&self) {
        self.dashboard_handle.stop();
        self.withdrawals_handle.stop();
        self.referrals_handle.stop();
        self.deposits_handle.stop();
    }
}
