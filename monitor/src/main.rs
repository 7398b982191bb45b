// 账户监控服务
//
// 无界面地跑完整个客户端栈：登录（或用缓存 token 恢复会话）、启动
// 各数据域轮询，然后把周期状态变化和提现汇总打到日志里。
use anyhow::{anyhow, Context};
use chrono::Utc;
use client::{ApiClient, CredentialStore, DomainFeeds, FileStore, StoredCredentials};
use common::models::req::LoginRequest;
use common::models::resp::DashboardResponse;
use common::models::Withdrawal;
use common::AppConfig;
use engine::{compute_withdrawal_summary, CycleEngine, CycleProfile, CycleState};
use std::collections::HashMap;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 嵌入配置文件（编译时加载）
    const DEFAULT_CONFIG: &str = include_str!("../config.toml");
    const PROD_CONFIG: &str = include_str!("../config.production.toml");

    dotenv::dotenv().ok();

    let config = AppConfig::from_file_or_embedded(
        "monitor/config",
        DEFAULT_CONFIG,
        Some(PROD_CONFIG),
    )
    .or_else(|_| AppConfig::from_env())
    .context("配置加载失败")?;

    // 初始化日志（使用配置的日志级别）
    std::env::set_var("RUST_LOG", &config.log.level);
    common::init_logger();

    log::info!("启动账户监控服务...");
    log::info!("配置加载成功 - API: {}", config.api.base_url);

    let profile = CycleProfile::from_settings(&config.cycle)?;
    log::info!(
        "周期参数: {} / 时长 {} 分钟 / 费率 {} / 工作日限制 {}",
        config.cycle.profile,
        profile.cycle_duration.num_minutes(),
        profile.fee_rate,
        profile.weekday_gate
    );
    let cycle_engine = CycleEngine::new(profile);

    let api = Arc::new(ApiClient::new(&config.api)?);
    let store = FileStore::default_location();

    authenticate(&api, &store).await?;

    // 启动各数据域轮询
    let feeds = DomainFeeds::start(api.clone(), &config.poll);
    log::info!("🚀 数据轮询已启动，Ctrl+C 退出");

    let mut dashboard_rx = feeds.dashboard.subscribe();
    let mut withdrawals_rx = feeds.withdrawals.subscribe();
    let mut referrals_rx = feeds.referrals.subscribe();

    // 投资 id → 上次观察到的周期状态，用于只在变化时打日志
    let mut last_states: HashMap<String, CycleState> = HashMap::new();

    loop {
        tokio::select! {
            changed = dashboard_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = dashboard_rx.borrow().clone();
                if let Some(dashboard) = snapshot {
                    report_cycles(&cycle_engine, &dashboard, &mut last_states);
                    report_summary(&cycle_engine, &dashboard, feeds.withdrawals.latest());
                }
            }
            changed = withdrawals_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                if let (Some(dashboard), Some(withdrawals)) =
                    (feeds.dashboard.latest(), withdrawals_rx.borrow().clone())
                {
                    report_summary(&cycle_engine, &dashboard, Some(withdrawals));
                }
            }
            changed = referrals_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let referrals = referrals_rx.borrow().clone().unwrap_or_default();
                if let Some(user_id) = current_user_id(&api).await {
                    let tree = engine::referral::build_tree(&user_id, referrals);
                    log::info!(
                        "推荐树: 一级 {} 人 / 二级 {} 人 / 三级 {} 人，共 {} 人",
                        tree.level1.len(),
                        tree.level2.len(),
                        tree.level3.len(),
                        tree.total_referrals
                    );
                }
            }
            _ = tokio::signal::ctrl_c() => {
                log::info!("收到退出信号，正在关闭服务...");
                break;
            }
        }
    }

    feeds.stop_all();

    // 轮询通道被关掉而不是 Ctrl+C：多半是封号导致
    if api.session().read().await.is_blocked() {
        log::error!("⛔ 账号已被封禁，请联系管理员处理");
    }

    log::info!("监控服务已退出");
    Ok(())
}

/// 恢复或建立会话：优先用缓存 token，失效再用环境变量里的账号密码登录
async fn authenticate(api: &Arc<ApiClient>, store: &FileStore) -> anyhow::Result<()> {
    if let Some(creds) = store.load().await? {
        api.restore_token(creds.token).await;
        match api.me().await {
            Ok(user) => {
                log::info!("✅ 会话恢复成功: {}", user.email);
                return Ok(());
            }
            Err(common::AppError::AccountBlocked(msg)) => {
                return Err(anyhow!("账号已被封禁: {}", msg));
            }
            Err(e) => {
                log::warn!("缓存 token 已失效 ({})，重新登录", e);
                store.clear().await?;
            }
        }
    }

    let email = std::env::var("MONITOR_EMAIL")
        .map_err(|_| anyhow!("缺少环境变量 MONITOR_EMAIL"))?;
    let password = std::env::var("MONITOR_PASSWORD")
        .map_err(|_| anyhow!("缺少环境变量 MONITOR_PASSWORD"))?;

    let resp = api
        .login(&LoginRequest { email, password })
        .await
        .context("登录失败")?;

    store
        .save(&StoredCredentials {
            token: resp.token,
            wallet_address: None,
        })
        .await?;
    Ok(())
}

/// 推导并打印每笔投资的周期状态（只在状态变化时输出）
fn report_cycles(
    engine: &CycleEngine,
    dashboard: &DashboardResponse,
    last_states: &mut HashMap<String, CycleState>,
) {
    let now = Utc::now();
    for inv in &dashboard.active_investments {
        if let Err(e) = engine.validate_exclusive(inv, now) {
            log::warn!("⚠️ 状态不一致: {}", e);
        }

        let state = engine.state_of(inv, now);
        let changed = last_states.get(&inv.id) != Some(&state);
        if changed {
            let countdown = engine
                .countdown(inv, now)
                .map(|text| format!(" ({})", text))
                .unwrap_or_default();
            log::info!(
                "投资 {} [{}] {} → {:?}{}",
                inv.id,
                inv.tier,
                inv.amount,
                state,
                countdown
            );
            last_states.insert(inv.id.clone(), state);
        }
    }
}

/// 计算并打印提现汇总（面板和提现历史都就绪时）
fn report_summary(
    engine: &CycleEngine,
    dashboard: &DashboardResponse,
    withdrawals: Option<Vec<Withdrawal>>,
) {
    let Some(withdrawals) = withdrawals else {
        return;
    };
    for w in &withdrawals {
        if let Err(e) = engine::summary::check_record_invariant(w) {
            log::warn!("⚠️ 提现单金额异常: {}", e);
        }
    }
    let summary = compute_withdrawal_summary(
        &dashboard.active_investments,
        &withdrawals,
        &dashboard.account_summary,
        engine.profile().fee_rate,
    );
    log::info!(
        "汇总: 总收益 {} / 可提净额 {} / 待审批 {} / 已提取 {}",
        summary.total_earnings,
        summary.net_available,
        summary.pending_total,
        summary.withdrawn_total
    );
}

/// 当前登录用户 id（构建推荐树的根）
async fn current_user_id(api: &Arc<ApiClient>) -> Option<String> {
    match api.session().read().await.identity() {
        client::Identity::Authenticated(profile) => Some(profile.id.clone()),
        _ => None,
    }
}
