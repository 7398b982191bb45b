// 轮询订阅
//
// 每个数据域一个 Feed：后台任务按固定间隔拉取，最新快照发布到 watch
// 通道，所有消费方订阅同一份数据，不再各自起定时器。取消是显式的：
// stop()（或丢弃句柄）立即中止后台任务，不会留下悬空的轮询。
mod feeds;

pub use feeds::DomainFeeds;

use common::{AppError, AppResult};
use std::future::Future;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

/// 数据快照的订阅端
pub struct Feed<T> {
    rx: watch::Receiver<Option<T>>,
}

impl<T: Clone> Feed<T> {
    /// 订阅快照变更（None 表示还没拉到第一份数据）
    pub fn subscribe(&self) -> watch::Receiver<Option<T>> {
        self.rx.clone()
    }

    /// 最近一次成功拉取的快照
    pub fn latest(&self) -> Option<T> {
        self.rx.borrow().clone()
    }
}

/// 轮询任务句柄：手动刷新 + 显式停止
pub struct FeedHandle {
    name: String,
    task: JoinHandle<()>,
    refresh_tx: mpsc::Sender<()>,
}

impl FeedHandle {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 立刻触发一次拉取（窗口聚焦、手动刷新按钮）
    pub async fn refresh_now(&self) {
        let _ = self.refresh_tx.send(()).await;
    }

    /// 停止轮询
    pub fn stop(&self) {
        self.task.abort();
        log::debug!("[{}] 轮询已停止", self.name);
    }
}

impl Drop for FeedHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// 启动一个轮询 Feed
///
/// 失败的 tick 只记日志并保留上次快照，等下一个 tick 再试；
/// 唯一的例外是封号——封号后轮询没有意义，任务直接退出。
pub fn spawn_feed<T, F, Fut>(
    name: impl Into<String>,
    period: Duration,
    fetch: F,
) -> (Feed<T>, FeedHandle)
where
    T: Clone + Send + Sync + 'static,
    F: Fn() -> Fut + Send + 'static,
    Fut: Future<Output = AppResult<T>> + Send + 'static,
{
    let name = name.into();
    let (tx, rx) = watch::channel(None);
    let (refresh_tx, mut refresh_rx) = mpsc::channel::<()>(1);

    let task_name = name.clone();
    let task = tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                Some(_) = refresh_rx.recv() => {}
            }

            match fetch().await {
                Ok(snapshot) => {
                    tx.send_replace(Some(snapshot));
                }
                Err(AppError::AccountBlocked(msg)) => {
                    log::error!("[{}] 账号被封禁，停止轮询: {}", task_name, msg);
                    break;
                }
                Err(e) => {
                    log::warn!("[{}] 轮询失败，保留上次快照: {}", task_name, e);
                }
            }
        }
    });

    (
        Feed { rx },
        FeedHandle {
            name,
            task,
            refresh_tx,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
    use std::sync::Arc;

    /// 等到快照变成期望值（测试时钟是暂停的，tick 会被自动推进）
    async fn wait_for(feed: &Feed<u32>, expected: u32) {
        let mut rx = feed.subscribe();
        while feed.latest() != Some(expected) {
            rx.changed().await.expect("feed 不应提前退出");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_feed_publishes_snapshots() {
        let value = Arc::new(AtomicU32::new(1));
        let v = value.clone();
        let (feed, handle) = spawn_feed("test", Duration::from_secs(60), move || {
            let v = v.clone();
            async move { Ok(v.load(Ordering::SeqCst)) }
        });

        wait_for(&feed, 1).await;

        // 数据源变化后，手动刷新能立即拉到新值
        value.store(2, Ordering::SeqCst);
        handle.refresh_now().await;
        wait_for(&feed, 2).await;

        handle.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_feed_keeps_last_snapshot_on_error() {
        let value = Arc::new(AtomicU32::new(1));
        let failing = Arc::new(AtomicBool::new(false));
        let (v, f) = (value.clone(), failing.clone());
        let (feed, handle) = spawn_feed("flaky", Duration::from_secs(30), move || {
            let (v, f) = (v.clone(), f.clone());
            async move {
                if f.load(Ordering::SeqCst) {
                    Err(AppError::NetworkError("timeout".to_string()))
                } else {
                    Ok(v.load(Ordering::SeqCst))
                }
            }
        });

        wait_for(&feed, 1).await;

        // 接口持续失败期间，上一份快照保持可用
        failing.store(true, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_secs(120)).await;
        assert_eq!(feed.latest(), Some(1));

        // 恢复后下一个 tick 拉到新值
        value.store(7, Ordering::SeqCst);
        failing.store(false, Ordering::SeqCst);
        wait_for(&feed, 7).await;

        handle.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_feed_stops_when_blocked() {
        let (feed, _handle) = spawn_feed("blocked", Duration::from_secs(10), move || async move {
            Err::<u32, _>(AppError::AccountBlocked("Account is blocked".to_string()))
        });

        // 封号后任务退出、发送端关闭，changed() 最终返回 Err
        let mut rx = feed.subscribe();
        while rx.changed().await.is_ok() {}
        assert_eq!(feed.latest(), None);
    }
}
