//! Asset Poller
//!
//! Runs the asset query on a fixed interval and publishes each state change
//! over a watch channel.

use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::QueryState;
use crate::market::AssetSource;

/// Default refresh interval
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Fixed-interval poller over an [`AssetSource`]
pub struct AssetPoller {
    source: Arc<dyn AssetSource>,
    interval: Duration,
}

/// Owns a running poll loop.
///
/// Dropping the handle cancels the timer and any request in flight, so no
/// result can land after teardown.
pub struct PollerHandle {
    rx: watch::Receiver<QueryState>,
    task: JoinHandle<()>,
}

impl AssetPoller {
    /// Create a poller. `interval` is clamped to at least one millisecond.
    pub fn new(source: Arc<dyn AssetSource>, interval: Duration) -> Self {
        Self {
            source,
            interval: interval.max(Duration::from_millis(1)),
        }
    }

    /// Start polling: one fetch now, then one per interval.
    pub fn start(self) -> PollerHandle {
        let (tx, rx) = watch::channel(QueryState::new());

        let task = tokio::spawn(async move {
            tracing::info!(
                "Polling {} every {}s",
                self.source.name(),
                self.interval.as_secs_f64()
            );

            let mut ticker = tokio::time::interval(self.interval);
            // A slow fetch pushes the schedule back instead of bursting to catch up
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;

                if tx.is_closed() {
                    break;
                }

                tx.send_modify(|state| state.begin_fetch());

                match self.source.fetch_assets().await {
                    Ok(assets) => {
                        tracing::debug!("Poll succeeded with {} assets", assets.len());
                        tx.send_modify(|state| state.succeed(assets, Utc::now()));
                    }
                    Err(e) => {
                        tracing::warn!("Poll of {} failed: {}", self.source.name(), e);
                        tx.send_modify(|state| state.fail(&e, Utc::now()));
                    }
                }
            }

            tracing::debug!("Poller stopped, no subscribers left");
        });

        PollerHandle { rx, task }
    }
}

impl PollerHandle {
    /// Current snapshot of the query state
    pub fn current(&self) -> QueryState {
        self.rx.borrow().clone()
    }

    /// Another receiver for the same state stream
    pub fn subscribe(&self) -> watch::Receiver<QueryState> {
        self.rx.clone()
    }

    /// Wait for the next state change and return it.
    ///
    /// Returns `None` once the poll loop has stopped.
    pub async fn changed(&mut self) -> Option<QueryState> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }

    /// Stop polling
    pub fn shutdown(self) {
        drop(self);
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::{AssetList, AssetRecord, FetchError, FetchResult};
    use crate::query::QueryStatus;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Source that replays scripted results and counts calls
    struct ScriptedSource {
        script: Mutex<VecDeque<FetchResult<AssetList>>>,
        delay: Duration,
        calls: AtomicUsize,
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
    }

    impl ScriptedSource {
        fn new(script: Vec<FetchResult<AssetList>>) -> Arc<Self> {
            Self::with_delay(script, Duration::ZERO)
        }

        fn with_delay(script: Vec<FetchResult<AssetList>>, delay: Duration) -> Arc<Self> {
            Arc::new(Self {
                script: Mutex::new(script.into()),
                delay,
                calls: AtomicUsize::new(0),
                in_flight: AtomicUsize::new(0),
                max_in_flight: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AssetSource for ScriptedSource {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn fetch_assets(&self) -> FetchResult<AssetList> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);

            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }

            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            self.script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(Vec::new()))
        }
    }

    fn assets(ids: &[&str]) -> AssetList {
        ids.iter()
            .map(|id| AssetRecord::new(*id, *id, id.to_uppercase()).price("1"))
            .collect()
    }

    async fn sleep_secs(secs: u64) {
        tokio::time::sleep(Duration::from_secs(secs)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetches_at_start_then_every_interval() {
        let source = ScriptedSource::new(Vec::new());
        let _handle = AssetPoller::new(source.clone(), DEFAULT_POLL_INTERVAL).start();

        sleep_secs(1).await;
        assert_eq!(source.calls(), 1);

        sleep_secs(58).await; // t = 59s
        assert_eq!(source.calls(), 1);

        sleep_secs(2).await; // t = 61s
        assert_eq!(source.calls(), 2);

        sleep_secs(120).await; // t = 181s
        assert_eq!(source.calls(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_state_transitions_and_recovery() {
        let source = ScriptedSource::new(vec![
            Ok(assets(&["bitcoin", "ethereum"])),
            Err(FetchError::Network("connection reset".to_string())),
            Ok(assets(&["ethereum", "bitcoin", "solana"])),
        ]);
        let handle = AssetPoller::new(source.clone(), DEFAULT_POLL_INTERVAL).start();
        assert_eq!(handle.current().status(), QueryStatus::Loading);

        sleep_secs(1).await;
        let state = handle.current();
        assert_eq!(state.status(), QueryStatus::Success);
        assert_eq!(state.data().unwrap()[0].id, "bitcoin");

        sleep_secs(60).await; // t = 61s
        let state = handle.current();
        assert_eq!(state.status(), QueryStatus::Error);
        assert_eq!(state.error(), Some("Network error: connection reset"));
        assert_eq!(state.data().unwrap().len(), 2);

        sleep_secs(60).await; // t = 121s
        let state = handle.current();
        assert_eq!(state.status(), QueryStatus::Success);
        assert_eq!(state.data().unwrap().len(), 3);
        assert_eq!(state.fetch_count(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_keeps_polling_after_failures() {
        let source = ScriptedSource::new(vec![
            Err(FetchError::Timeout(10_000)),
            Err(FetchError::Timeout(10_000)),
        ]);
        let handle = AssetPoller::new(source.clone(), DEFAULT_POLL_INTERVAL).start();

        sleep_secs(61).await;
        assert_eq!(handle.current().status(), QueryStatus::Error);
        assert_eq!(handle.current().failure_count(), 2);

        sleep_secs(60).await;
        assert_eq!(source.calls(), 3);
        assert_eq!(handle.current().status(), QueryStatus::Success);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_fetch_never_overlaps_or_speeds_up() {
        let source = ScriptedSource::with_delay(Vec::new(), Duration::from_secs(90));
        let _handle = AssetPoller::new(source.clone(), DEFAULT_POLL_INTERVAL).start();

        sleep_secs(1).await;
        assert_eq!(source.calls(), 1);

        // First fetch ends at 90s; the overdue tick fires then, not earlier
        sleep_secs(88).await; // t = 89s
        assert_eq!(source.calls(), 1);

        sleep_secs(2).await; // t = 91s
        assert_eq!(source.calls(), 2);

        sleep_secs(300).await;
        assert_eq!(source.max_in_flight.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_changed_yields_each_transition() {
        let source = ScriptedSource::new(vec![Ok(assets(&["bitcoin"]))]);
        let mut handle = AssetPoller::new(source, DEFAULT_POLL_INTERVAL).start();

        let mut saw_success = false;
        while let Some(state) = handle.changed().await {
            if state.status() == QueryStatus::Success {
                saw_success = true;
                break;
            }
        }
        assert!(saw_success);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_discards_in_flight_result() {
        let source = ScriptedSource::with_delay(
            vec![Ok(assets(&["bitcoin"]))],
            Duration::from_secs(30),
        );
        let handle = AssetPoller::new(source.clone(), DEFAULT_POLL_INTERVAL).start();
        let mut rx = handle.subscribe();

        sleep_secs(10).await;
        assert!(rx.borrow_and_update().is_fetching());
        handle.shutdown();

        // Sender goes away with the aborted task
        assert!(rx.changed().await.is_err());

        sleep_secs(300).await;
        let state = rx.borrow().clone();
        assert!(state.data().is_none());
        assert_eq!(source.calls(), 1);
    }
}
