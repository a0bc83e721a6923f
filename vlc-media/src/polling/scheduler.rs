//! Polling task scheduler and management
//!
//! One background task per active scheduler owns a `tokio::time::interval`.
//! Every tick spawns an independent fetch, so a slow player never delays the
//! timer; fetches may overlap and finish out of order, and each result is
//! delivered as it arrives.
//!
//! Stopping closes the run's gate and aborts the timer task. Fetches still in
//! flight are left to finish, but their results are discarded.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use parking_lot::{Mutex, RwLock};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use vlc_parser::Status;

use crate::dispatcher::CommandDispatcher;
use crate::error::{AdapterError, ConfigError, Result};
use crate::subscription::StatusSubscribers;
use crate::transport::StatusTransport;

/// `true` while the run that owns it is active
type RunGate = Arc<RwLock<bool>>;

#[derive(Debug, Default)]
struct PollCounters {
    ticks: AtomicU64,
    emitted: AtomicU64,
    discarded: AtomicU64,
}

/// A single polling run
#[derive(Debug)]
struct PollTask {
    /// Interval this run was started with
    interval: Duration,

    /// Task handle for the background timer loop
    task_handle: JoinHandle<()>,

    /// Closed on shutdown; fetches check it before delivering
    gate: RunGate,

    /// When this run was started
    started_at: SystemTime,
}

impl PollTask {
    fn start<T: StatusTransport>(
        runtime: &Handle,
        interval: Duration,
        dispatcher: CommandDispatcher<T>,
        subscribers: Arc<StatusSubscribers>,
        counters: Arc<PollCounters>,
    ) -> Self {
        let gate: RunGate = Arc::new(RwLock::new(true));
        let task_gate = Arc::clone(&gate);

        let task_handle = runtime.spawn(async move {
            Self::polling_loop(interval, dispatcher, subscribers, task_gate, counters).await;
        });

        Self {
            interval,
            task_handle,
            gate,
            started_at: SystemTime::now(),
        }
    }

    /// Main polling loop
    async fn polling_loop<T: StatusTransport>(
        interval: Duration,
        dispatcher: CommandDispatcher<T>,
        subscribers: Arc<StatusSubscribers>,
        gate: RunGate,
        counters: Arc<PollCounters>,
    ) {
        tracing::debug!(?interval, "Polling loop started");

        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;

            if !*gate.read() {
                break;
            }

            let tick = counters.ticks.fetch_add(1, Ordering::Relaxed) + 1;
            tracing::trace!(tick, "Poll tick");

            let dispatcher = dispatcher.clone();
            let subscribers = Arc::clone(&subscribers);
            let gate = Arc::clone(&gate);
            let counters = Arc::clone(&counters);

            tokio::spawn(async move {
                let status = dispatcher.fetch_status().await;

                if deliver(&gate, &subscribers, &status) {
                    counters.emitted.fetch_add(1, Ordering::Relaxed);
                } else {
                    counters.discarded.fetch_add(1, Ordering::Relaxed);
                    tracing::trace!(tick, "Discarding status fetched after polling stopped");
                }
            });
        }

        tracing::debug!("Polling loop ended");
    }

    fn is_running(&self) -> bool {
        !self.task_handle.is_finished()
    }

    /// Close the gate, then stop the timer
    ///
    /// Taking the write lock waits out any delivery in progress, so nothing
    /// reaches the subscribers once this returns.
    fn shutdown(self) {
        *self.gate.write() = false;
        self.task_handle.abort();
    }
}

/// Publish `status` if the gate is still open
fn deliver(gate: &RunGate, subscribers: &StatusSubscribers, status: &Status) -> bool {
    let open = gate.read();
    if !*open {
        return false;
    }

    let receivers = subscribers.publish(status);
    tracing::trace!(receivers, running = status.is_running(), "Status emitted");
    true
}

/// Drives periodic status polling for one player
pub struct PollScheduler<T> {
    /// Shared fetch path, also used by commands
    dispatcher: CommandDispatcher<T>,

    /// Observers receiving every emitted status
    subscribers: Arc<StatusSubscribers>,

    /// The active run, if any
    task: Mutex<Option<PollTask>>,

    /// Totals across all runs
    counters: Arc<PollCounters>,
}

impl<T: StatusTransport> PollScheduler<T> {
    /// Create a new, stopped scheduler
    pub fn new(dispatcher: CommandDispatcher<T>, subscribers: Arc<StatusSubscribers>) -> Self {
        Self {
            dispatcher,
            subscribers,
            task: Mutex::new(None),
            counters: Arc::new(PollCounters::default()),
        }
    }

    /// Start polling every `interval`, the first poll happening immediately
    ///
    /// Must be called from within a tokio runtime. Starting an already
    /// running scheduler keeps the current run and its interval.
    pub fn start(&self, interval: Duration) -> Result<()> {
        if interval.is_zero() {
            return Err(ConfigError::ZeroPollInterval.into());
        }

        let runtime = Handle::try_current().map_err(|_| AdapterError::NoRuntime)?;

        let mut task = self.task.lock();
        if let Some(existing) = task.as_ref() {
            tracing::debug!(interval = ?existing.interval, "Polling already active");
            return Ok(());
        }

        *task = Some(PollTask::start(
            &runtime,
            interval,
            self.dispatcher.clone(),
            Arc::clone(&self.subscribers),
            Arc::clone(&self.counters),
        ));

        tracing::info!(?interval, "Started status polling");
        Ok(())
    }

    /// Stop polling; returns whether a run was active
    ///
    /// Safe to call repeatedly.
    pub fn stop(&self) -> bool {
        let task = self.task.lock().take();

        match task {
            Some(task) => {
                task.shutdown();
                tracing::info!("Stopped status polling");
                true
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.lock().as_ref().is_some_and(PollTask::is_running)
    }

    /// Deliver an out-of-band status (e.g. after a command) to the
    /// subscribers, but only while polling is active
    pub fn publish(&self, status: &Status) -> bool {
        let gate = match self.task.lock().as_ref() {
            Some(task) => Arc::clone(&task.gate),
            None => return false,
        };

        deliver(&gate, &self.subscribers, status)
    }

    /// Get scheduler statistics
    pub fn stats(&self) -> PollSchedulerStats {
        let task = self.task.lock();

        PollSchedulerStats {
            is_running: task.as_ref().is_some_and(PollTask::is_running),
            interval: task.as_ref().map(|t| t.interval),
            started_at: task.as_ref().map(|t| t.started_at),
            ticks: self.counters.ticks.load(Ordering::Relaxed),
            statuses_emitted: self.counters.emitted.load(Ordering::Relaxed),
            statuses_discarded: self.counters.discarded.load(Ordering::Relaxed),
            subscribers: self.subscribers.len(),
        }
    }
}

impl<T> Drop for PollScheduler<T> {
    fn drop(&mut self) {
        if let Some(task) = self.task.get_mut().take() {
            task.shutdown();
        }
    }
}

/// Statistics for the polling scheduler
#[derive(Debug, Clone)]
pub struct PollSchedulerStats {
    pub is_running: bool,
    pub interval: Option<Duration>,
    pub started_at: Option<SystemTime>,
    pub ticks: u64,
    pub statuses_emitted: u64,
    /// Fetches that completed after their run was stopped
    pub statuses_discarded: u64,
    pub subscribers: usize,
}

impl fmt::Display for PollSchedulerStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Poll Scheduler Stats:")?;
        writeln!(f, "  Running: {}", self.is_running)?;
        if let Some(interval) = self.interval {
            writeln!(f, "  Interval: {:?}", interval)?;
        }
        writeln!(f, "  Ticks: {}", self.ticks)?;
        writeln!(
            f,
            "  Statuses: {} emitted, {} discarded",
            self.statuses_emitted, self.statuses_discarded
        )?;
        writeln!(f, "  Subscribers: {}", self.subscribers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::AtomicUsize;
    use vlc_client::{Command, TransportError};
    use vlc_parser::PlaybackState;

    const PLAYING: &str = "<root><state>playing</state><volume>160</volume><time>3</time></root>";

    /// Answers every fetch with [`PLAYING`] after `delay`
    #[derive(Default)]
    struct SlowTransport {
        delay: Duration,
        fetches: AtomicUsize,
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
    }

    #[async_trait]
    impl StatusTransport for SlowTransport {
        async fn fetch_status(&self) -> std::result::Result<String, TransportError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);

            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }

            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            Ok(PLAYING.to_string())
        }

        async fn send_command(&self, _command: Command) -> std::result::Result<String, TransportError> {
            Ok(String::new())
        }
    }

    fn scheduler(delay: Duration) -> (PollScheduler<SlowTransport>, Arc<StatusSubscribers>) {
        let transport = Arc::new(SlowTransport {
            delay,
            ..Default::default()
        });
        let subscribers = Arc::new(StatusSubscribers::new());
        let scheduler = PollScheduler::new(CommandDispatcher::new(transport), Arc::clone(&subscribers));
        (scheduler, subscribers)
    }

    #[test]
    fn test_start_outside_runtime_fails() {
        let (scheduler, _) = scheduler(Duration::ZERO);
        assert!(matches!(
            scheduler.start(Duration::from_millis(500)),
            Err(AdapterError::NoRuntime)
        ));
        assert!(!scheduler.is_running());
    }

    #[tokio::test]
    async fn test_zero_interval_rejected() {
        let (scheduler, _) = scheduler(Duration::ZERO);
        assert!(matches!(
            scheduler.start(Duration::ZERO),
            Err(AdapterError::Config(ConfigError::ZeroPollInterval))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_status_within_one_interval() {
        let (scheduler, subscribers) = scheduler(Duration::ZERO);
        let mut subscription = subscribers.subscribe();
        let interval = Duration::from_millis(500);

        scheduler.start(interval).unwrap();

        let status = tokio::time::timeout(interval, subscription.recv())
            .await
            .expect("status within one interval")
            .expect("subscription open");
        assert!(status.is_running());
        assert_eq!(status.state(), PlaybackState::Playing);
        assert_eq!(status.progress_ms(), Some(3_000));

        scheduler.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_every_tick_is_emitted() {
        let (scheduler, subscribers) = scheduler(Duration::ZERO);
        let mut subscription = subscribers.subscribe();

        scheduler.start(Duration::from_millis(100)).unwrap();
        tokio::time::sleep(Duration::from_millis(350)).await;
        scheduler.stop();

        // Ticks at 0, 100, 200 and 300ms, all identical, none collapsed
        let mut received = Vec::new();
        while let Some(status) = subscription.try_recv() {
            received.push(status);
        }
        assert_eq!(received.len(), 4);
        assert!(received.windows(2).all(|pair| pair[0] == pair[1]));

        let stats = scheduler.stats();
        assert_eq!(stats.ticks, 4);
        assert_eq!(stats.statuses_emitted, 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_and_stop_are_idempotent() {
        let (scheduler, _) = scheduler(Duration::ZERO);

        scheduler.start(Duration::from_millis(100)).unwrap();
        scheduler.start(Duration::from_millis(900)).unwrap();
        assert!(scheduler.is_running());
        assert_eq!(scheduler.stats().interval, Some(Duration::from_millis(100)));

        assert!(scheduler.stop());
        assert!(!scheduler.stop());
        assert!(!scheduler.is_running());
        assert_eq!(scheduler.stats().interval, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_events_after_stop() {
        let (scheduler, subscribers) = scheduler(Duration::from_millis(300));
        let mut subscription = subscribers.subscribe();

        scheduler.start(Duration::from_millis(100)).unwrap();
        // The first fetch is still in flight when polling stops
        tokio::time::sleep(Duration::from_millis(50)).await;
        scheduler.stop();

        tokio::time::sleep(Duration::from_secs(1)).await;

        assert_eq!(subscription.try_recv(), None);
        let stats = scheduler.stats();
        assert_eq!(stats.ticks, 1);
        assert_eq!(stats.statuses_emitted, 0);
        assert_eq!(stats.statuses_discarded, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_fetches_overlap() {
        let transport = Arc::new(SlowTransport {
            delay: Duration::from_millis(250),
            ..Default::default()
        });
        let subscribers = Arc::new(StatusSubscribers::new());
        let mut subscription = subscribers.subscribe();
        let scheduler = PollScheduler::new(
            CommandDispatcher::new(Arc::clone(&transport)),
            Arc::clone(&subscribers),
        );

        scheduler.start(Duration::from_millis(100)).unwrap();
        tokio::time::sleep(Duration::from_secs(1)).await;

        // The timer kept its pace even though every fetch outlived the interval
        assert!(transport.fetches.load(Ordering::SeqCst) >= 10);
        assert!(transport.max_in_flight.load(Ordering::SeqCst) >= 2);
        assert!(subscription.try_recv().is_some());

        scheduler.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_after_stop() {
        let (scheduler, subscribers) = scheduler(Duration::ZERO);
        let mut subscription = subscribers.subscribe();

        scheduler.start(Duration::from_millis(100)).unwrap();
        tokio::time::sleep(Duration::from_millis(10)).await;
        scheduler.stop();
        while subscription.try_recv().is_some() {}

        scheduler.start(Duration::from_millis(100)).unwrap();
        let status = tokio::time::timeout(Duration::from_millis(100), subscription.recv()).await;
        assert!(matches!(status, Ok(Some(_))));
        scheduler.stop();
    }

    #[tokio::test]
    async fn test_publish_only_while_running() {
        let (scheduler, subscribers) = scheduler(Duration::from_secs(60));
        let mut subscription = subscribers.subscribe();
        let status = Status::running(PlaybackState::Paused, None, None, None);

        assert!(!scheduler.publish(&status));

        scheduler.start(Duration::from_secs(3600)).unwrap();
        assert!(scheduler.publish(&status));
        assert_eq!(subscription.try_recv(), Some(status.clone()));

        scheduler.stop();
        assert!(!scheduler.publish(&status));
    }
}
