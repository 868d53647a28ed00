//! Generic polling unit over an `IDataSource`.
//!
//! `start` spawns a loop that issues one fetch per interval tick (the first
//! tick fires immediately). Each fetch runs in its own task, so a slow
//! response never delays the next tick and fetches may overlap. The state
//! reflects whichever fetch completed last, not whichever started last.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use triage_dash_core::errors::SourceError;
use triage_dash_core::models::{PageVisibility, PollState, SourceKind};
use triage_dash_core::traits::{IClock, IDataSource, SystemClock};

use super::SourceSnapshot;

/// State shared between the poller handle, its loop, and in-flight fetches.
struct Shared<S: IDataSource> {
    source: S,
    clock: Arc<dyn IClock>,
    state: RwLock<SourceSnapshot<S::Output>>,
    issued: AtomicU64,
    completed: AtomicU64,
}

impl<S: IDataSource> Shared<S> {
    fn kind(&self) -> SourceKind {
        self.source.kind()
    }

    fn apply(&self, result: Result<S::Output, SourceError>) {
        let kind = self.kind();
        {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            match result {
                Ok(value) => {
                    state.data = Some(Arc::new(value));
                    state.poll.record_success(self.clock.now());
                    debug!(source = %kind, "source refreshed");
                }
                Err(e) => {
                    warn!(source = %kind, error_kind = e.kind(), error = %e, "source fetch failed");
                    state.poll.record_failure(e.to_string());
                }
            }
        }
        self.completed.fetch_add(1, Ordering::SeqCst);
    }
}

/// Issue one fetch as an independent task.
fn issue_fetch<S: IDataSource>(shared: &Arc<Shared<S>>) {
    let seq = shared.issued.fetch_add(1, Ordering::SeqCst) + 1;
    debug!(source = %shared.kind(), seq, "issuing fetch");
    let shared = Arc::clone(shared);
    tokio::spawn(async move {
        let result = shared.source.fetch().await;
        shared.apply(result);
    });
}

async fn run_loop<S: IDataSource>(
    shared: Arc<Shared<S>>,
    interval: Duration,
    cancel: CancellationToken,
    gate: Option<watch::Receiver<PageVisibility>>,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = ticker.tick() => {
                let visible = gate.as_ref().map_or(true, |rx| rx.borrow().is_visible());
                if visible {
                    issue_fetch(&shared);
                } else {
                    debug!(source = %shared.kind(), "page hidden, skipping tick");
                }
            }
        }
    }
    debug!(source = %shared.kind(), "poll loop exited");
}

/// Independent poller for one source.
///
/// Must be started from within a Tokio runtime. Dropping the poller stops
/// its loop.
pub struct SourcePoller<S: IDataSource> {
    shared: Arc<Shared<S>>,
    cancel: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl<S: IDataSource> SourcePoller<S> {
    pub fn new(source: S) -> Self {
        Self::with_clock(source, Arc::new(SystemClock))
    }

    /// Use `clock` for `last_success_at` stamps.
    pub fn with_clock(source: S, clock: Arc<dyn IClock>) -> Self {
        Self {
            shared: Arc::new(Shared {
                source,
                clock,
                state: RwLock::new(SourceSnapshot::default()),
                issued: AtomicU64::new(0),
                completed: AtomicU64::new(0),
            }),
            cancel: CancellationToken::new(),
            handle: None,
        }
    }

    pub fn kind(&self) -> SourceKind {
        self.shared.kind()
    }

    pub fn source(&self) -> &S {
        &self.shared.source
    }

    /// Fetch immediately, then every `interval`.
    pub fn start(&mut self, interval: Duration) {
        self.start_gated(interval, None);
    }

    /// Like [`start`](Self::start), but interval ticks are skipped while
    /// `gate` reports the page as hidden. Explicit triggers are not gated.
    ///
    /// Restarting a running poller stops the previous loop first.
    pub fn start_gated(
        &mut self,
        interval: Duration,
        gate: Option<watch::Receiver<PageVisibility>>,
    ) {
        if self.is_running() {
            self.stop();
        }
        self.shared
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .poll
            .mark_started();

        let cancel = CancellationToken::new();
        self.cancel = cancel.clone();
        self.handle = Some(tokio::spawn(run_loop(
            Arc::clone(&self.shared),
            interval,
            cancel,
            gate,
        )));
        info!(
            source = %self.kind(),
            interval_ms = interval.as_millis() as u64,
            "poller started"
        );
    }

    /// Cancel the loop. No further ticks or triggers are issued; fetches
    /// already in flight are left to finish.
    pub fn stop(&mut self) {
        self.cancel.cancel();
        if let Some(handle) = self.handle.take() {
            handle.abort();
            info!(source = %self.kind(), "poller stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some() && !self.cancel.is_cancelled()
    }

    /// Issue an out-of-band fetch without resetting the interval. Overlaps
    /// with any fetch still in flight. Returns false (and does nothing)
    /// when the poller is not running.
    pub fn trigger_now(&self) -> bool {
        if !self.is_running() {
            debug!(source = %self.kind(), "trigger ignored, poller not running");
            return false;
        }
        issue_fetch(&self.shared);
        true
    }

    pub fn snapshot(&self) -> SourceSnapshot<S::Output> {
        self.shared
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn poll_state(&self) -> PollState {
        self.snapshot().poll
    }

    pub fn data(&self) -> Option<Arc<S::Output>> {
        self.snapshot().data
    }

    /// Fetches issued since creation (ticks plus triggers).
    pub fn fetches_issued(&self) -> u64 {
        self.shared.issued.load(Ordering::SeqCst)
    }

    /// Fetches that have completed, successfully or not.
    pub fn fetches_completed(&self) -> u64 {
        self.shared.completed.load(Ordering::SeqCst)
    }
}

impl<S: IDataSource> Drop for SourcePoller<S> {
    fn drop(&mut self) {
        self.stop();
    }
}
