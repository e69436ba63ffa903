//! Polling Controller
//!
//! Each page owns one poller: an immediate fetch cycle followed by a fixed
//! 10 second interval, no backoff. A cycle advances the simulation clock
//! best-effort, fans out the bundle fetch, and commits the result as one
//! atomic snapshot swap. On failure the previous snapshot is retained and the
//! offline flag raised. Cancellation stops the timer and discards any cycle
//! still in flight.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use leptos::*;

use crate::api::{self, ApiError};
use crate::model::Snapshot;

/// Default poll interval.
pub const POLL_INTERVAL_MS: u32 = 10_000;

/// Banner text shown while the backend is unreachable.
pub const OFFLINE_MESSAGE: &str = "Backend offline – retrying…";

/// The latest snapshot plus the degraded-mode flag.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PollState {
    pub snapshot: Snapshot,
    pub offline: bool,
}

impl PollState {
    /// Applies one settled poll cycle. Success swaps the snapshot wholesale
    /// and clears the offline flag; failure leaves the snapshot untouched and
    /// raises it.
    pub fn apply(&mut self, outcome: Result<Snapshot, ApiError>) {
        match outcome {
            Ok(snapshot) => {
                self.snapshot = snapshot;
                self.offline = false;
            }
            Err(_) => {
                self.offline = true;
            }
        }
    }
}

/// Shared cancellation flag between a poller and its in-flight cycles.
#[derive(Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Commits a settled cycle unless the poller was cancelled while the cycle
/// was in flight; late results are discarded, never applied.
pub fn commit_cycle(
    state: &mut PollState,
    token: &CancelToken,
    outcome: Result<Snapshot, ApiError>,
) {
    if token.is_cancelled() {
        return;
    }
    state.apply(outcome);
}

/// Per-page reactive store fed by the poller. Consumers read it; only the
/// poller writes.
#[derive(Clone, Copy)]
pub struct SnapshotStore {
    pub state: RwSignal<PollState>,
    /// True until the first cycle settles.
    pub loading: RwSignal<bool>,
}

impl SnapshotStore {
    fn new() -> Self {
        Self {
            state: create_rw_signal(PollState::default()),
            loading: create_rw_signal(true),
        }
    }

    pub fn snapshot(&self) -> Memo<Snapshot> {
        let state = self.state;
        create_memo(move |_| state.get().snapshot)
    }

    pub fn offline(&self) -> Memo<bool> {
        let state = self.state;
        create_memo(move |_| state.get().offline)
    }
}

/// Handle owning the poll timer. Dropping or cancelling it stops future
/// ticks; in-flight requests are not aborted but their results are discarded.
pub struct Poller {
    token: CancelToken,
    interval: Option<Interval>,
}

impl Poller {
    pub fn cancel(mut self) {
        self.token.cancel();
        // Dropping the interval clears the underlying timer.
        self.interval.take();
    }
}

/// Starts polling into `store`: one cycle immediately, then every
/// `interval_ms` until cancelled.
pub fn start_polling(store: SnapshotStore, interval_ms: u32) -> Poller {
    let token = CancelToken::default();
    let tick = {
        let token = token.clone();
        move || {
            let token = token.clone();
            wasm_bindgen_futures::spawn_local(async move {
                run_cycle(store, token).await;
            });
        }
    };
    tick();
    let interval = Interval::new(interval_ms, tick);
    Poller { token, interval: Some(interval) }
}

async fn run_cycle(store: SnapshotStore, token: CancelToken) {
    // Best-effort side call; never blocks or fails the main fetch.
    if let Err(e) = api::simulate_tick().await {
        web_sys::console::warn_1(&format!("Simulation tick failed: {e}").into());
    }

    let outcome = api::fetch_snapshot().await;
    if let Err(e) = &outcome {
        web_sys::console::error_1(&format!("Poll cycle failed: {e}").into());
    }

    store.state.update(|state| commit_cycle(state, &token, outcome));
    if !token.is_cancelled() {
        store.loading.set(false);
    }
}

/// Creates a store, starts polling it at the default interval, and tears the
/// poller down when the owning view is disposed.
pub fn use_snapshot_poll() -> SnapshotStore {
    let store = SnapshotStore::new();
    let poller = start_polling(store, POLL_INTERVAL_MS);
    on_cleanup(move || poller.cancel());
    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Summary, Zone};

    fn snapshot(avg_risk: f64) -> Snapshot {
        Snapshot {
            summary: Summary { avg_risk, total_zones: 1, ..Default::default() },
            zones: vec![Zone { location: "Pune".into(), risk_score: avg_risk, ..Default::default() }],
            ..Default::default()
        }
    }

    #[test]
    fn successful_cycle_swaps_snapshot_and_clears_offline() {
        let mut state = PollState { offline: true, ..Default::default() };
        state.apply(Ok(snapshot(40.0)));
        assert!(!state.offline);
        assert_eq!(state.snapshot.summary.avg_risk, 40.0);
    }

    #[test]
    fn failed_cycle_keeps_previous_snapshot_intact() {
        let mut state = PollState::default();
        state.apply(Ok(snapshot(40.0)));
        let before = state.snapshot.clone();

        state.apply(Err(ApiError::Timeout));

        assert!(state.offline);
        assert_eq!(state.snapshot, before);
    }

    #[test]
    fn offline_flag_recovers_on_next_success() {
        let mut state = PollState::default();
        state.apply(Err(ApiError::Network("connection refused".into())));
        assert!(state.offline);

        state.apply(Ok(snapshot(25.0)));
        assert!(!state.offline);
        assert_eq!(state.snapshot.summary.avg_risk, 25.0);
    }

    #[test]
    fn late_result_after_cancel_is_discarded() {
        let token = CancelToken::default();
        let mut state = PollState::default();
        commit_cycle(&mut state, &token, Ok(snapshot(40.0)));
        let before = state.clone();

        token.cancel();
        commit_cycle(&mut state, &token, Ok(snapshot(99.0)));
        commit_cycle(&mut state, &token, Err(ApiError::Timeout));

        assert_eq!(state, before);
    }

    #[test]
    fn cancel_token_is_shared_between_clones() {
        let token = CancelToken::default();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
    }
}
