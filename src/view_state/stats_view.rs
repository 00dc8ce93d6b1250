//! Stats screen view-model: the fetch lifecycle state machine.
//!
//! Owns the `Loading -> Loaded | Failed` lifecycle for one stats screen
//! instance. The first fetch starts at construction, exactly once; after
//! a terminal state the presentation layer may request a retry, which
//! runs the cycle again from a clean `Loading`.
//!
//! Guarantees:
//!
//! - exactly one state at a time, no stale data retained across a retry
//! - at most one fetch in flight per instance (`retry` while loading is
//!   ignored)
//! - after [`StatsViewModel::teardown`] (or drop), an in-flight
//!   completion neither mutates state nor notifies subscribers

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::github::StatsFetcher;
use crate::models::RepositoryStats;

/// Lifecycle state of the stats fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    /// A fetch is pending; no data, no error
    Loading,
    /// The fetch succeeded
    Loaded(RepositoryStats),
    /// The fetch failed; `message` is the fixed user-facing string
    Failed { message: String },
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchState::Failed { .. })
    }
}

/// View-model driving the stats screen.
///
/// Must be created on a tokio runtime; the fetch runs as a spawned task.
/// Dropping the view-model tears it down, so a screen can simply own one
/// and let it go out of scope on navigation.
pub struct StatsViewModel {
    shared: Arc<Shared>,
}

struct Shared {
    fetcher: StatsFetcher,
    state: Mutex<FetchState>,
    tx: watch::Sender<FetchState>,
    /// Bumped on teardown; a completion whose generation is stale is dropped
    generation: AtomicU64,
    in_flight: AtomicBool,
    torn_down: AtomicBool,
}

impl Shared {
    fn apply(&self, next: FetchState) {
        *self.state.lock().unwrap() = next.clone();
        // Subscribers may have gone away; that is not an error
        let _ = self.tx.send(next);
    }
}

impl StatsViewModel {
    /// Create the view-model in `Loading` and start the first fetch.
    pub fn new(fetcher: StatsFetcher) -> Self {
        let (tx, _rx) = watch::channel(FetchState::Loading);
        let vm = Self {
            shared: Arc::new(Shared {
                fetcher,
                state: Mutex::new(FetchState::Loading),
                tx,
                generation: AtomicU64::new(0),
                in_flight: AtomicBool::new(false),
                torn_down: AtomicBool::new(false),
            }),
        };
        vm.spawn_fetch();
        vm
    }

    /// A copy of the current state.
    pub fn state(&self) -> FetchState {
        self.shared.state.lock().unwrap().clone()
    }

    /// Subscribe to state transitions.
    ///
    /// The channel fires once per transition, in transition order, and
    /// never after teardown.
    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.shared.tx.subscribe()
    }

    /// Request a new fetch.
    ///
    /// Ignored while a fetch is already in flight (single-flight policy)
    /// and after teardown. From `Failed` or `Loaded` this transitions
    /// back through `Loading`, discarding the previous outcome.
    pub fn retry(&self) {
        if self.shared.torn_down.load(Ordering::SeqCst) {
            return;
        }
        if self.shared.in_flight.load(Ordering::SeqCst) {
            debug!("retry ignored: fetch already in flight");
            return;
        }
        self.shared.apply(FetchState::Loading);
        self.spawn_fetch();
    }

    /// Stop the view-model.
    ///
    /// Any in-flight completion becomes a no-op: no state mutation, no
    /// notification. Safe to call more than once.
    pub fn teardown(&self) {
        self.shared.torn_down.store(true, Ordering::SeqCst);
        self.shared.generation.fetch_add(1, Ordering::SeqCst);
    }

    fn spawn_fetch(&self) {
        let shared = Arc::clone(&self.shared);
        let generation = shared.generation.load(Ordering::SeqCst);
        // Set before spawning so a retry racing the task start is still ignored
        shared.in_flight.store(true, Ordering::SeqCst);

        tokio::spawn(async move {
            let result = shared.fetcher.fetch().await;
            shared.in_flight.store(false, Ordering::SeqCst);

            if shared.torn_down.load(Ordering::SeqCst)
                || shared.generation.load(Ordering::SeqCst) != generation
            {
                debug!("fetch completion dropped: view-model torn down");
                return;
            }

            let next = match result {
                Ok(stats) => FetchState::Loaded(stats),
                Err(err) => {
                    warn!(error = %err, "stats fetch failed");
                    FetchState::Failed {
                        message: err.user_message(),
                    }
                }
            };
            shared.apply(next);
        });
    }
}

impl Drop for StatsViewModel {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::config::RepoConfig;
    use crate::error::FETCH_FAILED_MESSAGE;
    use crate::traits::{HttpError, Response};
    use bytes::Bytes;
    use std::time::Duration;

    const BODY: &str = r#"{
        "stargazers_count": 42,
        "forks_count": 15,
        "watchers_count": 42,
        "size": 10240,
        "open_issues_count": 3,
        "updated_at": "2025-11-20T12:00:00Z"
    }"#;

    fn view_model_with(mock: &MockHttpClient) -> StatsViewModel {
        let fetcher = StatsFetcher::new(Arc::new(mock.clone()), &RepoConfig::default());
        StatsViewModel::new(fetcher)
    }

    #[tokio::test]
    async fn test_initial_state_is_loading() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Success(Response::new(200, Bytes::from(BODY))));

        let vm = view_model_with(&mock);
        // The spawned fetch has not run yet on this single-threaded runtime
        assert!(vm.state().is_loading());
    }

    #[tokio::test]
    async fn test_success_transition() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Success(Response::new(200, Bytes::from(BODY))));

        let vm = view_model_with(&mock);
        let mut rx = vm.subscribe();
        rx.changed().await.unwrap();

        match vm.state() {
            FetchState::Loaded(stats) => {
                assert_eq!(stats.stars, 42);
                assert_eq!(stats.size_megabytes, 10);
            }
            other => panic!("expected Loaded, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failure_transition_collapses_message() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Error(HttpError::ConnectionFailed(
            "reset".to_string(),
        )));

        let vm = view_model_with(&mock);
        let mut rx = vm.subscribe();
        rx.changed().await.unwrap();

        match vm.state() {
            FetchState::Failed { message } => assert_eq!(message, FETCH_FAILED_MESSAGE),
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_retry_after_failure_recovers() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Error(HttpError::ConnectionFailed(
            "reset".to_string(),
        )));

        let vm = view_model_with(&mock);
        let mut rx = vm.subscribe();
        rx.changed().await.unwrap();
        assert!(vm.state().is_failed());

        mock.set_default_response(MockResponse::Success(Response::new(200, Bytes::from(BODY))));
        vm.retry();
        assert!(vm.state().is_loading());

        rx.changed().await.unwrap(); // Loading
        rx.changed().await.unwrap(); // Loaded
        assert!(matches!(vm.state(), FetchState::Loaded(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_drops_in_flight_completion() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Success(Response::new(200, Bytes::from(BODY))));
        mock.set_delay(Duration::from_millis(50));

        let vm = view_model_with(&mock);
        let mut rx = vm.subscribe();

        // Let the fetch start, then tear down mid-flight
        tokio::time::sleep(Duration::from_millis(10)).await;
        vm.teardown();
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert!(vm.state().is_loading());
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_while_in_flight_is_ignored() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Success(Response::new(200, Bytes::from(BODY))));
        mock.set_delay(Duration::from_millis(50));

        let vm = view_model_with(&mock);
        tokio::time::sleep(Duration::from_millis(10)).await;

        vm.retry();
        vm.retry();
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(mock.request_count(), 1);
        assert!(matches!(vm.state(), FetchState::Loaded(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_tears_down() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Success(Response::new(200, Bytes::from(BODY))));
        mock.set_delay(Duration::from_millis(50));

        let vm = view_model_with(&mock);
        let mut rx = vm.subscribe();
        tokio::time::sleep(Duration::from_millis(10)).await;
        drop(vm);
        tokio::time::sleep(Duration::from_millis(100)).await;

        // The completion must not have notified after the drop
        assert!(!rx.has_changed().unwrap_or(false));
    }

    #[tokio::test]
    async fn test_retry_from_loaded_discards_value() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Success(Response::new(200, Bytes::from(BODY))));

        let vm = view_model_with(&mock);
        let mut rx = vm.subscribe();
        rx.changed().await.unwrap();
        assert!(matches!(vm.state(), FetchState::Loaded(_)));

        vm.retry();
        // No stale value is shown while the new fetch runs
        assert!(vm.state().is_loading());
    }
}
