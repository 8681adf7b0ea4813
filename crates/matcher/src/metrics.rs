// Metrics hooks for the matching layer.
//
// Callers install a global `MatchMetrics` implementation via
// [`set_match_metrics`], then `ChannelMatcher` reports every match decision
// and cache lookup. This keeps instrumentation decoupled from any specific
// metrics backend.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

/// Metrics observer for match operations.
pub trait MatchMetrics: Send + Sync {
    /// Record one match decision.
    ///
    /// `matched` is the boolean verdict and `latency` the wall-clock
    /// duration of the comparison, normalization included.
    fn record_match(&self, matched: bool, latency: Duration);

    /// Record one cache lookup during normalization.
    fn record_cache_lookup(&self, hit: bool);
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn MatchMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn MatchMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn MatchMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global match metrics recorder.
///
/// This is typically called once during service startup so all
/// `ChannelMatcher` instances share the same metrics backend.
pub fn set_match_metrics(recorder: Option<Arc<dyn MatchMetrics>>) {
    let lock = metrics_lock();
    let mut guard = lock.write().expect("match metrics lock poisoned");
    *guard = recorder;
}
