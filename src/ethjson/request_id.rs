//! Request id allocation.

use std::sync::atomic::{AtomicI64, Ordering};

static GLOBAL_REQUEST_IDS: RequestIdCounter = RequestIdCounter::new();

/// Monotonic counter of constructed requests.
///
/// Every request construction advances the counter by one, including those
/// that carry a caller supplied id, so the counter tracks requests built
/// rather than ids issued. Ids only need to be unique while outstanding.
#[derive(Debug, Default)]
pub struct RequestIdCounter {
    last: AtomicI64,
}

impl RequestIdCounter {
    pub const fn new() -> Self {
        Self {
            last: AtomicI64::new(0),
        }
    }

    /// Creates a counter whose next advance returns `last + 1`.
    pub const fn starting_at(last: i64) -> Self {
        Self {
            last: AtomicI64::new(last),
        }
    }

    /// Process wide counter for callers that do not own one.
    pub fn global() -> &'static RequestIdCounter {
        &GLOBAL_REQUEST_IDS
    }

    /// Advances the counter and returns the new value.
    pub fn advance(&self) -> i64 {
        self.last.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Last value handed out.
    pub fn current(&self) -> i64 {
        self.last.load(Ordering::SeqCst)
    }

    pub fn reset(&self) {
        self.last.store(0, Ordering::SeqCst);
    }
}
