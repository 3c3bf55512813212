use std::sync::Mutex;

use crate::RecognizeError;

/// Counts finished recognition round trips and remembers the most recent
/// failure for end-of-request logging.
pub struct RequestStats {
    inner: Mutex<Counters>,
}

struct Counters {
    completed: usize,
    failed: usize,
    last_failure: Option<String>,
}

impl RequestStats {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Counters {
                completed: 0,
                failed: 0,
                last_failure: None,
            }),
        }
    }

    pub fn record_completed(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.completed += 1;
        }
    }

    pub fn record_failed(&self, err: &RecognizeError) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.failed += 1;
            counters.last_failure = Some(err.to_string());
        }
    }

    pub fn snapshot(&self) -> (usize, usize) {
        if let Ok(counters) = self.inner.lock() {
            (counters.completed, counters.failed)
        } else {
            (0, 0)
        }
    }

    /// The description of the most recent failed request, if any.
    pub fn last_failure(&self) -> Option<String> {
        self.inner
            .lock()
            .ok()
            .and_then(|counters| counters.last_failure.clone())
    }
}

impl Default for RequestStats {
    fn default() -> Self {
        Self::new()
    }
}
