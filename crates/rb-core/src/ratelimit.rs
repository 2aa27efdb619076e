//! Token-bucket rate limiting.
//!
//! One bucket is shared by the whole process. Taking a token is decided
//! immediately: either one is available or the caller is turned away.

use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Tokens added per second.
pub const REFILL_PER_SECOND: f64 = 2.0;

/// Maximum number of tokens the bucket holds (burst size).
pub const CAPACITY: u32 = 2;

#[derive(Debug)]
struct BucketState {
    tokens: f64,
    last_refill: Instant,
}

/// A fixed-capacity token bucket with a monotonic-clock refill.
#[derive(Debug)]
pub struct TokenBucket {
    capacity: f64,
    refill_per_second: f64,
    state: Mutex<BucketState>,
}

impl TokenBucket {
    /// Creates a full bucket.
    pub fn new(refill_per_second: f64, capacity: u32) -> Self {
        Self {
            capacity: f64::from(capacity),
            refill_per_second,
            state: Mutex::new(BucketState {
                tokens: f64::from(capacity),
                last_refill: Instant::now(),
            }),
        }
    }

    /// Attempts to take one token. Never blocks waiting for a refill.
    pub fn try_take(&self) -> bool {
        self.try_take_at(Instant::now())
    }

    fn try_take_at(&self, now: Instant) -> bool {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());

        let elapsed = now.saturating_duration_since(state.last_refill);
        state.tokens = (state.tokens + elapsed.as_secs_f64() * self.refill_per_second)
            .min(self.capacity);
        state.last_refill = now;

        if state.tokens >= 1.0 {
            state.tokens -= 1.0;
            true
        } else {
            false
        }
    }

    /// Time until the next token becomes available; zero if one is ready now.
    pub fn wait_time(&self) -> Duration {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let elapsed = Instant::now().saturating_duration_since(state.last_refill);
        let tokens = (state.tokens + elapsed.as_secs_f64() * self.refill_per_second)
            .min(self.capacity);
        if tokens >= 1.0 || self.refill_per_second <= 0.0 {
            Duration::ZERO
        } else {
            Duration::from_secs_f64((1.0 - tokens) / self.refill_per_second)
        }
    }
}

impl Default for TokenBucket {
    fn default() -> Self {
        Self::new(REFILL_PER_SECOND, CAPACITY)
    }
}
