//! The BulkWriter rate limiter (§4.5): a token bucket whose capacity ramps
//! up over time (the "500/50/5" rule). Modeled as a small numeric state
//! machine in the same shape as [`crate::retry::Backoff`]: plain fields,
//! `now` passed in by the caller rather than read internally, so the math
//! is exercised deterministically in tests.

use std::time::{Duration, Instant};

/// Starting steady-state rate, in operations per second.
pub const DEFAULT_START_RATE: f64 = 500.0;
/// Growth factor applied every `DEFAULT_PHASE`.
pub const DEFAULT_MULTIPLIER: f64 = 1.5;
/// How often the permitted rate ramps up.
pub const DEFAULT_PHASE: Duration = Duration::from_secs(5 * 60);

/// A token bucket whose capacity and refill rate both follow
/// `start * multiplier ^ floor(elapsed / phase)`. Tokens accrue
/// continuously at the current rate, capped at the current capacity.
#[derive(Debug)]
pub struct RateLimiter {
    start_rate: f64,
    multiplier: f64,
    phase: Duration,
    start: Instant,
    available: f64,
    last_refill: Instant,
}

impl RateLimiter {
    pub fn new(start_rate: f64, multiplier: f64, phase: Duration) -> RateLimiter {
        let now = Instant::now();
        RateLimiter { start_rate, multiplier, phase, start: now, available: start_rate, last_refill: now }
    }

    /// The permitted steady-state rate at `now`, in operations per second.
    pub fn current_rate(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.start).as_secs_f64();
        let phase_secs = self.phase.as_secs_f64();
        let phases = if phase_secs > 0.0 { (elapsed / phase_secs).floor() } else { 0.0 };
        self.start_rate * self.multiplier.powf(phases)
    }

    fn capacity(&self, now: Instant) -> f64 {
        self.current_rate(now)
    }

    fn refill(&mut self, now: Instant) {
        let rate = self.current_rate(now);
        let elapsed = now.saturating_duration_since(self.last_refill).as_secs_f64();
        self.available = (self.available + rate * elapsed).min(self.capacity(now));
        self.last_refill = now;
    }

    /// `tryMakeRequest`: deducts `n` tokens and returns `true` if the
    /// bucket currently holds enough; otherwise leaves it untouched.
    pub fn try_make_request(&mut self, n: f64, now: Instant) -> bool {
        self.refill(now);
        if self.available >= n {
            self.available -= n;
            true
        } else {
            false
        }
    }

    /// `getNextRequestDelayMs`: time until `n` tokens would be available,
    /// or `None` ("never", at the current capacity) if `n` exceeds the
    /// bucket's capacity at `now`.
    pub fn next_request_delay(&mut self, n: f64, now: Instant) -> Option<Duration> {
        self.refill(now);
        let capacity = self.capacity(now);
        if n > capacity {
            return None;
        }
        if self.available >= n {
            return Some(Duration::ZERO);
        }
        let rate = self.current_rate(now);
        let needed = n - self.available;
        let millis = (needed / rate * 1000.0).ceil().max(0.0);
        Some(Duration::from_millis(millis as u64))
    }

    /// Blocks until `n` tokens are available and deducts them. Used by
    /// [`crate::bulk_writer::BulkWriter`] before issuing a batch commit.
    pub async fn acquire(&mut self, n: f64) {
        loop {
            let now = Instant::now();
            if self.try_make_request(n, now) {
                return;
            }
            match self.next_request_delay(n, now) {
                Some(delay) => tokio::time::sleep(delay).await,
                // n exceeds capacity right now; capacity only grows, so
                // wait out a phase and reassess rather than spinning.
                None => tokio::time::sleep(self.phase).await,
            }
        }
    }
}

impl Default for RateLimiter {
    fn default() -> RateLimiter {
        RateLimiter::new(DEFAULT_START_RATE, DEFAULT_MULTIPLIER, DEFAULT_PHASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_ramps_by_multiplier_each_phase() {
        let limiter = RateLimiter::new(500.0, 1.5, Duration::from_secs(300));
        assert_eq!(limiter.current_rate(limiter.start), 500.0);
        assert_eq!(limiter.current_rate(limiter.start + Duration::from_secs(299)), 500.0);
        assert_eq!(limiter.current_rate(limiter.start + Duration::from_secs(300)), 750.0);
        assert_eq!(limiter.current_rate(limiter.start + Duration::from_secs(600)), 1125.0);
    }

    #[test]
    fn try_make_request_debits_available_tokens() {
        let mut limiter = RateLimiter::new(500.0, 1.5, Duration::from_secs(300));
        let now = limiter.start;
        assert!(limiter.try_make_request(400.0, now));
        assert!(!limiter.try_make_request(200.0, now)); // only 100 left
        assert!(limiter.try_make_request(100.0, now));
    }

    #[test]
    fn tokens_refill_continuously_up_to_capacity() {
        let mut limiter = RateLimiter::new(500.0, 1.5, Duration::from_secs(300));
        let now = limiter.start;
        assert!(limiter.try_make_request(500.0, now));
        assert!(!limiter.try_make_request(1.0, now));
        let one_sec_later = now + Duration::from_secs(1);
        assert!(limiter.try_make_request(500.0, one_sec_later)); // refilled at 500/s, capped at capacity
    }

    #[test]
    fn next_request_delay_is_zero_when_tokens_are_available() {
        let mut limiter = RateLimiter::new(500.0, 1.5, Duration::from_secs(300));
        let now = limiter.start;
        assert_eq!(limiter.next_request_delay(10.0, now), Some(Duration::ZERO));
    }

    #[test]
    fn next_request_delay_is_none_above_current_capacity() {
        let mut limiter = RateLimiter::new(500.0, 1.5, Duration::from_secs(300));
        let now = limiter.start;
        assert_eq!(limiter.next_request_delay(501.0, now), None);
    }

    #[test]
    fn next_request_delay_matches_shortfall_over_rate() {
        let mut limiter = RateLimiter::new(500.0, 1.5, Duration::from_secs(300));
        let now = limiter.start;
        limiter.try_make_request(500.0, now); // drain the bucket
        // 250 tokens at 500/s == 500ms
        assert_eq!(limiter.next_request_delay(250.0, now), Some(Duration::from_millis(500)));
    }
}
