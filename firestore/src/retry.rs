//! Backoff and retry-classification shared by the request layer (`apiv1`),
//! the transaction engine, and the Watch reconnect loop.
//!
//! The workspace-wide `google_cloud_gax::retry::ExponentialBackoff` only
//! supports an integer growth factor, but the Firestore backends specify a
//! 1.5x multiplier with jitter, so this crate carries its own backoff rather
//! than bending the shared one to fit.

use std::time::Duration;

use google_cloud_gax::grpc::Code;
use rand::Rng;

const INITIAL_DELAY: Duration = Duration::from_millis(1000);
const MAX_DELAY: Duration = Duration::from_secs(60);
const MULTIPLIER: f64 = 1.5;

/// Exponential backoff with ±50% multiplicative jitter, per the request
/// layer's retry contract.
#[derive(Debug, Clone)]
pub struct Backoff {
    current: Duration,
    max: Duration,
    multiplier: f64,
}

impl Default for Backoff {
    fn default() -> Self {
        Backoff {
            current: INITIAL_DELAY,
            max: MAX_DELAY,
            multiplier: MULTIPLIER,
        }
    }
}

impl Backoff {
    /// Returns the next delay and advances internal state toward `max`.
    pub fn next_delay(&mut self) -> Duration {
        let jittered = jitter(self.current);
        let scaled = self.current.mul_f64(self.multiplier);
        self.current = if scaled > self.max { self.max } else { scaled };
        jittered
    }

    /// Pegs the next delay to `max` outright, for resource-exhaustion errors.
    pub fn peg_to_max(&mut self) -> Duration {
        self.current = self.max;
        jitter(self.max)
    }
}

fn jitter(d: Duration) -> Duration {
    let factor = rand::thread_rng().gen_range(0.5..1.5);
    d.mul_f64(factor)
}

/// True when a commit failure's message indicates the transaction expired
/// server-side; retried regardless of status code.
pub fn is_transaction_expired_message(message: &str) -> bool {
    message.contains("transaction has expired") || message.contains("transaction is no longer valid")
}

/// Decides whether an RPC failure should be retried, applying the two
/// overrides on top of the plain code classification.
pub fn should_retry(code: Code, message: &str) -> bool {
    if is_transaction_expired_message(message) {
        return true;
    }
    code.is_retryable()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_grows_by_multiplier_and_caps_at_max() {
        let mut b = Backoff::default();
        for _ in 0..200 {
            b.next_delay();
        }
        assert_eq!(b.current, MAX_DELAY);
    }

    #[test]
    fn jitter_stays_within_half_to_one_and_a_half() {
        let d = Duration::from_millis(1000);
        for _ in 0..1000 {
            let j = jitter(d);
            assert!(j >= Duration::from_millis(500) && j <= Duration::from_millis(1500));
        }
    }

    #[test]
    fn retryable_codes_match_table() {
        assert!(Code::Unavailable.is_retryable());
        assert!(Code::Aborted.is_retryable());
        assert!(!Code::NotFound.is_retryable());
        assert!(!Code::InvalidArgument.is_retryable());
    }

    #[test]
    fn expired_transaction_message_overrides_code() {
        assert!(should_retry(Code::FailedPrecondition, "the transaction has expired"));
    }
}
