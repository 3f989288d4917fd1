//! Exponential backoff
//!
//! Pass the returned wait into the next call to double the delay each time,
//! starting over at one second once it would exceed the maximum.

use std::thread;
use std::time::Duration;

/// Sleep for `wait` seconds and return the next wait
pub fn exponential_delay(wait: u64, max: u64) -> u64 {
    exponential_delay_with(wait, max, |seconds| {
        thread::sleep(Duration::from_secs(seconds))
    })
}

/// [`exponential_delay`] with the sleep supplied by the caller
pub fn exponential_delay_with<F>(wait: u64, max: u64, sleep: F) -> u64
where
    F: FnOnce(u64),
{
    tracing::debug!(wait_secs = wait, max_secs = max, "backing off");
    sleep(wait);

    let next = wait.saturating_mul(2);
    if next > max {
        1
    } else {
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_wait_doubles_then_resets() {
        let slept = Cell::new(0);
        let mut wait = 1;
        let mut seen = Vec::new();
        for _ in 0..6 {
            wait = exponential_delay_with(wait, 10, |seconds| slept.set(slept.get() + seconds));
            seen.push(wait);
        }

        assert_eq!(seen, [2, 4, 8, 1, 2, 4]);
        assert_eq!(slept.get(), 1 + 2 + 4 + 8 + 1 + 2);
    }

    #[test]
    fn test_zero_wait_stays_zero() {
        assert_eq!(exponential_delay(0, 5), 0);
    }

    #[test]
    fn test_overflow_resets() {
        assert_eq!(exponential_delay_with(u64::MAX, u64::MAX - 1, |_| {}), 1);
    }
}
