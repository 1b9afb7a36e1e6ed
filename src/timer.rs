//! Monotonic elapsed-time helper.
//!
//! Elapsed time is always derived from [`std::time::Instant`], never from
//! wall-clock time, so clock adjustments cannot produce negative or skewed
//! durations.

use std::time::Instant;

/// An opaque marker for a monotonic start instant.
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Capture the current monotonic instant.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Milliseconds elapsed since the marker was captured, with
    /// sub-millisecond precision.
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_non_negative() {
        let timer = Timer::start();
        assert!(timer.elapsed_ms() >= 0.0);
    }

    #[test]
    fn elapsed_is_non_decreasing() {
        let timer = Timer::start();
        let first = timer.elapsed_ms();
        let second = timer.elapsed_ms();
        assert!(second >= first);
    }

    #[test]
    fn elapsed_grows_across_a_sleep() {
        let timer = Timer::start();
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert!(timer.elapsed_ms() >= 5.0);
    }
}
