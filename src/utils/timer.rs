//! Monotonic timing for single executions.
//!
//! Wall-clock time comes from [`Instant`], which is not affected by system
//! clock adjustments. With the `cpu_cycles` feature the raw cycle counter is
//! sampled alongside it.

use std::time::{Duration, Instant};

/// A running measurement, started by [`Stopwatch::start`].
pub struct Stopwatch {
    start: Instant,
    #[cfg(feature = "cpu_cycles")]
    start_cycles: Option<u64>,
}

/// Result of a stopped [`Stopwatch`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    pub elapsed: Duration,
    /// Elapsed CPU cycles / ticks, when the counter is available
    pub cycles: Option<u64>,
}

impl Stopwatch {
    #[inline(always)]
    pub fn start() -> Self {
        Self {
            #[cfg(feature = "cpu_cycles")]
            start_cycles: super::cycles::read_cycles(),
            start: Instant::now(),
        }
    }

    #[inline(always)]
    pub fn stop(self) -> Timing {
        let elapsed = self.start.elapsed();

        #[cfg(feature = "cpu_cycles")]
        let cycles = match (self.start_cycles, super::cycles::read_cycles()) {
            (Some(start), Some(end)) => Some(end.saturating_sub(start)),
            _ => None,
        };
        #[cfg(not(feature = "cpu_cycles"))]
        let cycles = None;

        Timing { elapsed, cycles }
    }
}

impl Timing {
    /// Elapsed time in milliseconds with sub-millisecond precision.
    pub fn as_millis_f64(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Round to a fixed number of decimal places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::hint::black_box;

    #[test]
    fn test_stopwatch_measures_work() {
        let watch = Stopwatch::start();
        let mut sum = 0u64;
        for i in 0..10_000 {
            sum = black_box(sum.wrapping_add(black_box(i)));
        }
        let timing = watch.stop();
        assert!(sum > 0);
        assert!(timing.as_millis_f64() >= 0.0);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.234_56, 4), 1.2346);
        assert_eq!(round_to(0.0, 4), 0.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
    }

    #[test]
    fn test_as_millis_f64() {
        let timing = Timing {
            elapsed: Duration::from_micros(1500),
            cycles: None,
        };
        assert!((timing.as_millis_f64() - 1.5).abs() < 1e-9);
    }
}
