//! Timing utilities for the stages of a sweep.

use std::time::{Duration, Instant};

use tracing::debug;

pub struct StageTimer {
    total_timer: Instant,
}

impl StageTimer {
    pub fn start() -> StageTimer {
        StageTimer {
            total_timer: Instant::now(),
        }
    }

    /// Runs `func` and logs how long it took together with the running total.
    pub fn time_stage<G, F: FnOnce() -> G>(&self, stage: &'static str, func: F) -> G {
        let timer = Instant::now();
        let res = func();
        debug!(
            stage,
            elapsed = ?timer.elapsed(),
            total = ?self.elapsed(),
            "stage finished"
        );
        res
    }

    pub fn elapsed(&self) -> Duration {
        self.total_timer.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_stage_returns_the_closure_result() {
        let timer = StageTimer::start();
        let value = timer.time_stage("compute", || 21 * 2);
        assert_eq!(value, 42);
        assert!(timer.elapsed() >= Duration::ZERO);
    }
}
