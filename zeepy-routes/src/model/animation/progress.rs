use std::time::Duration;

/// fraction of an animation's total duration that has elapsed, clamped to [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Progress(f64);

impl Progress {
    pub const COMPLETE: Progress = Progress(1.0);

    pub fn new(value: f64) -> Progress {
        if value.is_nan() {
            Progress(0.0)
        } else {
            Progress(value.clamp(0.0, 1.0))
        }
    }

    /// linear in elapsed time. a zero-length animation is complete immediately.
    pub fn from_elapsed(elapsed: Duration, total: Duration) -> Progress {
        if total.is_zero() {
            return Progress::COMPLETE;
        }
        Progress::new(elapsed.as_secs_f64() / total.as_secs_f64())
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_complete(&self) -> bool {
        self.0 >= 1.0
    }

    pub fn percent(&self) -> f64 {
        self.0 * 100.0
    }
}
