use std::time::Instant;

pub struct TimeEstimation;

impl TimeEstimation {
    /// Runs `action` and returns its result together with the elapsed
    /// milliseconds, for step-level progress logging.
    pub fn estimate<T, F: FnOnce() -> T>(action: F) -> (T, u128) {
        let started = Instant::now();
        let result = action();
        (result, started.elapsed().as_millis())
    }
}
