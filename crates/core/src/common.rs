//! Small shared utilities.

use std::time::Instant;

/// Timer for measuring and logging elapsed run time.
#[derive(Debug)]
pub struct Timer {
    start: Instant,
    label: String,
}

impl Timer {
    /// Start a new timer with a label.
    pub fn start(label: impl Into<String>) -> Self {
        let label = label.into();
        tracing::debug!("[{label}] starting");
        Self {
            start: Instant::now(),
            label,
        }
    }

    /// Log the final elapsed time and return it in milliseconds.
    pub fn finish(self) -> u128 {
        let elapsed = self.start.elapsed();
        let ms = elapsed.as_millis();
        tracing::info!("[{}] completed in {}ms", self.label, ms);
        ms
    }
}
