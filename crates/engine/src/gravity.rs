//! Fixed-interval gravity timer.

/// Accumulates elapsed time and reports how many gravity steps are due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GravityTimer {
    interval_ms: u32,
    accumulator_ms: u32,
}

impl GravityTimer {
    /// Create a timer firing every `interval_ms` (a zero interval is treated as 1ms).
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            accumulator_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Time carried toward the next step
    pub fn pending_ms(&self) -> u32 {
        self.accumulator_ms
    }

    /// Add `elapsed_ms` and return the number of whole intervals now due.
    ///
    /// The remainder carries over, so the total number of steps depends only on
    /// the total elapsed time, not on how it was chunked.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let total = self.accumulator_ms as u64 + elapsed_ms as u64;
        let interval = self.interval_ms as u64;
        self.accumulator_ms = (total % interval) as u32;
        (total / interval) as u32
    }
}
