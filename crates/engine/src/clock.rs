//! Frame clock: turns wall-clock time into whole-millisecond gravity input.

use std::time::{Duration, Instant};

/// Tracks the last counted instant and the frame length.
///
/// Only whole milliseconds are handed out; the sub-millisecond remainder stays
/// on the clock and is counted on a later frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    counted_to: Instant,
    frame: Duration,
}

impl FrameClock {
    pub fn new(frame_ms: u32) -> Self {
        Self::starting_at(Instant::now(), frame_ms)
    }

    pub fn starting_at(start: Instant, frame_ms: u32) -> Self {
        Self {
            counted_to: start,
            frame: Duration::from_millis(frame_ms.max(1) as u64),
        }
    }

    /// Time left until the next frame is due (zero if already due).
    pub fn until_next_frame(&self, now: Instant) -> Duration {
        self.frame
            .saturating_sub(now.saturating_duration_since(self.counted_to))
    }

    /// If a frame is due at `now`, return the whole milliseconds elapsed since
    /// the last counted instant and move that instant forward by exactly that much.
    pub fn tick(&mut self, now: Instant) -> Option<u32> {
        let elapsed = now.saturating_duration_since(self.counted_to);
        if elapsed < self.frame {
            return None;
        }
        let elapsed_ms = elapsed.as_millis().min(u32::MAX as u128) as u32;
        self.counted_to += Duration::from_millis(elapsed_ms as u64);
        Some(elapsed_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_tick_before_frame_is_due() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start, 16);
        assert_eq!(clock.tick(start + Duration::from_millis(15)), None);
        assert_eq!(
            clock.until_next_frame(start + Duration::from_millis(10)),
            Duration::from_millis(6)
        );
        assert_eq!(clock.tick(start + Duration::from_millis(16)), Some(16));
        assert_eq!(
            clock.until_next_frame(start + Duration::from_millis(40)),
            Duration::ZERO
        );
    }

    #[test]
    fn sub_millisecond_remainders_are_not_lost() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start, 16);
        let frame = Duration::from_micros(16_700);

        let mut counted = 0u64;
        for i in 1..=100u32 {
            if let Some(ms) = clock.tick(start + frame * i) {
                counted += ms as u64;
            }
        }
        // 100 frames of 16.7ms: 1670ms of real time, all of it counted.
        assert_eq!(counted, 1670);
    }
}
