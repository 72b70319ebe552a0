//! Frame pacing
//!
//! Portable fixed-rate timing without platform timers: the caller reports
//! when a cycle finished and waits until the returned deadline.

use embassy_time::{Duration, Instant};

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (zero after an overrun).
    pub sleep_duration: Duration,
    /// The finished cycle took longer than one period.
    pub overrun: bool,
}

/// Fixed-period cycle timing
///
/// Deadlines advance by exactly one period while cycles keep up. When a
/// cycle overruns, the schedule restarts from the moment it finished, so
/// a stall never turns into a burst of catch-up cycles.
#[derive(Debug, Clone)]
pub struct FramePacer {
    period: Duration,
    next_frame: Option<Instant>,
}

impl FramePacer {
    pub const fn new(period: Duration) -> Self {
        Self {
            period,
            next_frame: None,
        }
    }

    pub fn from_frame_rate(frame_rate: u32) -> Self {
        Self::new(Duration::from_hz(u64::from(frame_rate.max(1))))
    }

    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Account for a cycle that finished at `now`
    ///
    /// The first cycle is taken to have started at `now`.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        let started = self.next_frame.unwrap_or(now);
        let mut next_frame = started + self.period;

        let overrun = next_frame < now;
        if overrun {
            next_frame = now;
        }
        self.next_frame = Some(next_frame);

        FrameResult {
            next_deadline: next_frame,
            sleep_duration: next_frame
                .checked_duration_since(now)
                .unwrap_or(Duration::from_ticks(0)),
            overrun,
        }
    }

    /// Start a fresh schedule with a cycle beginning at `now`
    pub fn start(&mut self, now: Instant) {
        self.next_frame = Some(now);
    }
}
