//! Hardware timer wrapper for rainbow-clock time traits.
//!
//! Wraps the RP2040 hardware timer (using fugit types) so the debouncer can
//! stamp button edges and measure their age.

use fugit::{MicrosDurationU64, TimerInstantU64};
use rainbow_clock::{TimeDuration, TimeInstant, TimeSource};

/// Duration type backed by fugit microsecond duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Duration(MicrosDurationU64);

impl TimeDuration for Duration {
    fn as_millis(&self) -> u64 {
        self.0.to_millis()
    }

    fn from_millis(millis: u64) -> Self {
        Duration(MicrosDurationU64::millis(millis))
    }
}

/// Instant type backed by fugit timer instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Instant(TimerInstantU64<1_000_000>);

impl TimeInstant for Instant {
    type Duration = Duration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        let ticks = self.0.ticks().saturating_sub(earlier.0.ticks());
        Duration(MicrosDurationU64::from_ticks(ticks))
    }
}

impl From<TimerInstantU64<1_000_000>> for Instant {
    fn from(instant: TimerInstantU64<1_000_000>) -> Self {
        Instant(instant)
    }
}

/// Time source wrapper around RP2040 Timer
#[derive(Clone, Copy)]
pub struct HardwareTimer {
    timer: rp_pico::hal::Timer,
}

impl HardwareTimer {
    /// Create a new hardware timer wrapper
    pub fn new(timer: rp_pico::hal::Timer) -> Self {
        Self { timer }
    }
}

impl TimeSource<Instant> for HardwareTimer {
    fn now(&self) -> Instant {
        Instant(self.timer.get_counter())
    }
}
