//! Time abstraction traits for platform-agnostic timing.
//!
//! The clock never sleeps on its own. Debounce windows and frame pacing are
//! expressed as durations and measured against instants supplied by the caller,
//! so the same code runs under a hardware timer, an async executor or a test mock.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Implementations should saturate to zero if `earlier` is actually later.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// Returns true once at least `window` has passed between `since` and `now`.
#[inline]
pub(crate) fn has_elapsed<I: TimeInstant>(since: I, now: I, window: I::Duration) -> bool {
    now.duration_since(since).as_millis() >= window.as_millis()
}
