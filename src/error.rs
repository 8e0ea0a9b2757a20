//! Error types for the clock application.

/// Errors that can occur while running the clock.
///
/// Only the RTC can fail. Display and LED drivers swallow their own errors and
/// debounced input has no failure path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockError<E> {
    /// Reading or writing the RTC failed.
    Rtc(E),
}

impl<E: core::fmt::Debug> core::fmt::Display for ClockError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ClockError::Rtc(e) => write!(f, "rtc access failed: {:?}", e),
        }
    }
}

#[cfg(feature = "std")]
impl<E: core::fmt::Debug> std::error::Error for ClockError<E> {}
