//! Real-time clock abstraction.

use crate::calendar::DateTime;

/// Trait for a battery-backed real-time clock.
///
/// The RTC holds the authoritative time. It is read every frame while the clock
/// is idle and written once, with every field at the same time, when an edit
/// is committed.
pub trait RealTimeClock {
    /// Bus or peripheral error.
    type Error;

    /// Reads the current date and time.
    fn datetime(&mut self) -> Result<DateTime, Self::Error>;

    /// Sets the date and time.
    fn set_datetime(&mut self, datetime: &DateTime) -> Result<(), Self::Error>;
}
