//! Calendar arithmetic and the editable date/time record.
//!
//! All edits go through [`DateTime::adjust`], which keeps every field in range by
//! construction: the year has a floor but no ceiling, month and day clamp, hour
//! and minute wrap. The day is re-clamped whenever the month or year moves.

use core::fmt::Write;
use heapless::String;

/// Earliest year the clock can be set to.
pub const MIN_YEAR: u16 = 2022;

const DAYS_IN_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap year rule.
#[inline]
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`.
///
/// Months outside 1-12 are clamped into range.
pub fn days_in_month(month: u8, year: u16) -> u8 {
    let month = month.clamp(1, 12);
    if month == 2 && is_leap_year(year) {
        return 29;
    }
    DAYS_IN_MONTH[(month - 1) as usize]
}

/// A date/time field that can be edited from the buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    Hour,
    Minute,
    Year,
    Month,
    Day,
}

/// Validation errors from [`DateTime::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalendarError {
    YearOutOfRange,
    MonthOutOfRange,
    DayOutOfRange,
    HourOutOfRange,
    MinuteOutOfRange,
    SecondOutOfRange,
}

impl core::fmt::Display for CalendarError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CalendarError::YearOutOfRange => write!(f, "year must be {} or later", MIN_YEAR),
            CalendarError::MonthOutOfRange => write!(f, "month must be in 1-12"),
            CalendarError::DayOutOfRange => write!(f, "day does not exist in that month"),
            CalendarError::HourOutOfRange => write!(f, "hour must be in 0-23"),
            CalendarError::MinuteOutOfRange => write!(f, "minute must be in 0-59"),
            CalendarError::SecondOutOfRange => write!(f, "second must be in 0-59"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CalendarError {}

/// Wall-clock date and time as held by the RTC.
///
/// `weekday` is carried through so RTC reads round-trip, but nothing on the
/// clock face depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub weekday: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTime {
    /// Date an RTC reports when it has never been set.
    pub const UNSET_SENTINEL: (u16, u8, u8) = (2021, 1, 1);

    /// Date written to a never-set RTC at boot.
    pub const DEFAULT: DateTime = DateTime {
        year: 2022,
        month: 2,
        day: 28,
        weekday: 0,
        hour: 12,
        minute: 0,
        second: 0,
    };

    /// Creates a validated date/time with weekday 0.
    pub fn new(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, CalendarError> {
        if year < MIN_YEAR {
            return Err(CalendarError::YearOutOfRange);
        }
        if !(1..=12).contains(&month) {
            return Err(CalendarError::MonthOutOfRange);
        }
        if day == 0 || day > days_in_month(month, year) {
            return Err(CalendarError::DayOutOfRange);
        }
        if hour > 23 {
            return Err(CalendarError::HourOutOfRange);
        }
        if minute > 59 {
            return Err(CalendarError::MinuteOutOfRange);
        }
        if second > 59 {
            return Err(CalendarError::SecondOutOfRange);
        }

        Ok(Self {
            year,
            month,
            day,
            weekday: 0,
            hour,
            minute,
            second,
        })
    }

    /// True if this is the date a fresh RTC reports before anyone set it.
    pub fn is_unset_sentinel(&self) -> bool {
        (self.year, self.month, self.day) == Self::UNSET_SENTINEL
    }

    /// Applies one edit step (`delta` of -1, 0 or +1) to `field`.
    pub fn adjust(&mut self, field: Field, delta: i8) {
        match field {
            Field::Year => {
                let year = (self.year as i32 + delta as i32).clamp(MIN_YEAR as i32, u16::MAX as i32);
                self.year = year as u16;
                self.clamp_day();
            }
            Field::Month => {
                let month = (self.month as i16 + delta as i16).clamp(1, 12);
                self.month = month as u8;
                self.clamp_day();
            }
            Field::Day => {
                let max = days_in_month(self.month, self.year) as i16;
                self.day = (self.day as i16 + delta as i16).clamp(1, max) as u8;
            }
            Field::Hour => {
                self.hour = (self.hour as i16 + delta as i16).rem_euclid(24) as u8;
            }
            Field::Minute => {
                self.minute = (self.minute as i16 + delta as i16).rem_euclid(60) as u8;
            }
        }
    }

    /// The value written back to the RTC when an edit completes.
    ///
    /// Seconds restart from zero and the weekday is left for the RTC to ignore.
    pub fn committed(&self) -> Self {
        Self {
            weekday: 0,
            second: 0,
            ..*self
        }
    }

    fn clamp_day(&mut self) {
        self.day = self.day.min(days_in_month(self.month, self.year));
    }
}

/// Rendered text of a date/time, in the form shown on the clock face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockText {
    /// `HH:MM:SS`
    pub time: String<8>,
    /// `YYYY/MM/DD`
    pub date: String<10>,
}

impl ClockText {
    pub fn new(datetime: &DateTime) -> Self {
        let mut time = String::new();
        let mut date = String::new();
        // Capacities match the formats exactly for every in-range field; a
        // year past 9999 is cut short rather than failing the frame.
        let _ = write!(
            time,
            "{:02}:{:02}:{:02}",
            datetime.hour, datetime.minute, datetime.second
        );
        let _ = write!(
            date,
            "{:04}/{:02}/{:02}",
            datetime.year, datetime.month, datetime.day
        );
        Self { time, date }
    }
}
