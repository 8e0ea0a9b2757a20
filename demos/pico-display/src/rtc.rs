//! RP2040 on-chip RTC adapter.
//!
//! The RP2040 RTC loses its registers on power-off. It is started at the
//! never-set sentinel date so the clock treats every cold boot as a fresh RTC.

use rainbow_clock::{DateTime, RealTimeClock};
use rp_pico::hal::rtc::{self, DayOfWeek, RtcError};

/// First date of a freshly powered RTC.
pub const POWER_ON_DATE: rtc::DateTime = rtc::DateTime {
    year: 2021,
    month: 1,
    day: 1,
    day_of_week: DayOfWeek::Friday,
    hour: 0,
    minute: 0,
    second: 0,
};

pub struct PicoRtc {
    rtc: rtc::RealTimeClock,
}

impl PicoRtc {
    pub fn new(rtc: rtc::RealTimeClock) -> Self {
        Self { rtc }
    }
}

fn day_of_week(weekday: u8) -> DayOfWeek {
    match weekday % 7 {
        0 => DayOfWeek::Sunday,
        1 => DayOfWeek::Monday,
        2 => DayOfWeek::Tuesday,
        3 => DayOfWeek::Wednesday,
        4 => DayOfWeek::Thursday,
        5 => DayOfWeek::Friday,
        _ => DayOfWeek::Saturday,
    }
}

impl RealTimeClock for PicoRtc {
    type Error = RtcError;

    fn datetime(&mut self) -> Result<DateTime, RtcError> {
        let now = self.rtc.now()?;
        Ok(DateTime {
            year: now.year,
            month: now.month,
            day: now.day,
            weekday: now.day_of_week as u8,
            hour: now.hour,
            minute: now.minute,
            second: now.second,
        })
    }

    fn set_datetime(&mut self, datetime: &DateTime) -> Result<(), RtcError> {
        self.rtc.set_datetime(rtc::DateTime {
            year: datetime.year,
            month: datetime.month,
            day: datetime.day,
            day_of_week: day_of_week(datetime.weekday),
            hour: datetime.hour,
            minute: datetime.minute,
            second: datetime.second,
        })
    }
}
