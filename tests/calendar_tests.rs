//! Integration tests for calendar arithmetic

use rainbow_clock::{DateTime, Field, MIN_YEAR, days_in_month, is_leap_year};

const TABLE: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

#[test]
fn days_in_month_matches_gregorian_rule() {
    for year in 1900..2500u16 {
        let leap = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
        assert_eq!(is_leap_year(year), leap);
        for month in 1..=12u8 {
            let expected = if month == 2 && leap {
                29
            } else {
                TABLE[(month - 1) as usize]
            };
            assert_eq!(days_in_month(month, year), expected, "{}-{}", year, month);
        }
    }
}

#[test]
fn year_floor_holds_under_repeated_decrement() {
    let mut dt = DateTime::new(2024, 5, 5, 0, 0, 0).unwrap();
    for _ in 0..100 {
        dt.adjust(Field::Year, -1);
        assert!(dt.year >= MIN_YEAR);
    }
    assert_eq!(dt.year, MIN_YEAR);
}

#[test]
fn year_has_no_ceiling() {
    let mut dt = DateTime::new(2099, 5, 5, 0, 0, 0).unwrap();
    for _ in 0..1000 {
        dt.adjust(Field::Year, 1);
    }
    assert_eq!(dt.year, 3099);
}

#[test]
fn leap_day_clamped_when_leaving_leap_year() {
    let mut dt = DateTime::new(2024, 2, 29, 0, 0, 0).unwrap();
    dt.adjust(Field::Year, 1);
    assert_eq!((dt.year, dt.day), (2025, 28));

    // moving back does not restore the 29th
    dt.adjust(Field::Year, -1);
    assert_eq!((dt.year, dt.day), (2024, 28));
}

#[test]
fn day_never_exceeds_month_length_after_any_edit() {
    let fields = [Field::Year, Field::Month, Field::Day];
    let mut dt = DateTime::new(2024, 1, 31, 0, 0, 0).unwrap();
    for step in 0..500 {
        let field = fields[step % fields.len()];
        let delta = if step % 7 < 4 { 1 } else { -1 };
        dt.adjust(field, delta);
        assert!((1..=12).contains(&dt.month));
        assert!(dt.day >= 1 && dt.day <= days_in_month(dt.month, dt.year));
    }
}

#[test]
fn hour_and_minute_cycle_fully() {
    let mut dt = DateTime::new(2024, 1, 1, 0, 0, 0).unwrap();
    for _ in 0..24 {
        dt.adjust(Field::Hour, 1);
    }
    for _ in 0..60 {
        dt.adjust(Field::Minute, -1);
    }
    assert_eq!((dt.hour, dt.minute), (0, 0));
}
