//! The time-setting state machine.
//!
//! The clock is either idle, mirroring the RTC, or editing a private copy of the
//! date/time with a cursor on one field. Button presses drive every transition;
//! [`ClockState::handle`] reports whether the screen needs redrawing and hands
//! back the value to write to the RTC when an edit is finished.

use crate::calendar::{DateTime, Field};
use crate::input::Button;

/// Position of the edit cursor.
///
/// Ordered the way the cursor walks: time first, then date, then "done".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CursorField {
    Hour,
    Minute,
    Year,
    Month,
    Day,
    Finish,
}

impl CursorField {
    /// The next cursor position, wrapping from `Finish` back to `Hour`.
    pub fn next(&self) -> Self {
        match self {
            CursorField::Hour => CursorField::Minute,
            CursorField::Minute => CursorField::Year,
            CursorField::Year => CursorField::Month,
            CursorField::Month => CursorField::Day,
            CursorField::Day => CursorField::Finish,
            CursorField::Finish => CursorField::Hour,
        }
    }

    /// The date/time field this cursor edits, or `None` on `Finish`.
    pub fn field(&self) -> Option<Field> {
        match self {
            CursorField::Hour => Some(Field::Hour),
            CursorField::Minute => Some(Field::Minute),
            CursorField::Year => Some(Field::Year),
            CursorField::Month => Some(Field::Month),
            CursorField::Day => Some(Field::Day),
            CursorField::Finish => None,
        }
    }
}

/// Whether the clock is showing the RTC time or being set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockMode {
    /// Displayed time follows the RTC.
    Idle,
    /// The user is editing; the cursor selects the field.
    Editing(CursorField),
}

/// Outcome of handling one button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// Nothing changed.
    Ignored,
    /// The cursor or a value changed; redraw once.
    Redraw,
    /// Editing finished; write this value to the RTC, then redraw.
    Commit(DateTime),
}

/// Current date/time plus the edit mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockState {
    datetime: DateTime,
    mode: ClockMode,
}

impl ClockState {
    pub fn new(datetime: DateTime) -> Self {
        Self {
            datetime,
            mode: ClockMode::Idle,
        }
    }

    pub fn datetime(&self) -> &DateTime {
        &self.datetime
    }

    pub fn mode(&self) -> ClockMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, ClockMode::Editing(_))
    }

    /// The cursor position while editing.
    pub fn cursor(&self) -> Option<CursorField> {
        match self.mode {
            ClockMode::Idle => None,
            ClockMode::Editing(cursor) => Some(cursor),
        }
    }

    /// Replaces the displayed time with a fresh RTC reading.
    ///
    /// Ignored while editing so the user's changes are not overwritten.
    /// Returns true if the reading was applied.
    pub fn refresh(&mut self, datetime: DateTime) -> bool {
        if self.is_editing() {
            return false;
        }
        self.datetime = datetime;
        true
    }

    /// Applies a debounced button press.
    pub fn handle(&mut self, button: Button) -> Transition {
        let cursor = match self.mode {
            ClockMode::Idle => {
                if button == Button::B {
                    self.mode = ClockMode::Editing(CursorField::Hour);
                    info!("editing started");
                    return Transition::Redraw;
                }
                return Transition::Ignored;
            }
            ClockMode::Editing(cursor) => cursor,
        };

        let delta: i8 = match button {
            Button::B => {
                let next = cursor.next();
                self.mode = ClockMode::Editing(next);
                debug!("cursor moved to {}", next);
                return Transition::Redraw;
            }
            Button::A => 1,
            Button::Y => -1,
            Button::X => return Transition::Ignored,
        };

        match cursor.field() {
            Some(field) => {
                self.datetime.adjust(field, delta);
                Transition::Redraw
            }
            None => {
                self.mode = ClockMode::Idle;
                let committed = self.datetime.committed();
                self.datetime = committed;
                info!("editing finished, committing {}", committed);
                Transition::Commit(committed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> ClockState {
        ClockState::new(DateTime::new(2024, 2, 29, 10, 20, 30).unwrap())
    }

    #[test]
    fn cursor_wraps_after_finish() {
        let walk = [
            CursorField::Minute,
            CursorField::Year,
            CursorField::Month,
            CursorField::Day,
            CursorField::Finish,
        ];
        let mut cursor = CursorField::Hour;
        for expected in walk {
            cursor = cursor.next();
            assert_eq!(cursor, expected);
        }
        assert_eq!(cursor.next(), CursorField::Hour);
    }

    #[test]
    fn idle_ignores_everything_but_b() {
        let mut s = state();
        for button in [Button::A, Button::X, Button::Y] {
            assert_eq!(s.handle(button), Transition::Ignored);
        }
        assert_eq!(s.mode(), ClockMode::Idle);

        assert_eq!(s.handle(Button::B), Transition::Redraw);
        assert_eq!(s.cursor(), Some(CursorField::Hour));
    }

    #[test]
    fn x_does_nothing_while_editing() {
        let mut s = state();
        s.handle(Button::B);
        let before = *s.datetime();
        assert_eq!(s.handle(Button::X), Transition::Ignored);
        assert_eq!(*s.datetime(), before);
    }

    #[test]
    fn refresh_is_ignored_while_editing() {
        let mut s = state();
        s.handle(Button::B);
        assert!(!s.refresh(DateTime::DEFAULT));
        assert_eq!(s.datetime().year, 2024);
    }

    #[test]
    fn decrement_from_finish_also_commits() {
        let mut s = state();
        s.handle(Button::B);
        for _ in 0..5 {
            s.handle(Button::B);
        }
        assert_eq!(s.cursor(), Some(CursorField::Finish));

        let expected = DateTime::new(2024, 2, 29, 10, 20, 0).unwrap();
        assert_eq!(s.handle(Button::Y), Transition::Commit(expected));
        assert!(!s.is_editing());
    }
}
