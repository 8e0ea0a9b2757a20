//! Runtime configuration for the clock.

use crate::calendar::DateTime;
use crate::time::TimeDuration;

/// Geometry of the clock face, in pixels.
///
/// Defaults are laid out for a 320x240 panel with a 6x8 bitmap font.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceLayout {
    /// Top of the `HH:MM:SS` line.
    pub time_y: i32,
    pub time_scale: u8,
    /// Row of the hour/minute underline.
    pub time_underline_y: i32,
    /// Top of the `YYYY/MM/DD` line.
    pub date_y: i32,
    pub date_scale: u8,
    /// Row of the year/month/day underline.
    pub date_underline_y: i32,
    pub done_scale: u8,
    /// Gap between the "done" label and the right edge.
    pub done_margin: i32,
    /// Distance of the "done" label's top from the bottom edge.
    pub done_text_offset: i32,
    /// Distance of the "done" underline from the bottom edge.
    pub done_underline_offset: i32,
}

impl Default for FaceLayout {
    fn default() -> Self {
        Self {
            time_y: 40,
            time_scale: 8,
            time_underline_y: 70,
            date_y: 100,
            date_scale: 3,
            date_underline_y: 120,
            done_scale: 3,
            done_margin: 5,
            done_text_offset: 15,
            done_underline_offset: 5,
        }
    }
}

/// Clock configuration.
///
/// Construct with [`ClockConfig::default`] and override fields with the
/// chained setters:
///
/// ```
/// # use rainbow_clock::{ClockConfig, TimeDuration};
/// # #[derive(Clone, Copy, PartialEq)] struct Ms(u64);
/// # impl TimeDuration for Ms {
/// #     fn as_millis(&self) -> u64 { self.0 }
/// #     fn from_millis(millis: u64) -> Self { Ms(millis) }
/// # }
/// let config = ClockConfig::<Ms>::default()
///     .backlight(0.8)
///     .debounce(Ms(20));
/// assert_eq!(config.debounce.as_millis(), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockConfig<D: TimeDuration> {
    /// How long a pin must stay pressed after its edge to count as a press.
    pub debounce: D,
    /// Pause between frames. Bounds animation speed and input latency.
    pub frame_interval: D,
    /// Backlight level applied at boot, `0.0-1.0`.
    pub backlight: f32,
    /// Font selected at boot.
    pub font: &'static str,
    /// Frames per full turn of the rainbow.
    pub hue_steps: u16,
    /// Written to the RTC at boot if it reports the never-set sentinel date.
    pub default_datetime: DateTime,
    pub layout: FaceLayout,
}

impl<D: TimeDuration> Default for ClockConfig<D> {
    fn default() -> Self {
        Self {
            debounce: D::from_millis(10),
            frame_interval: D::from_millis(10),
            backlight: 0.5,
            font: "bitmap8",
            hue_steps: 360,
            default_datetime: DateTime::DEFAULT,
            layout: FaceLayout::default(),
        }
    }
}

impl<D: TimeDuration> ClockConfig<D> {
    pub fn debounce(mut self, debounce: D) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn frame_interval(mut self, frame_interval: D) -> Self {
        self.frame_interval = frame_interval;
        self
    }

    /// Clamped to `0.0-1.0`.
    pub fn backlight(mut self, backlight: f32) -> Self {
        self.backlight = backlight.clamp(0.0, 1.0);
        self
    }

    pub fn font(mut self, font: &'static str) -> Self {
        self.font = font;
        self
    }

    /// A zero step count is treated as one.
    pub fn hue_steps(mut self, hue_steps: u16) -> Self {
        self.hue_steps = hue_steps.max(1);
        self
    }

    pub fn default_datetime(mut self, datetime: DateTime) -> Self {
        self.default_datetime = datetime;
        self
    }

    pub fn layout(mut self, layout: FaceLayout) -> Self {
        self.layout = layout;
        self
    }
}
