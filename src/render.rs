//! Frame composition: the rainbow hue, its pens, and the clock face.

use crate::calendar::ClockText;
use crate::colors::{ContrastColour, Rgb8, contrast_colour, hsv_to_rgb, to_rgb8};
use crate::config::FaceLayout;
use crate::display::Display;
use crate::state::{ClockState, CursorField};

const DONE_LABEL: &str = "done";

/// Position on the rainbow, advanced one step per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hue {
    step: u16,
    steps: u16,
}

impl Hue {
    /// Starts at red, with `steps` frames per full turn.
    pub fn new(steps: u16) -> Self {
        Self {
            step: 0,
            steps: steps.max(1),
        }
    }

    pub fn step(&self) -> u16 {
        self.step
    }

    /// Moves one step along the rainbow, wrapping after a full turn.
    pub fn advance(&mut self) {
        self.step = (self.step + 1) % self.steps;
    }

    /// Position as a fraction of a full turn, in `[0, 1)`.
    pub fn fraction(&self) -> f32 {
        self.step as f32 / self.steps as f32
    }

    /// Fully saturated, full brightness color at this hue.
    pub fn rgb(&self) -> Rgb8 {
        to_rgb8(hsv_to_rgb(self.fraction(), 1.0, 1.0))
    }
}

/// Colors and pens for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameColours<P> {
    pub background: Rgb8,
    pub contrast: ContrastColour,
    pub background_pen: P,
    pub text_pen: P,
}

impl<P: Copy> FrameColours<P> {
    /// Derives the background and matching text pens for a hue.
    pub fn for_hue<D: Display<Pen = P>>(display: &mut D, hue: &Hue) -> Self {
        let background = hue.rgb();
        let contrast = contrast_colour(background);
        Self {
            background,
            contrast,
            background_pen: display.create_pen(background),
            text_pen: display.create_pen(contrast.rgb()),
        }
    }
}

/// Draws the clock face: time, date, and the edit cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockFace {
    layout: FaceLayout,
}

impl ClockFace {
    pub fn new(layout: FaceLayout) -> Self {
        Self { layout }
    }

    /// Redraws the whole frame and flushes it.
    pub fn draw<D: Display>(&self, display: &mut D, state: &ClockState, colours: &FrameColours<D::Pen>) {
        let layout = &self.layout;
        let (width, height) = display.bounds();
        let text = ClockText::new(state.datetime());
        let time = text.time.as_str();
        let date = text.date.as_str();

        let time_x = centred(width, display.measure_text(time, layout.time_scale));
        let date_x = centred(width, display.measure_text(date, layout.date_scale));

        display.set_pen(colours.background_pen);
        display.clear();
        display.set_pen(colours.text_pen);

        // no stroke width control, so thicken by drawing around the origin
        let (y, scale) = (layout.time_y, layout.time_scale);
        display.text(time, time_x, y, scale);
        display.text(time, time_x, y + 1, scale);
        display.text(time, time_x + 1, y, scale);
        display.text(time, time_x - 1, y, scale);

        display.text(date, date_x, layout.date_y, layout.date_scale);
        display.text(date, date_x, layout.date_y + 1, layout.date_scale);

        if let Some(cursor) = state.cursor() {
            match cursor {
                CursorField::Hour => {
                    self.underline(display, time, 0..2, time_x, layout.time_underline_y, layout.time_scale)
                }
                CursorField::Minute => {
                    self.underline(display, time, 3..5, time_x, layout.time_underline_y, layout.time_scale)
                }
                CursorField::Year => {
                    self.underline(display, date, 0..4, date_x, layout.date_underline_y, layout.date_scale)
                }
                CursorField::Month => {
                    self.underline(display, date, 5..7, date_x, layout.date_underline_y, layout.date_scale)
                }
                CursorField::Day => {
                    self.underline(display, date, 8..10, date_x, layout.date_underline_y, layout.date_scale)
                }
                CursorField::Finish => {}
            }
            self.draw_done(display, width, height, cursor == CursorField::Finish);
        }

        display.update();
    }

    /// Underlines `text[range]`, where `text` starts at `origin_x`.
    fn underline<D: Display>(
        &self,
        display: &mut D,
        text: &str,
        range: core::ops::Range<usize>,
        origin_x: i32,
        y: i32,
        scale: u8,
    ) {
        let lead = display.measure_text(segment(text, 0..range.start), scale);
        let span = display.measure_text(segment(text, range), scale);
        let x0 = origin_x + lead;
        display.line(x0, y, x0 + span, y);
    }

    fn draw_done<D: Display>(&self, display: &mut D, width: i32, height: i32, selected: bool) {
        let layout = &self.layout;
        let done_width = display.measure_text(DONE_LABEL, layout.done_scale);
        let x = width - done_width - layout.done_margin;
        display.text(DONE_LABEL, x, height - layout.done_text_offset, layout.done_scale);
        if selected {
            let y = height - layout.done_underline_offset;
            display.line(x, y, width - layout.done_margin, y);
        }
    }
}

/// Left edge that centres `content` pixels in `total`.
#[inline]
fn centred(total: i32, content: i32) -> i32 {
    (total - content) / 2
}

#[inline]
fn segment(text: &str, range: core::ops::Range<usize>) -> &str {
    text.get(range).unwrap_or("")
}
