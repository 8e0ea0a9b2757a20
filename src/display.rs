//! Display hardware abstraction.

use crate::colors::Rgb8;

/// Trait for abstracting the LCD and its drawing primitives.
///
/// Modelled on pen-based immediate-mode graphics libraries: pick a pen, then draw
/// with it. Nothing is visible until [`Display::update`] flushes the frame.
/// Implementations handle bus errors internally; drawing cannot fail.
pub trait Display {
    /// Opaque handle to a drawable color.
    type Pen: Copy;

    /// Creates a pen for an 8-bit RGB color.
    fn create_pen(&mut self, color: Rgb8) -> Self::Pen;

    /// Selects the pen used by subsequent drawing calls.
    fn set_pen(&mut self, pen: Self::Pen);

    /// Fills the whole frame with the current pen.
    fn clear(&mut self);

    /// Fills a rectangle with the current pen.
    fn rectangle(&mut self, x: i32, y: i32, width: i32, height: i32);

    /// Draws `text` with its top-left corner at `(x, y)`, magnified by `scale`.
    fn text(&mut self, text: &str, x: i32, y: i32, scale: u8);

    /// Width in pixels `text` would occupy at `scale`.
    fn measure_text(&self, text: &str, scale: u8) -> i32;

    /// Draws a one pixel line.
    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32);

    /// Flushes the frame to the panel.
    fn update(&mut self);

    /// Frame size as `(width, height)`.
    fn bounds(&self) -> (i32, i32);

    /// Sets the backlight level, `0.0-1.0`.
    fn set_backlight(&mut self, brightness: f32);

    /// Selects a font by name.
    fn set_font(&mut self, font: &str);
}
