//! `Display` implementation on embedded-graphics.
//!
//! Drawing goes to an in-RAM frame buffer; [`Display::update`] pushes the whole
//! buffer to the panel in one transfer so a full redraw never flickers. Text is
//! magnified by drawing each font pixel as a `scale` x `scale` square.

use embedded_graphics::mono_font::ascii::{FONT_5X8, FONT_6X10, FONT_6X13};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::{Rgb565, Rgb888};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use embedded_hal::pwm::SetDutyCycle;
use rainbow_clock::{Display, Rgb8};

pub const WIDTH: usize = 320;
pub const HEIGHT: usize = 240;
pub const PIXELS: usize = WIDTH * HEIGHT;

fn font_by_name(name: &str) -> Option<&'static MonoFont<'static>> {
    match name {
        "bitmap6" => Some(&FONT_5X8),
        "bitmap8" => Some(&FONT_6X10),
        "bitmap14_outline" => Some(&FONT_6X13),
        _ => None,
    }
}

/// Whole-screen RGB565 buffer.
pub struct FrameBuffer {
    pixels: &'static mut [Rgb565; PIXELS],
}

impl FrameBuffer {
    pub fn new(pixels: &'static mut [Rgb565; PIXELS]) -> Self {
        Self { pixels }
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0 && point.y >= 0 && (point.x as usize) < WIDTH && (point.y as usize) < HEIGHT {
                self.pixels[point.y as usize * WIDTH + point.x as usize] = color;
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.pixels.fill(color);
        Ok(())
    }
}

/// Draw target adapter that magnifies everything drawn through it.
struct Scaled<'a, T> {
    target: &'a mut T,
    origin: Point,
    scale: u32,
}

impl<T: OriginDimensions> OriginDimensions for Scaled<'_, T> {
    fn size(&self) -> Size {
        self.target.size() / self.scale
    }
}

impl<T: DrawTarget + OriginDimensions> DrawTarget for Scaled<'_, T> {
    type Color = T::Color;
    type Error = T::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let block = Size::new_equal(self.scale);
        for Pixel(point, color) in pixels {
            let top_left = self.origin + point * self.scale as i32;
            self.target.fill_solid(&Rectangle::new(top_left, block), color)?;
        }
        Ok(())
    }
}

/// Pen-based display over a frame buffer and an RGB565 panel.
pub struct PanelDisplay<P, BL> {
    panel: P,
    backlight: BL,
    frame: FrameBuffer,
    pen: Rgb565,
    font: &'static MonoFont<'static>,
}

impl<P, BL> PanelDisplay<P, BL>
where
    P: DrawTarget<Color = Rgb565>,
    BL: SetDutyCycle,
{
    pub fn new(panel: P, backlight: BL, frame: FrameBuffer) -> Self {
        Self {
            panel,
            backlight,
            frame,
            pen: Rgb565::BLACK,
            font: &FONT_6X10,
        }
    }
}

impl<P, BL> Display for PanelDisplay<P, BL>
where
    P: DrawTarget<Color = Rgb565>,
    BL: SetDutyCycle,
{
    type Pen = Rgb565;

    fn create_pen(&mut self, color: Rgb8) -> Rgb565 {
        Rgb565::from(Rgb888::new(color.red, color.green, color.blue))
    }

    fn set_pen(&mut self, pen: Rgb565) {
        self.pen = pen;
    }

    fn clear(&mut self) {
        let _ = self.frame.clear(self.pen);
    }

    fn rectangle(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let size = Size::new(width.max(0) as u32, height.max(0) as u32);
        let _ = Rectangle::new(Point::new(x, y), size)
            .into_styled(PrimitiveStyle::with_fill(self.pen))
            .draw(&mut self.frame);
    }

    fn text(&mut self, text: &str, x: i32, y: i32, scale: u8) {
        let style = MonoTextStyle::new(self.font, self.pen);
        let mut scaled = Scaled {
            target: &mut self.frame,
            origin: Point::new(x, y),
            scale: scale.max(1) as u32,
        };
        let _ = Text::with_baseline(text, Point::zero(), style, Baseline::Top).draw(&mut scaled);
    }

    fn measure_text(&self, text: &str, scale: u8) -> i32 {
        let advance = self.font.character_size.width + self.font.character_spacing;
        (text.chars().count() as u32 * advance * scale.max(1) as u32) as i32
    }

    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let _ = Line::new(Point::new(x0, y0), Point::new(x1, y1))
            .into_styled(PrimitiveStyle::with_stroke(self.pen, 1))
            .draw(&mut self.frame);
    }

    fn update(&mut self) {
        let area = Rectangle::new(Point::zero(), self.frame.size());
        let _ = self
            .panel
            .fill_contiguous(&area, self.frame.pixels.iter().copied());
    }

    fn bounds(&self) -> (i32, i32) {
        (WIDTH as i32, HEIGHT as i32)
    }

    fn set_backlight(&mut self, brightness: f32) {
        let percent = (brightness.clamp(0.0, 1.0) * 100.0) as u8;
        let _ = self.backlight.set_duty_cycle_percent(percent);
    }

    fn set_font(&mut self, font: &str) {
        if let Some(font) = font_by_name(font) {
            self.font = font;
        }
    }
}
