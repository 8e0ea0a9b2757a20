//! Color space conversion helpers.
//!
//! The rainbow background is driven by a hue in the `[0, 1)` range, converted
//! through HSV to RGB. Text drawn on top picks black or white depending on the
//! perceived luminance of the background so it stays readable at every hue.

use palette::{FromColor, Hsv, Srgb};

/// 8-bit per channel RGB color, as understood by the display and the status LED.
pub type Rgb8 = Srgb<u8>;

pub const WHITE: Rgb8 = Srgb::new(255, 255, 255);
pub const BLACK: Rgb8 = Srgb::new(0, 0, 0);
pub const CYAN: Rgb8 = Srgb::new(0, 255, 255);
pub const MAGENTA: Rgb8 = Srgb::new(255, 0, 255);
pub const YELLOW: Rgb8 = Srgb::new(255, 255, 0);
pub const GREEN: Rgb8 = Srgb::new(0, 255, 0);

/// Luminance above which dark text is used.
pub const CONTRAST_THRESHOLD: f32 = 0.5;

/// Creates an RGB color from HSV components.
///
/// Unlike `palette::Hsv`, the hue here is a fraction of a full turn in `[0, 1)`
/// rather than degrees. Saturation and value are in `[0, 1]`.
#[inline]
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> Srgb {
    let hsv = Hsv::new(hue * 360.0, saturation, value);
    Srgb::from_color(hsv)
}

/// Scales a `0.0-1.0` color to 8-bit channels, truncating toward zero.
#[inline]
pub fn to_rgb8(color: Srgb) -> Rgb8 {
    Srgb::new(
        channel_to_u8(color.red),
        channel_to_u8(color.green),
        channel_to_u8(color.blue),
    )
}

#[inline]
fn channel_to_u8(value: f32) -> u8 {
    // float -> int casts saturate, so out-of-range values land on 0 or 255
    (255.0 * value) as u8
}

/// Perceived luminance of an 8-bit color, normalised to `[0, 1]`.
#[inline]
pub fn luminance(color: Rgb8) -> f32 {
    (0.299 * color.red as f32 + 0.587 * color.green as f32 + 0.114 * color.blue as f32) / 255.0
}

/// Text color that stays legible against a background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ContrastColour {
    /// Dark text, for bright backgrounds.
    Black,
    /// Light text, for dark backgrounds.
    White,
}

impl ContrastColour {
    /// Picks the text color for a given luminance.
    ///
    /// The comparison is strict: a luminance of exactly `0.5` yields `White`.
    #[inline]
    pub fn for_luminance(luminance: f32) -> Self {
        if luminance > CONTRAST_THRESHOLD {
            ContrastColour::Black
        } else {
            ContrastColour::White
        }
    }

    /// The palette color this choice maps to.
    #[inline]
    pub fn rgb(self) -> Rgb8 {
        match self {
            ContrastColour::Black => BLACK,
            ContrastColour::White => WHITE,
        }
    }
}

/// Picks black or white text for the given background.
#[inline]
pub fn contrast_colour(background: Rgb8) -> ContrastColour {
    ContrastColour::for_luminance(luminance(background))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_hues_map_to_primaries() {
        assert_eq!(to_rgb8(hsv_to_rgb(0.0, 1.0, 1.0)), Srgb::new(255, 0, 0));

        let green = hsv_to_rgb(1.0 / 3.0, 1.0, 1.0);
        assert!(green.green > 0.999 && green.red < 0.001 && green.blue < 0.001);

        let blue = hsv_to_rgb(2.0 / 3.0, 1.0, 1.0);
        assert!(blue.blue > 0.999 && blue.red < 0.001 && blue.green < 0.001);
    }

    #[test]
    fn zero_saturation_is_grey() {
        let grey = hsv_to_rgb(0.42, 0.0, 0.5);
        assert!((grey.red - 0.5).abs() < 0.001);
        assert!((grey.green - 0.5).abs() < 0.001);
        assert!((grey.blue - 0.5).abs() < 0.001);
    }

    #[test]
    fn to_rgb8_truncates() {
        // 0.999 * 255 = 254.7
        let c = to_rgb8(Srgb::new(0.999, 0.5, 0.0));
        assert_eq!(c, Srgb::new(254, 127, 0));
    }

    #[test]
    fn to_rgb8_saturates_out_of_range() {
        let c = to_rgb8(Srgb::new(1.2, -0.1, 1.0));
        assert_eq!(c, Srgb::new(255, 0, 255));
    }

    #[test]
    fn extremes_pick_opposite_text() {
        assert_eq!(contrast_colour(WHITE), ContrastColour::Black);
        assert_eq!(contrast_colour(BLACK), ContrastColour::White);
        assert_eq!(contrast_colour(YELLOW), ContrastColour::Black);
    }

    #[test]
    fn contrast_boundary_is_strict() {
        assert_eq!(ContrastColour::for_luminance(0.5), ContrastColour::White);
        assert_eq!(ContrastColour::for_luminance(0.5001), ContrastColour::Black);
    }
}
