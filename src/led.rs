//! Status LED abstraction.

use crate::colors::Rgb8;

/// Trait for abstracting RGB LED hardware.
///
/// Implement this for your LED hardware (GPIO, PWM, SPI, etc.). Channels are
/// 8-bit; convert them to duty cycles or whatever the hardware needs. Handle
/// any hardware errors internally - this method cannot fail.
pub trait RgbLed {
    /// Sets the LED to the specified color.
    fn set_rgb(&mut self, color: Rgb8);
}
