use embedded_hal::pwm::SetDutyCycle;
use rainbow_clock::{Rgb8, RgbLed};

/// RGB LED implementation for PWM-controlled LEDs
///
/// The Pico Display Pack's LED is common anode, so duty cycles are inverted
/// when `common_anode` is set.
pub struct PwmRgbLed<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    red: R,
    green: G,
    blue: B,
    max_duty: u16,
    common_anode: bool,
}

impl<R, G, B> PwmRgbLed<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    /// Create a new RGB LED controller
    ///
    /// # Arguments
    /// * `red` - PWM channel for red LED
    /// * `green` - PWM channel for green LED
    /// * `blue` - PWM channel for blue LED
    /// * `common_anode` - true for common anode LED (inverted logic), false for common cathode
    pub fn new(red: R, green: G, blue: B, common_anode: bool) -> Self {
        let max_duty = red.max_duty_cycle();

        Self {
            red,
            green,
            blue,
            max_duty,
            common_anode,
        }
    }

    /// Convert an 8-bit channel to a PWM duty cycle
    fn channel_to_duty(&self, value: u8) -> u16 {
        let duty = (value as u32 * self.max_duty as u32 / 255) as u16;

        if self.common_anode {
            self.max_duty - duty
        } else {
            duty
        }
    }
}

impl<R, G, B> RgbLed for PwmRgbLed<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    fn set_rgb(&mut self, color: Rgb8) {
        let _ = self.red.set_duty_cycle(self.channel_to_duty(color.red));
        let _ = self.green.set_duty_cycle(self.channel_to_duty(color.green));
        let _ = self.blue.set_duty_cycle(self.channel_to_duty(color.blue));
    }
}
