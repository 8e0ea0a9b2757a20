#![no_std]

pub mod buttons;
pub mod display;
pub mod rgb_led;
pub mod rtc;
pub mod time;
