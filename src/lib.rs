#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ClockApp`**: Owns the hardware and runs one frame per [`ClockApp::tick`]
//! - **`ClockState`**: Date/time plus idle/editing mode and the edit cursor
//! - **`DateTime`**: Calendar fields with clamp/wrap editing rules
//! - **`EdgeQueue`** / **`InputController`**: Interrupt-safe button capture and debouncing
//! - **`ClockFace`**: Draws time, date and cursor on a [`Display`]
//! - **`Hue`** / **`FrameColours`**: The rainbow background and its legible text color
//! - **`Display`**, **`RgbLed`**, **`RealTimeClock`**, **`ButtonPins`**: Traits to implement for your hardware
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! Colors are `palette::Srgb<f32>` (0.0-1.0) during conversion and [`Rgb8`]
//! (`Srgb<u8>`) at the hardware boundary.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

mod fmt;

pub mod calendar;
pub mod clock;
pub mod colors;
pub mod config;
pub mod display;
pub mod error;
pub mod input;
pub mod led;
pub mod render;
pub mod rtc;
pub mod state;
pub mod time;

pub use calendar::{CalendarError, ClockText, DateTime, Field, MIN_YEAR, days_in_month, is_leap_year};
pub use clock::ClockApp;
pub use colors::{ContrastColour, Rgb8, contrast_colour, hsv_to_rgb, to_rgb8};
pub use config::{ClockConfig, FaceLayout};
pub use display::Display;
pub use error::ClockError;
pub use input::{Button, ButtonPins, Edge, EdgeQueue, InputController};
pub use led::RgbLed;
pub use render::{ClockFace, FrameColours, Hue};
pub use rtc::RealTimeClock;
pub use state::{ClockMode, ClockState, CursorField, Transition};
pub use time::{TimeDuration, TimeInstant, TimeSource};
