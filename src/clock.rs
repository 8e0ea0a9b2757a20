//! The clock application: boot, input handling and the per-frame tick.
//!
//! Provides [`ClockApp`], which owns the display, status LED and RTC, and ties
//! together the state machine, the debounced input and the clock face. The
//! caller runs the loop:
//!
//! ```ignore
//! let mut app = ClockApp::new(display, led, rtc, &EDGES, &timer, config)?;
//! loop {
//!     app.tick(&mut pins)?;
//!     delay.delay_ms(app.config().frame_interval.as_millis() as u32);
//! }
//! ```

use crate::colors::WHITE;
use crate::config::ClockConfig;
use crate::display::Display;
use crate::error::ClockError;
use crate::input::{Button, ButtonPins, EdgeQueue, InputController};
use crate::led::RgbLed;
use crate::render::{ClockFace, FrameColours, Hue};
use crate::rtc::RealTimeClock;
use crate::state::{ClockState, Transition};
use crate::time::{TimeInstant, TimeSource};

/// Runs the clock on a display, status LED and RTC.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source and edge queue references
/// * `I` - Time instant type
/// * `D` - Display implementation type
/// * `L` - LED implementation type
/// * `R` - RTC implementation type
/// * `T` - Time source implementation type
/// * `N` - Capacity of the edge queue
pub struct ClockApp<'t, I, D, L, R, T, const N: usize>
where
    I: TimeInstant,
    D: Display,
    L: RgbLed,
    R: RealTimeClock,
    T: TimeSource<I>,
{
    display: D,
    led: L,
    rtc: R,
    time_source: &'t T,
    input: InputController<'t, I, N>,
    config: ClockConfig<I::Duration>,
    state: ClockState,
    face: ClockFace,
    hue: Hue,
    colours: FrameColours<D::Pen>,
}

impl<'t, I, D, L, R, T, const N: usize> ClockApp<'t, I, D, L, R, T, N>
where
    I: TimeInstant,
    D: Display,
    L: RgbLed,
    R: RealTimeClock,
    T: TimeSource<I>,
{
    /// Boots the clock.
    ///
    /// Sets backlight and font, paints a white splash, and seeds the displayed
    /// time from the RTC. An RTC that has never been set is given the configured
    /// default date first.
    pub fn new(
        mut display: D,
        led: L,
        mut rtc: R,
        edges: &'t EdgeQueue<I, N>,
        time_source: &'t T,
        config: ClockConfig<I::Duration>,
    ) -> Result<Self, ClockError<R::Error>> {
        display.set_backlight(config.backlight);
        display.set_font(config.font);

        let (width, height) = display.bounds();
        let splash = display.create_pen(WHITE);
        display.set_pen(splash);
        display.rectangle(0, 0, width, height);

        let mut datetime = rtc.datetime().map_err(ClockError::Rtc)?;
        if datetime.is_unset_sentinel() {
            info!("rtc never set, resetting to default");
            rtc.set_datetime(&config.default_datetime)
                .map_err(ClockError::Rtc)?;
            datetime = config.default_datetime;
        }
        info!("clock booted at {}", datetime);

        let hue = Hue::new(config.hue_steps);
        let colours = FrameColours::for_hue(&mut display, &hue);

        Ok(Self {
            display,
            led,
            rtc,
            time_source,
            input: InputController::new(edges, config.debounce),
            face: ClockFace::new(config.layout),
            config,
            state: ClockState::new(datetime),
            hue,
            colours,
        })
    }

    /// Handles one debounced button press.
    ///
    /// Redraws immediately if anything changed, and writes the RTC when an edit
    /// is finished.
    pub fn handle_button(&mut self, button: Button) -> Result<Transition, ClockError<R::Error>> {
        let transition = self.state.handle(button);
        match transition {
            Transition::Ignored => {}
            Transition::Redraw => self.draw(),
            Transition::Commit(datetime) => {
                self.rtc.set_datetime(&datetime).map_err(ClockError::Rtc)?;
                self.draw();
            }
        }
        Ok(transition)
    }

    /// Runs one iteration of the render loop.
    ///
    /// Handles pending button presses, steps the rainbow, drives the LED, refreshes
    /// the time from the RTC unless editing, and redraws the frame. Sleep for
    /// [`ClockConfig::frame_interval`] between calls.
    pub fn tick<P: ButtonPins>(&mut self, pins: &mut P) -> Result<(), ClockError<R::Error>> {
        let now = self.time_source.now();
        while let Some(button) = self.input.next_press(now, pins) {
            self.handle_button(button)?;
        }

        self.hue.advance();
        self.colours = FrameColours::for_hue(&mut self.display, &self.hue);
        self.led.set_rgb(self.colours.background);

        if !self.state.is_editing() {
            let datetime = self.rtc.datetime().map_err(ClockError::Rtc)?;
            self.state.refresh(datetime);
        }

        self.draw();
        Ok(())
    }

    fn draw(&mut self) {
        self.face.draw(&mut self.display, &self.state, &self.colours);
    }

    pub fn state(&self) -> &ClockState {
        &self.state
    }

    pub fn hue(&self) -> &Hue {
        &self.hue
    }

    pub fn colours(&self) -> &FrameColours<D::Pen> {
        &self.colours
    }

    pub fn config(&self) -> &ClockConfig<I::Duration> {
        &self.config
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn led(&self) -> &L {
        &self.led
    }

    pub fn rtc(&self) -> &R {
        &self.rtc
    }

    /// Mutable RTC access, e.g. to simulate time passing in tests.
    pub fn rtc_mut(&mut self) -> &mut R {
        &mut self.rtc
    }
}
