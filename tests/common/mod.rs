//! Shared test infrastructure for rainbow-clock integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use rainbow_clock::{
    Button, ButtonPins, ClockApp, ClockConfig, DateTime, Display, EdgeQueue, RealTimeClock,
    Rgb8, RgbLed, TimeDuration, TimeInstant, TimeSource,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0.saturating_sub(earlier.0))
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: TestDuration) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + duration.0));
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Display
// ============================================================================

pub const SCREEN_WIDTH: i32 = 320;
pub const SCREEN_HEIGHT: i32 = 240;

/// Glyph advance of the mock font at scale 1.
pub const GLYPH_WIDTH: i32 = 6;

/// A single call made on the mock display
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    SetPen(Rgb8),
    Clear,
    Rectangle(i32, i32, i32, i32),
    Text(String, i32, i32, u8),
    Line(i32, i32, i32, i32),
    Update,
    Backlight(f32),
    Font(String),
}

/// Mock display that records every drawing call
pub struct MockDisplay {
    ops: Vec<DrawOp>,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Number of frames flushed so far
    pub fn updates(&self) -> usize {
        self.ops.iter().filter(|op| **op == DrawOp::Update).count()
    }

    /// Calls belonging to the most recently started frame
    pub fn last_frame(&self) -> &[DrawOp] {
        let start = self
            .ops
            .iter()
            .rposition(|op| *op == DrawOp::Clear)
            .unwrap_or(0);
        &self.ops[start..]
    }

    /// Text drawn in the most recent frame, with positions
    pub fn last_frame_texts(&self) -> Vec<(String, i32, i32, u8)> {
        self.last_frame()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text(text, x, y, scale) => Some((text.clone(), *x, *y, *scale)),
                _ => None,
            })
            .collect()
    }

    /// Lines drawn in the most recent frame
    pub fn last_frame_lines(&self) -> Vec<(i32, i32, i32, i32)> {
        self.last_frame()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Line(x0, y0, x1, y1) => Some((*x0, *y0, *x1, *y1)),
                _ => None,
            })
            .collect()
    }

    /// True if `text` appears anywhere in the most recent frame
    pub fn last_frame_shows(&self, text: &str) -> bool {
        self.last_frame_texts().iter().any(|(t, ..)| t == text)
    }
}

impl Display for MockDisplay {
    type Pen = Rgb8;

    fn create_pen(&mut self, color: Rgb8) -> Rgb8 {
        color
    }

    fn set_pen(&mut self, pen: Rgb8) {
        self.ops.push(DrawOp::SetPen(pen));
    }

    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn rectangle(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.ops.push(DrawOp::Rectangle(x, y, width, height));
    }

    fn text(&mut self, text: &str, x: i32, y: i32, scale: u8) {
        self.ops.push(DrawOp::Text(text.to_string(), x, y, scale));
    }

    fn measure_text(&self, text: &str, scale: u8) -> i32 {
        text.chars().count() as i32 * GLYPH_WIDTH * scale as i32
    }

    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        self.ops.push(DrawOp::Line(x0, y0, x1, y1));
    }

    fn update(&mut self) {
        self.ops.push(DrawOp::Update);
    }

    fn bounds(&self) -> (i32, i32) {
        (SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    fn set_backlight(&mut self, brightness: f32) {
        self.ops.push(DrawOp::Backlight(brightness));
    }

    fn set_font(&mut self, font: &str) {
        self.ops.push(DrawOp::Font(font.to_string()));
    }
}

// ============================================================================
// Mock LED
// ============================================================================

/// Mock LED that records all color changes for testing
pub struct MockLed {
    color_history: Vec<Rgb8>,
}

impl MockLed {
    pub fn new() -> Self {
        Self {
            color_history: Vec::new(),
        }
    }

    pub fn last_color(&self) -> Option<Rgb8> {
        self.color_history.last().copied()
    }

    pub fn color_history(&self) -> &[Rgb8] {
        &self.color_history
    }
}

impl RgbLed for MockLed {
    fn set_rgb(&mut self, color: Rgb8) {
        self.color_history.push(color);
    }
}

// ============================================================================
// Mock RTC
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusError;

/// Mock RTC holding a settable time and recording every write
pub struct MockRtc {
    now: DateTime,
    writes: Vec<DateTime>,
    reads: usize,
    failing: bool,
}

impl MockRtc {
    pub fn new(now: DateTime) -> Self {
        Self {
            now,
            writes: Vec::new(),
            reads: 0,
            failing: false,
        }
    }

    /// Simulate the clock moving on
    pub fn set_now(&mut self, now: DateTime) {
        self.now = now;
    }

    pub fn writes(&self) -> &[DateTime] {
        &self.writes
    }

    pub fn reads(&self) -> usize {
        self.reads
    }

    /// Make every subsequent access fail
    pub fn fail(&mut self) {
        self.failing = true;
    }
}

impl RealTimeClock for MockRtc {
    type Error = BusError;

    fn datetime(&mut self) -> Result<DateTime, BusError> {
        if self.failing {
            return Err(BusError);
        }
        self.reads += 1;
        Ok(self.now)
    }

    fn set_datetime(&mut self, datetime: &DateTime) -> Result<(), BusError> {
        if self.failing {
            return Err(BusError);
        }
        self.writes.push(*datetime);
        self.now = *datetime;
        Ok(())
    }
}

// ============================================================================
// Mock Buttons
// ============================================================================

/// Mock button pins with individually held buttons
pub struct MockPins {
    held: [bool; 4],
}

impl MockPins {
    pub fn new() -> Self {
        Self { held: [false; 4] }
    }

    pub fn hold(&mut self, button: Button) {
        self.held[slot(button)] = true;
    }

    pub fn release(&mut self, button: Button) {
        self.held[slot(button)] = false;
    }
}

fn slot(button: Button) -> usize {
    Button::ALL
        .iter()
        .position(|b| *b == button)
        .unwrap()
}

impl ButtonPins for MockPins {
    fn is_pressed(&mut self, button: Button) -> bool {
        self.held[slot(button)]
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub const DEBOUNCE: TestDuration = TestDuration(10);
pub const QUEUE_SIZE: usize = 8;

pub type TestQueue = EdgeQueue<TestInstant, QUEUE_SIZE>;
pub type TestApp<'t> =
    ClockApp<'t, TestInstant, MockDisplay, MockLed, MockRtc, MockTimeSource, QUEUE_SIZE>;

pub fn datetime(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> DateTime {
    DateTime::new(year, month, day, hour, minute, second).unwrap()
}

/// Boots an app against a mock RTC reading `now`
pub fn boot<'t>(queue: &'t TestQueue, timer: &'t MockTimeSource, now: DateTime) -> TestApp<'t> {
    ClockApp::new(
        MockDisplay::new(),
        MockLed::new(),
        MockRtc::new(now),
        queue,
        timer,
        ClockConfig::default(),
    )
    .unwrap()
}

/// Presses `button` through the interrupt path: edge, debounce window, tick, release
pub fn press(
    app: &mut TestApp<'_>,
    queue: &TestQueue,
    timer: &MockTimeSource,
    pins: &mut MockPins,
    button: Button,
) {
    pins.hold(button);
    queue.push(button, timer.now(), DEBOUNCE);
    timer.advance(TestDuration(20));
    app.tick(pins).unwrap();
    pins.release(button);
}

/// Presses `button` `times` times directly, bypassing the debouncer
pub fn tap(app: &mut TestApp<'_>, button: Button, times: usize) {
    for _ in 0..times {
        app.handle_button(button).unwrap();
    }
}
