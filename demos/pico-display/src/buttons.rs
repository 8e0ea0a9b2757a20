//! Display Pack buttons A/B/X/Y on GPIO 12-15.
//!
//! The pins live in a critical-section mutex shared by the GPIO interrupt, which
//! stamps falling edges into [`EDGES`], and the main loop, which reads pin levels
//! when debouncing.

use core::cell::RefCell;

use critical_section::Mutex;
use embedded_hal::digital::InputPin;
use rainbow_clock::{Button, ButtonPins, EdgeQueue, TimeSource};
use rp_pico::hal::gpio::bank0::{Gpio12, Gpio13, Gpio14, Gpio15};
use rp_pico::hal::gpio::{FunctionSioInput, Interrupt, Pin, PullUp};

use crate::time::{Duration, HardwareTimer, Instant};

pub const EDGE_CAPACITY: usize = 8;

/// Edges captured by the GPIO interrupt, waiting to be debounced.
pub static EDGES: EdgeQueue<Instant, EDGE_CAPACITY> = EdgeQueue::new();

static SHARED: Mutex<RefCell<Option<IrqContext>>> = Mutex::new(RefCell::new(None));

pub type ButtonA = Pin<Gpio12, FunctionSioInput, PullUp>;
pub type ButtonB = Pin<Gpio13, FunctionSioInput, PullUp>;
pub type ButtonX = Pin<Gpio14, FunctionSioInput, PullUp>;
pub type ButtonY = Pin<Gpio15, FunctionSioInput, PullUp>;

struct IrqContext {
    a: ButtonA,
    b: ButtonB,
    x: ButtonX,
    y: ButtonY,
    timer: HardwareTimer,
    debounce: Duration,
}

/// Enables falling-edge interrupts on all four buttons and hands the pins to
/// the interrupt handler.
///
/// `debounce` must be the window the clock debounces with
/// (`ClockConfig::debounce`), so bounce folding and press acceptance agree.
pub fn install(
    a: ButtonA,
    b: ButtonB,
    x: ButtonX,
    y: ButtonY,
    timer: HardwareTimer,
    debounce: Duration,
) {
    a.set_interrupt_enabled(Interrupt::EdgeLow, true);
    b.set_interrupt_enabled(Interrupt::EdgeLow, true);
    x.set_interrupt_enabled(Interrupt::EdgeLow, true);
    y.set_interrupt_enabled(Interrupt::EdgeLow, true);

    critical_section::with(|cs| {
        SHARED.borrow_ref_mut(cs).replace(IrqContext {
            a,
            b,
            x,
            y,
            timer,
            debounce,
        });
    });
}

/// Body of the `IO_IRQ_BANK0` handler.
pub fn on_gpio_interrupt() {
    critical_section::with(|cs| {
        let mut shared = SHARED.borrow_ref_mut(cs);
        let Some(ctx) = shared.as_mut() else {
            return;
        };
        let now = ctx.timer.now();
        let window = ctx.debounce;

        if ctx.a.interrupt_status(Interrupt::EdgeLow) {
            EDGES.push(Button::A, now, window);
            ctx.a.clear_interrupt(Interrupt::EdgeLow);
        }
        if ctx.b.interrupt_status(Interrupt::EdgeLow) {
            EDGES.push(Button::B, now, window);
            ctx.b.clear_interrupt(Interrupt::EdgeLow);
        }
        if ctx.x.interrupt_status(Interrupt::EdgeLow) {
            EDGES.push(Button::X, now, window);
            ctx.x.clear_interrupt(Interrupt::EdgeLow);
        }
        if ctx.y.interrupt_status(Interrupt::EdgeLow) {
            EDGES.push(Button::Y, now, window);
            ctx.y.clear_interrupt(Interrupt::EdgeLow);
        }
    });
}

/// Reads button levels from the shared pins. Buttons are active low.
pub struct SharedButtons;

impl ButtonPins for SharedButtons {
    fn is_pressed(&mut self, button: Button) -> bool {
        critical_section::with(|cs| {
            let mut shared = SHARED.borrow_ref_mut(cs);
            let Some(ctx) = shared.as_mut() else {
                return false;
            };
            let low = match button {
                Button::A => ctx.a.is_low(),
                Button::B => ctx.b.is_low(),
                Button::X => ctx.x.is_low(),
                Button::Y => ctx.y.is_low(),
            };
            low.unwrap_or(false)
        })
    }
}
