//! Button input: interrupt-safe edge capture and debouncing.
//!
//! Interrupt handlers never touch clock state. They record the falling edge in an
//! [`EdgeQueue`] and return. The render loop then asks an [`InputController`] for
//! debounced events once per iteration: an edge is only accepted once its debounce
//! window has passed *and* the pin still reads as pressed, otherwise it is
//! discarded as a bounce.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::time::{TimeInstant, has_elapsed};

/// The four buttons on the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Increment the field under the cursor.
    A,
    /// Enter edit mode, then advance the cursor.
    B,
    /// Not used.
    X,
    /// Decrement the field under the cursor.
    Y,
}

impl Button {
    pub const ALL: [Button; 4] = [Button::A, Button::B, Button::X, Button::Y];

    #[inline]
    fn index(self) -> usize {
        match self {
            Button::A => 0,
            Button::B => 1,
            Button::X => 2,
            Button::Y => 3,
        }
    }
}

/// Trait for abstracting button GPIO.
///
/// Implementations hide pull-ups and active-low wiring: `is_pressed` returns
/// true while the button is physically held down.
pub trait ButtonPins {
    fn is_pressed(&mut self, button: Button) -> bool;
}

/// A falling edge captured in interrupt context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Edge<I> {
    pub button: Button,
    pub at: I,
}

struct EdgeBuffer<I, const N: usize> {
    edges: Deque<Edge<I>, N>,
    last_edge: [Option<I>; 4],
    dropped: u32,
}

/// Bounded queue of button edges shared between interrupt handlers and the main loop.
///
/// Designed to live in a `static`. All access goes through a critical section,
/// so pushes from an interrupt never observe a half-updated queue.
///
/// # Type Parameters
/// * `I` - Time instant type used to stamp edges
/// * `N` - Maximum number of edges waiting to be debounced
pub struct EdgeQueue<I, const N: usize> {
    buffer: Mutex<RefCell<EdgeBuffer<I, N>>>,
}

impl<I: TimeInstant, const N: usize> EdgeQueue<I, N> {
    pub const fn new() -> Self {
        Self {
            buffer: Mutex::new(RefCell::new(EdgeBuffer {
                edges: Deque::new(),
                last_edge: [None; 4],
                dropped: 0,
            })),
        }
    }

    /// Records a falling edge. Call this from the GPIO interrupt handler.
    ///
    /// Edges arriving within `window` of the previous edge on the same button are
    /// part of the same contact bounce and are folded into it. Returns false if the
    /// edge was not queued, either because it was folded or because the queue is full.
    pub fn push(&self, button: Button, at: I, window: I::Duration) -> bool {
        critical_section::with(|cs| {
            let mut buffer = self.buffer.borrow_ref_mut(cs);
            let slot = button.index();

            let bouncing = buffer.last_edge[slot].is_some_and(|last| !has_elapsed(last, at, window));
            buffer.last_edge[slot] = Some(at);
            if bouncing {
                return false;
            }

            match buffer.edges.push_back(Edge { button, at }) {
                Ok(()) => true,
                Err(_) => {
                    buffer.dropped = buffer.dropped.wrapping_add(1);
                    false
                }
            }
        })
    }

    /// Removes the oldest edge if its debounce window has passed.
    ///
    /// Edges are stamped in arrival order, so if the oldest has not matured
    /// none of the others have either.
    pub fn pop_matured(&self, now: I, window: I::Duration) -> Option<Edge<I>> {
        critical_section::with(|cs| {
            let mut buffer = self.buffer.borrow_ref_mut(cs);
            let matured = buffer
                .edges
                .front()
                .is_some_and(|edge| has_elapsed(edge.at, now, window));
            if matured {
                buffer.edges.pop_front()
            } else {
                None
            }
        })
    }

    /// Number of edges waiting to be debounced.
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.buffer.borrow_ref(cs).edges.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns and resets the count of edges lost to a full queue.
    pub fn take_dropped(&self) -> u32 {
        critical_section::with(|cs| {
            let mut buffer = self.buffer.borrow_ref_mut(cs);
            core::mem::take(&mut buffer.dropped)
        })
    }
}

impl<I: TimeInstant, const N: usize> Default for EdgeQueue<I, N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Turns queued edges into debounced button presses.
pub struct InputController<'q, I: TimeInstant, const N: usize> {
    queue: &'q EdgeQueue<I, N>,
    debounce: I::Duration,
}

impl<'q, I: TimeInstant, const N: usize> InputController<'q, I, N> {
    pub fn new(queue: &'q EdgeQueue<I, N>, debounce: I::Duration) -> Self {
        Self { queue, debounce }
    }

    /// Returns the next debounced press, if any.
    ///
    /// Matured edges whose pin has been released are dropped silently and the
    /// search continues with the next one.
    pub fn next_press<P: ButtonPins>(&mut self, now: I, pins: &mut P) -> Option<Button> {
        let dropped = self.queue.take_dropped();
        if dropped > 0 {
            warn!("edge queue full, dropped {} edges", dropped);
        }

        while let Some(edge) = self.queue.pop_matured(now, self.debounce) {
            if pins.is_pressed(edge.button) {
                debug!("button {} pressed", edge.button);
                return Some(edge.button);
            }
            trace!("button {} bounced", edge.button);
        }
        None
    }
}
