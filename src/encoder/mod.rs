//! Interrupt driven rotary encoder
//!
//! The encoder lines raise an edge interrupt on every level change. The
//! interrupt handler hands the sampled levels to [`RotaryEncoder::on_edge`],
//! which advances the [`QuadratureState`] and the wrapping position counter.
//! The main loop reads the position through
//! [`RotaryEncoder::snapshot_position`].
//!
//! Both sides touch the shared state only inside `critical_section::with`,
//! and each critical section covers a single copy or update.

mod quadrature;

use core::cell::{Cell, RefCell};

use critical_section::Mutex;

pub use quadrature::{PinState, QuadratureState, Step, TransitionFlags};

use crate::error::Error;

/// Set while a [`RotaryEncoder`] owns the quadrature interrupts
static CLAIMED: Mutex<Cell<bool>> = Mutex::new(Cell::new(false));

/// Small numeric display showing the selected index
///
/// Called from interrupt context, so implementations must not block.
pub trait NumericDisplay {
    fn show(&mut self, value: u8);
}

/// Anything the control loop can read a selector position from
pub trait PositionSource {
    /// Current position, already reduced modulo the source's range
    fn snapshot_position(&self) -> u8;
}

impl<T: PositionSource + ?Sized> PositionSource for &T {
    fn snapshot_position(&self) -> u8 {
        (**self).snapshot_position()
    }
}

/// Configuration for the rotary encoder
#[derive(Debug, Clone, Copy)]
pub struct EncoderConfig {
    /// Number of distinct positions before the counter wraps
    pub index_modulus: u8,
}

#[derive(Debug, Clone, Copy)]
struct EncoderState {
    quadrature: QuadratureState,
    position: u8,
}

/// Rotary quadrature decoder bound to the encoder's edge interrupts
///
/// Only one instance may be alive at a time. The interrupt vectors are
/// global, so construction claims them and fails with
/// [`Error::EncoderClaimed`] while another encoder exists. Dropping the
/// encoder releases the claim.
pub struct RotaryEncoder<D: NumericDisplay> {
    state: Mutex<Cell<EncoderState>>,
    display: Mutex<RefCell<D>>,
    index_modulus: u8,
}

impl<D: NumericDisplay> RotaryEncoder<D> {
    /// Claim the encoder interrupts and create the decoder
    ///
    /// `initial` must be sampled before the edge interrupts are enabled so
    /// the first edge is compared against the real resting state. The
    /// display immediately shows position zero.
    pub fn new(config: EncoderConfig, initial: PinState, display: D) -> Result<Self, Error> {
        if config.index_modulus == 0 {
            return Err(Error::ZeroModulus);
        }

        let already_claimed = critical_section::with(|cs| CLAIMED.borrow(cs).replace(true));
        if already_claimed {
            return Err(Error::EncoderClaimed);
        }

        let encoder = Self {
            state: Mutex::new(Cell::new(EncoderState {
                quadrature: QuadratureState::new(initial),
                position: 0,
            })),
            display: Mutex::new(RefCell::new(display)),
            index_modulus: config.index_modulus,
        };
        encoder.notify(0);

        Ok(encoder)
    }

    /// Edge interrupt entry point
    ///
    /// Call with the levels of both lines sampled inside the handler.
    pub fn on_edge(&self, current: PinState) {
        let changed = critical_section::with(|cs| {
            let cell = self.state.borrow(cs);
            let mut state = cell.get();
            let step = state.quadrature.advance(current);
            if let Some(step) = step {
                state.position = self.stepped(state.position, step);
            }
            cell.set(state);
            step.map(|_| state.position)
        });

        if let Some(position) = changed {
            self.notify(position);
        }
    }

    /// Number of positions before the counter wraps
    pub const fn index_modulus(&self) -> u8 {
        self.index_modulus
    }

    /// Run `f` with exclusive access to the display
    pub fn with_display<R>(&self, f: impl FnOnce(&mut D) -> R) -> R {
        critical_section::with(|cs| f(&mut *self.display.borrow(cs).borrow_mut()))
    }

    const fn stepped(&self, position: u8, step: Step) -> u8 {
        match step {
            Step::Clockwise => {
                if position + 1 >= self.index_modulus {
                    0
                } else {
                    position + 1
                }
            }
            Step::CounterClockwise => {
                if position == 0 {
                    self.index_modulus - 1
                } else {
                    position - 1
                }
            }
        }
    }

    fn notify(&self, position: u8) {
        let value = position % self.index_modulus;
        critical_section::with(|cs| self.display.borrow(cs).borrow_mut().show(value));
    }
}

impl<D: NumericDisplay> PositionSource for RotaryEncoder<D> {
    fn snapshot_position(&self) -> u8 {
        let position = critical_section::with(|cs| self.state.borrow(cs).get().position);
        position % self.index_modulus
    }
}

impl<D: NumericDisplay> Drop for RotaryEncoder<D> {
    fn drop(&mut self) {
        critical_section::with(|cs| CLAIMED.borrow(cs).set(false));
    }
}
