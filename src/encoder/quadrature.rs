//! Quadrature step recognizer
//!
//! Pure state machine behind [`RotaryEncoder`](super::RotaryEncoder). It is
//! fed one composite pin state per edge interrupt and reports a step only
//! when a whole detent (idle -> ... -> idle) was seen with a consistent
//! direction. Contact bounce that returns to idle early is dropped.

/// Composite state of both quadrature lines, `(A << 1) | B`
///
/// A bit is set when the line is active, i.e. pulled low against the
/// pull-up. `00` is the resting (detent) position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinState(u8);

impl PinState {
    /// Both lines released, encoder resting in a detent
    pub const IDLE: Self = Self(0b00);
    /// Only B active
    pub const B: Self = Self(0b01);
    /// Only A active
    pub const A: Self = Self(0b10);
    /// Both lines active, middle of a step
    pub const BOTH: Self = Self(0b11);

    /// Build a state from the two line levels
    #[allow(clippy::cast_lossless)]
    pub const fn from_levels(a_active: bool, b_active: bool) -> Self {
        Self(((a_active as u8) << 1) | b_active as u8)
    }

    /// Build a state from raw bits; anything above two bits is masked off
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0b11)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }
}

/// Direction of a recognized step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Clockwise,
    CounterClockwise,
}

/// Edges observed since the encoder left the idle state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransitionFlags(u8);

impl TransitionFlags {
    pub const FIRST_CW: u8 = 1 << 0;
    pub const FIRST_CCW: u8 = 1 << 1;
    pub const CLOSING_CW: u8 = 1 << 2;
    pub const CLOSING_CCW: u8 = 1 << 3;
    pub const MID_STEP: u8 = 1 << 4;

    const fn set(&mut self, flag: u8) {
        self.0 |= flag;
    }

    pub const fn contains(self, flag: u8) -> bool {
        self.0 & flag != 0
    }

    /// Direction this set of edges proves, if any
    ///
    /// A step needs its opening edge plus either the matching closing edge
    /// or the mid-step state, which tolerates one missed edge.
    pub const fn recognized(self) -> Option<Step> {
        let mid = self.contains(Self::MID_STEP);
        if self.contains(Self::FIRST_CW) && (self.contains(Self::CLOSING_CW) || mid) {
            Some(Step::Clockwise)
        } else if self.contains(Self::FIRST_CCW) && (self.contains(Self::CLOSING_CCW) || mid) {
            Some(Step::CounterClockwise)
        } else {
            None
        }
    }
}

/// Decoder state advanced from the edge interrupt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadratureState {
    previous: PinState,
    flags: TransitionFlags,
}

impl QuadratureState {
    /// Create a decoder seeded with the lines' state at startup
    pub const fn new(initial: PinState) -> Self {
        Self {
            previous: initial,
            flags: TransitionFlags(0),
        }
    }

    pub const fn previous(&self) -> PinState {
        self.previous
    }

    pub const fn flags(&self) -> TransitionFlags {
        self.flags
    }

    /// Feed the state read on an edge interrupt
    ///
    /// Returns the completed step when the lines come back to idle with a
    /// valid edge history. A repeated state is ignored.
    pub fn advance(&mut self, current: PinState) -> Option<Step> {
        if current == self.previous {
            return None;
        }

        let mut step = None;

        if self.previous == PinState::IDLE {
            match current {
                PinState::B => self.flags.set(TransitionFlags::FIRST_CW),
                PinState::A => self.flags.set(TransitionFlags::FIRST_CCW),
                _ => {}
            }
        }

        if current == PinState::BOTH {
            self.flags.set(TransitionFlags::MID_STEP);
        } else if current == PinState::IDLE {
            match self.previous {
                PinState::A => self.flags.set(TransitionFlags::CLOSING_CW),
                PinState::B => self.flags.set(TransitionFlags::CLOSING_CCW),
                _ => {}
            }
            step = self.flags.recognized();
            self.flags = TransitionFlags::default();
        }

        self.previous = current;
        step
    }
}
