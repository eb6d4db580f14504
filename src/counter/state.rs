//! Counter state (MVI model).

use crate::counter::bounds::{CounterBounds, CounterError};
use crate::ui::mvi::UiState;

pub const DEFAULT_START: i64 = 0;
pub const DEFAULT_MIN: i64 = 0;
pub const DEFAULT_MAX: i64 = 22;
pub const DEFAULT_JACKPOT: i64 = 21;
pub const DEFAULT_MILESTONE: i64 = 18;

/// Presentational tone of the displayed number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterTone {
    Normal,
    /// Value equals the configured milestone.
    Milestone,
    /// Value equals the jackpot.
    Jackpot,
    /// Value sits on `min` or `max`.
    Limit,
}

/// Snapshot of a bounded counter.
///
/// The value always lies within `bounds`; the only way to move it is through
/// [`CounterReducer`](crate::counter::CounterReducer), which saturates at the
/// edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterState {
    value: i64,
    bounds: CounterBounds,
    jackpot: i64,
    milestone: i64,
}

impl UiState for CounterState {}

impl Default for CounterState {
    fn default() -> Self {
        Self {
            value: DEFAULT_START,
            bounds: CounterBounds::default(),
            jackpot: DEFAULT_JACKPOT,
            milestone: DEFAULT_MILESTONE,
        }
    }
}

impl CounterState {
    pub fn new(
        start: i64,
        bounds: CounterBounds,
        jackpot: i64,
        milestone: i64,
    ) -> Result<Self, CounterError> {
        if !bounds.contains(start) {
            return Err(CounterError::StartOutOfRange {
                start,
                min: bounds.min(),
                max: bounds.max(),
            });
        }
        if !bounds.contains(jackpot) {
            return Err(CounterError::JackpotOutOfRange {
                jackpot,
                min: bounds.min(),
                max: bounds.max(),
            });
        }
        Ok(Self {
            value: start,
            bounds,
            jackpot,
            milestone,
        })
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn bounds(&self) -> CounterBounds {
        self.bounds
    }

    pub fn min(&self) -> i64 {
        self.bounds.min()
    }

    pub fn max(&self) -> i64 {
        self.bounds.max()
    }

    pub fn jackpot(&self) -> i64 {
        self.jackpot
    }

    pub fn milestone(&self) -> i64 {
        self.milestone
    }

    pub fn is_at_boundary(&self) -> bool {
        self.bounds.is_edge(self.value)
    }

    /// Whether the `+1` control should be enabled.
    pub fn can_increment(&self) -> bool {
        self.value < self.bounds.max()
    }

    /// Whether the `-1` control should be enabled.
    pub fn can_decrement(&self) -> bool {
        self.value > self.bounds.min()
    }

    pub fn is_jackpot(&self) -> bool {
        self.value == self.jackpot
    }

    /// Jackpot wins over the limit marker so the celebration color shows even
    /// when the jackpot sits on a bound.
    pub fn tone(&self) -> CounterTone {
        if self.is_jackpot() {
            CounterTone::Jackpot
        } else if self.value == self.milestone {
            CounterTone::Milestone
        } else if self.is_at_boundary() {
            CounterTone::Limit
        } else {
            CounterTone::Normal
        }
    }

    pub(super) fn with_value(self, value: i64) -> Self {
        debug_assert!(self.bounds.contains(value));
        Self { value, ..self }
    }
}
