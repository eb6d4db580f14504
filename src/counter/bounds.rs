use thiserror::Error;

use crate::counter::state::{DEFAULT_MAX, DEFAULT_MIN};

/// Configuration rejected when a counter is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CounterError {
    #[error("min ({min}) must not exceed max ({max})")]
    InvertedBounds { min: i64, max: i64 },

    #[error("start value {start} is outside [{min}, {max}]")]
    StartOutOfRange { start: i64, min: i64, max: i64 },

    #[error("jackpot {jackpot} is outside [{min}, {max}] and could never be reached")]
    JackpotOutOfRange { jackpot: i64, min: i64, max: i64 },
}

/// Inclusive `[min, max]` range of a counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterBounds {
    min: i64,
    max: i64,
}

impl Default for CounterBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
        }
    }
}

impl CounterBounds {
    pub fn new(min: i64, max: i64) -> Result<Self, CounterError> {
        if min > max {
            return Err(CounterError::InvertedBounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    pub fn is_edge(&self, value: i64) -> bool {
        value == self.min || value == self.max
    }
}
