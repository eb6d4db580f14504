//! Intents for the counter.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterIntent {
    /// "+1" requested.
    Increment,
    /// "-1" requested.
    Decrement,
}

impl Intent for CounterIntent {}
