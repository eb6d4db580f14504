//! Reducer for the counter.

use crate::ui::mvi::Reducer;

use super::intent::CounterIntent;
use super::state::CounterState;

/// Saturating step reducer.
///
/// Pure function. Steps past either bound are absorbed as no-ops; the
/// post-change hook lives in [`BoundedCounter`](crate::counter::BoundedCounter).
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterIntent::Increment if state.can_increment() => {
                state.with_value(state.value() + 1)
            }
            CounterIntent::Decrement if state.can_decrement() => {
                state.with_value(state.value() - 1)
            }
            _ => state,
        }
    }
}
