//! Bounded counter feature module.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Value, bounds, jackpot and derived UI flags
//! - `intent.rs` - User actions (Increment, Decrement)
//! - `reducer.rs` - Saturating transitions (pure, no side effects)
//! - `component.rs` - `BoundedCounter`, which runs the post-change hook
//!   (render notification + jackpot celebration) around the reducer

mod bounds;
mod component;
mod hooks;
mod intent;
mod reducer;
mod state;

pub use bounds::{CounterBounds, CounterError};
pub use component::BoundedCounter;
pub use hooks::{CelebrationTrigger, RenderNotifier};
pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use state::{
    CounterState, CounterTone, DEFAULT_JACKPOT, DEFAULT_MAX, DEFAULT_MILESTONE, DEFAULT_MIN,
    DEFAULT_START,
};
