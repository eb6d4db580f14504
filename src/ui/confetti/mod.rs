//! Confetti overlay feature module.
//!
//! - `state.rs` - `Idle` or `Popping` with the current animation frame
//! - `intent.rs` - `Pop` (celebration activated) and `Tick`
//! - `reducer.rs` - Transitions; the overlay returns to `Idle` by itself once
//!   the animation has run, so the next jackpot can pop it again
//! - `overlay.rs` - Widget drawing one frame of particles

mod intent;
mod overlay;
mod reducer;
mod state;

pub use intent::ConfettiIntent;
pub use overlay::ConfettiOverlay;
pub use reducer::ConfettiReducer;
pub use state::ConfettiState;
