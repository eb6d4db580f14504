//! Jackpot celebration: the confetti effect and the task that activates it
//! after the triggering value has been rendered.

mod confetti;
mod error;
mod scheduler;

pub use confetti::{ConfettiEffect, Particle};
pub use error::CelebrationError;
pub use scheduler::CelebrationScheduler;
