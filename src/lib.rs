//! Bounded counter widget for the terminal.
//!
//! The counter saturates at its bounds, marks the bounds visually and pops
//! confetti when it is stepped up onto the jackpot value.

pub mod celebration;
pub mod cli;
pub mod config;
pub mod counter;
pub mod i18n;
pub mod logging;
pub mod shutdown;
pub mod ui;
