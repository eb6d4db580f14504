use std::sync::Arc;

use crate::celebration::ConfettiEffect;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ConfettiIntent {
    /// Celebration activated after the jackpot frame was drawn.
    Pop { effect: Arc<ConfettiEffect> },
    /// UI tick; advances the animation.
    Tick,
}

impl Intent for ConfettiIntent {}
