use std::sync::Arc;

use crate::celebration::ConfettiEffect;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ConfettiState {
    #[default]
    Idle,
    Popping {
        effect: Arc<ConfettiEffect>,
        frame: u16,
    },
}

impl UiState for ConfettiState {}

impl ConfettiState {
    pub fn is_popping(&self) -> bool {
        matches!(self, Self::Popping { .. })
    }
}
