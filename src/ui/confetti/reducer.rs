use crate::ui::mvi::Reducer;

use super::intent::ConfettiIntent;
use super::state::ConfettiState;

pub struct ConfettiReducer;

impl Reducer for ConfettiReducer {
    type State = ConfettiState;
    type Intent = ConfettiIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // A second pop while animating restarts from the top.
            ConfettiIntent::Pop { effect } => ConfettiState::Popping { effect, frame: 0 },
            ConfettiIntent::Tick => match state {
                ConfettiState::Popping { effect, frame } => {
                    let next = frame.saturating_add(1);
                    if next >= effect.duration_ticks() {
                        ConfettiState::Idle
                    } else {
                        ConfettiState::Popping {
                            effect,
                            frame: next,
                        }
                    }
                }
                ConfettiState::Idle => ConfettiState::Idle,
            },
        }
    }
}
