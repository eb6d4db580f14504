use crate::celebration::ConfettiEffect;
use crate::config::Config;
use crate::counter::{BoundedCounter, CelebrationTrigger, CounterError, CounterState};
use crate::i18n::Localizer;
use crate::ui::confetti::{ConfettiIntent, ConfettiReducer, ConfettiState};
use crate::ui::mvi::Reducer;
use crate::ui::redraw::RedrawFlag;
use std::sync::Arc;

/// The two on-screen buttons.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Control {
    Decrement,
    Increment,
}

impl Control {
    pub fn label(self) -> &'static str {
        match self {
            Control::Decrement => "-1",
            Control::Increment => "+1",
        }
    }

    fn other(self) -> Self {
        match self {
            Control::Decrement => Control::Increment,
            Control::Increment => Control::Decrement,
        }
    }
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Control,
    title: String,
    counter: BoundedCounter,
    /// Confetti overlay state (MVI pattern).
    confetti: ConfettiState,
    redraw: RedrawFlag,
}

impl App {
    pub fn new(
        state: CounterState,
        title: impl Into<String>,
        celebration: impl CelebrationTrigger + 'static,
    ) -> Self {
        let redraw = RedrawFlag::default();
        redraw.request();
        Self {
            should_quit: false,
            focus: Control::Increment,
            title: title.into(),
            counter: BoundedCounter::new(state, redraw.clone(), celebration),
            confetti: ConfettiState::default(),
            redraw,
        }
    }

    /// Factory used by the runtime: builds the counter from config and
    /// resolves the title (explicit `ui.title` wins over the localized label).
    pub fn from_config(
        config: &Config,
        celebration: impl CelebrationTrigger + 'static,
    ) -> Result<Self, CounterError> {
        let state = config.counter.initial_state()?;
        let title = if config.ui.title.trim().is_empty() {
            Localizer::new(&config.ui.locale).title().to_string()
        } else {
            config.ui.title.clone()
        };
        Ok(Self::new(state, title, celebration))
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn counter(&self) -> &CounterState {
        self.counter.state()
    }

    pub fn focus(&self) -> Control {
        self.focus
    }

    pub fn increment(&mut self) {
        self.counter.increment();
    }

    pub fn decrement(&mut self) {
        self.counter.decrement();
    }

    /// Whether `control` is enabled for the current value.
    pub fn is_enabled(&self, control: Control) -> bool {
        match control {
            Control::Decrement => self.counter.state().can_decrement(),
            Control::Increment => self.counter.state().can_increment(),
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.other();
        self.redraw.request();
    }

    /// Press the focused button. Disabled buttons ignore the press.
    pub fn press_focused(&mut self) {
        if !self.is_enabled(self.focus) {
            return;
        }
        match self.focus {
            Control::Decrement => self.decrement(),
            Control::Increment => self.increment(),
        }
    }

    pub fn confetti(&self) -> &ConfettiState {
        &self.confetti
    }

    pub fn on_celebrate(&mut self, effect: Arc<ConfettiEffect>) {
        self.dispatch_confetti(ConfettiIntent::Pop { effect });
        self.redraw.request();
    }

    pub fn on_tick(&mut self) {
        if self.confetti.is_popping() {
            self.dispatch_confetti(ConfettiIntent::Tick);
            self.redraw.request();
        }
    }

    pub fn on_resize(&mut self) {
        self.redraw.request();
    }

    /// Returns whether the screen needs drawing and clears the flag.
    pub fn take_redraw(&mut self) -> bool {
        self.redraw.take()
    }

    fn dispatch_confetti(&mut self, intent: ConfettiIntent) {
        dispatch_mvi!(self, confetti, ConfettiReducer, intent);
    }
}
