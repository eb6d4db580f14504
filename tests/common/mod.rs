//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use counter_app::counter::{
    BoundedCounter, CounterBounds, CounterState, RenderNotifier,
};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared call counter for collaborator fakes.
#[derive(Clone, Default)]
pub struct Calls(Arc<AtomicUsize>);

impl Calls {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    pub fn record(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// Records every state the render layer was notified with.
#[derive(Clone, Default)]
pub struct RecordingNotifier(Arc<parking_lot::Mutex<Vec<CounterState>>>);

impl RecordingNotifier {
    pub fn seen(&self) -> Vec<i64> {
        self.0.lock().iter().map(CounterState::value).collect()
    }
}

impl RenderNotifier for RecordingNotifier {
    fn notify_changed(&self, state: &CounterState) {
        self.0.lock().push(*state);
    }
}

pub fn state(start: i64, min: i64, max: i64, jackpot: i64) -> CounterState {
    CounterState::new(start, CounterBounds::new(min, max).unwrap(), jackpot, 18).unwrap()
}

/// Counter over `[0, 22]` with jackpot 21, returning the celebration calls.
pub fn default_counter() -> (BoundedCounter, Calls) {
    counter(state(0, 0, 22, 21))
}

pub fn counter(state: CounterState) -> (BoundedCounter, Calls) {
    let calls = Calls::default();
    let celebrated = calls.clone();
    let counter = BoundedCounter::new(state, |_: &CounterState| {}, move || celebrated.record());
    (counter, calls)
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

pub fn ctrl_key(ch: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(ch),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}
