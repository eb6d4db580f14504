use crate::counter::hooks::{CelebrationTrigger, RenderNotifier};
use crate::counter::intent::CounterIntent;
use crate::counter::reducer::CounterReducer;
use crate::counter::state::CounterState;
use crate::ui::mvi::Reducer;

/// The counter widget core.
///
/// Wraps [`CounterReducer`] and runs [`BoundedCounter::on_value_changed`] at
/// the end of each mutator whenever the value actually moved.
pub struct BoundedCounter {
    state: CounterState,
    notifier: Box<dyn RenderNotifier>,
    celebration: Box<dyn CelebrationTrigger>,
}

impl BoundedCounter {
    pub fn new(
        state: CounterState,
        notifier: impl RenderNotifier + 'static,
        celebration: impl CelebrationTrigger + 'static,
    ) -> Self {
        Self {
            state,
            notifier: Box::new(notifier),
            celebration: Box::new(celebration),
        }
    }

    pub fn state(&self) -> &CounterState {
        &self.state
    }

    pub fn value(&self) -> i64 {
        self.state.value()
    }

    pub fn is_at_boundary(&self) -> bool {
        self.state.is_at_boundary()
    }

    pub fn increment(&mut self) {
        self.dispatch(CounterIntent::Increment);
    }

    pub fn decrement(&mut self) {
        self.dispatch(CounterIntent::Decrement);
    }

    pub fn dispatch(&mut self, intent: CounterIntent) {
        let old = self.state.value();
        self.state = CounterReducer::reduce(self.state, intent);
        let new = self.state.value();
        if old != new {
            self.on_value_changed(old, new);
        }
    }

    /// Post-mutation hook.
    ///
    /// Celebrates only when the jackpot is reached on the way up; walking back
    /// down through it stays quiet.
    pub fn on_value_changed(&self, old: i64, new: i64) {
        tracing::debug!(
            old,
            new,
            at_boundary = self.state.is_at_boundary(),
            "counter value changed"
        );
        self.notifier.notify_changed(&self.state);

        if new == self.state.jackpot() && new > old {
            tracing::info!(value = new, "jackpot reached");
            self.celebration.trigger();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::CounterBounds;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counter(start: i64, fired: Arc<AtomicUsize>) -> BoundedCounter {
        let state = CounterState::new(start, CounterBounds::new(0, 22).unwrap(), 21, 18).unwrap();
        BoundedCounter::new(state, |_: &CounterState| {}, move || {
            fired.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn step_onto_jackpot_fires() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut counter = counter(20, Arc::clone(&fired));
        counter.increment();
        assert_eq!(counter.value(), 21);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn step_down_onto_jackpot_is_quiet() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut counter = counter(22, Arc::clone(&fired));
        counter.decrement();
        assert_eq!(counter.value(), 21);
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn saturated_step_skips_hook() {
        let notified = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&notified);
        let mut counter = BoundedCounter::new(
            CounterState::default(),
            move |_: &CounterState| {
                seen.fetch_add(1, Ordering::SeqCst);
            },
            || {},
        );
        counter.decrement();
        assert_eq!(counter.value(), 0);
        assert_eq!(notified.load(Ordering::SeqCst), 0);
    }
}
