//! Collaborator seams called by [`BoundedCounter`](super::BoundedCounter)
//! after a value change.

use super::state::CounterState;

/// Render layer notification. Called once per actual value change.
pub trait RenderNotifier: Send {
    fn notify_changed(&self, state: &CounterState);
}

/// Fire-and-forget celebration. Implementations must not block and must not
/// report failure back to the counter.
pub trait CelebrationTrigger: Send {
    fn trigger(&self);
}

impl<F> RenderNotifier for F
where
    F: Fn(&CounterState) + Send,
{
    fn notify_changed(&self, state: &CounterState) {
        self(state)
    }
}

impl<F> CelebrationTrigger for F
where
    F: Fn() + Send,
{
    fn trigger(&self) {
        self()
    }
}
