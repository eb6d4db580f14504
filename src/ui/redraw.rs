use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::counter::{CounterState, RenderNotifier};

/// Dirty flag shared between the counter's render notifier and the draw loop.
#[derive(Debug, Clone, Default)]
pub struct RedrawFlag(Arc<AtomicBool>);

impl RedrawFlag {
    pub fn request(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Returns whether a redraw was pending and clears it.
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }
}

impl RenderNotifier for RedrawFlag {
    fn notify_changed(&self, _state: &CounterState) {
        self.request();
    }
}
