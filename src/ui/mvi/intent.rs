/// Marker trait for intents: user actions (key presses) or system events
/// (ticks, celebration activation) fed to a reducer.
pub trait Intent: Send + 'static {}
