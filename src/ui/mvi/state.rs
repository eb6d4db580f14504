/// Marker trait for UI state: cloneable snapshots, comparable so callers can
/// tell whether a dispatch changed anything.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
