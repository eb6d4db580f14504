use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CelebrationError {
    #[error("confetti effect has no particles")]
    EmptyEffect,

    #[error("render loop closed before the celebration could activate")]
    RenderLoopClosed,

    #[error("UI event channel closed")]
    EventChannelClosed,
}
