use std::sync::mpsc;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::{mpsc as async_mpsc, watch};

use crate::celebration::confetti::ConfettiEffect;
use crate::celebration::error::CelebrationError;
use crate::config::CelebrationConfig;
use crate::counter::CelebrationTrigger;
use crate::shutdown::ShutdownHandle;
use crate::ui::events::AppEvent;

#[derive(Debug, Clone, Copy)]
struct CelebrationRequest {
    /// Last frame drawn when the jackpot was hit. Activation waits for a
    /// newer one so the new value is on screen before the confetti pops.
    after_frame: u64,
}

/// Deferred celebration task.
///
/// `trigger()` only enqueues. A tokio task loads the confetti effect on first
/// use, waits until the render loop has published a frame newer than the one
/// current at trigger time, then posts [`AppEvent::Celebrate`] to the UI loop.
pub struct CelebrationScheduler {
    requests: async_mpsc::UnboundedSender<CelebrationRequest>,
    frames: watch::Receiver<u64>,
}

impl CelebrationScheduler {
    pub fn spawn(
        runtime: &Handle,
        settings: CelebrationConfig,
        frames: watch::Receiver<u64>,
        events: mpsc::Sender<AppEvent>,
        shutdown: ShutdownHandle,
    ) -> Self {
        let (tx, rx) = async_mpsc::unbounded_channel();
        runtime.spawn(run(rx, settings, frames.clone(), events, shutdown));
        Self {
            requests: tx,
            frames,
        }
    }
}

impl CelebrationTrigger for CelebrationScheduler {
    fn trigger(&self) {
        let request = CelebrationRequest {
            after_frame: *self.frames.borrow(),
        };
        if self.requests.send(request).is_err() {
            tracing::warn!("celebration task is gone; skipping confetti");
        }
    }
}

async fn run(
    mut requests: async_mpsc::UnboundedReceiver<CelebrationRequest>,
    settings: CelebrationConfig,
    mut frames: watch::Receiver<u64>,
    events: mpsc::Sender<AppEvent>,
    shutdown: ShutdownHandle,
) {
    let mut effect: Option<Arc<ConfettiEffect>> = None;

    loop {
        let request = tokio::select! {
            _ = shutdown.wait() => break,
            request = requests.recv() => match request {
                Some(request) => request,
                None => break,
            },
        };

        let result = tokio::select! {
            _ = shutdown.wait() => break,
            result = activate(&mut effect, &settings, &mut frames, &events, request) => result,
        };
        if let Err(err) = result {
            tracing::warn!(error = %err, "celebration failed");
        }
    }

    tracing::debug!("celebration task stopped");
}

async fn activate(
    cache: &mut Option<Arc<ConfettiEffect>>,
    settings: &CelebrationConfig,
    frames: &mut watch::Receiver<u64>,
    events: &mpsc::Sender<AppEvent>,
    request: CelebrationRequest,
) -> Result<(), CelebrationError> {
    let effect = match cache {
        Some(effect) => Arc::clone(effect),
        None => {
            let loaded = Arc::new(ConfettiEffect::load(settings)?);
            tracing::debug!(particles = loaded.particles().len(), "confetti effect loaded");
            *cache = Some(Arc::clone(&loaded));
            loaded
        }
    };

    frames
        .wait_for(|frame| *frame > request.after_frame)
        .await
        .map_err(|_| CelebrationError::RenderLoopClosed)?;

    events
        .send(AppEvent::Celebrate(effect))
        .map_err(|_| CelebrationError::EventChannelClosed)?;
    tracing::info!(after_frame = request.after_frame, "celebration activated");
    Ok(())
}
