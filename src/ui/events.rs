use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::celebration::ConfettiEffect;
use crate::shutdown::ShutdownHandle;

#[derive(Debug)]
pub enum AppEvent {
    Input(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// Celebration activated; the jackpot value has already been drawn.
    Celebrate(Arc<ConfettiEffect>),
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration, shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        let spawned = thread::Builder::new()
            .name("input".to_string())
            .spawn(move || input_loop(tick_rate, shutdown, event_tx));
        if let Err(err) = spawned {
            tracing::error!(error = %err, "failed to spawn input thread");
        }

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}

fn input_loop(tick_rate: Duration, shutdown: ShutdownHandle, event_tx: mpsc::Sender<AppEvent>) {
    let mut last_tick = Instant::now();
    loop {
        if shutdown.is_shutting_down() {
            break;
        }

        // Short poll timeout so the shutdown flag is checked frequently
        let timeout = tick_rate
            .saturating_sub(last_tick.elapsed())
            .min(Duration::from_millis(50));

        match event::poll(timeout) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if event_tx.send(AppEvent::Input(key)).is_err() {
                        break;
                    }
                }
                Ok(Event::Resize(cols, rows)) => {
                    let _ = event_tx.send(AppEvent::Resize(cols, rows));
                }
                Ok(_) => {}
                Err(err) => {
                    tracing::error!(error = %err, "terminal read failed");
                    break;
                }
            },
            Ok(false) => {}
            Err(err) => {
                tracing::error!(error = %err, "terminal poll failed");
                break;
            }
        }

        if last_tick.elapsed() >= tick_rate {
            if event_tx.send(AppEvent::Tick).is_err() {
                break;
            }
            last_tick = Instant::now();
        }
    }
    tracing::debug!("input thread stopped");
}
