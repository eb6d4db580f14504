use crate::celebration::CelebrationScheduler;
use crate::config::Config;
use crate::shutdown::ShutdownCoordinator;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;
use tokio::sync::watch;

/// Runs the counter until the user quits.
///
/// The UI loop stays on the calling thread. A small tokio runtime hosts the
/// celebration task, which is told about every completed frame through a
/// watch channel so it can activate only after the jackpot value is drawn.
pub fn run(config: Config) -> anyhow::Result<()> {
    let async_runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("celebration")
        .enable_all()
        .build()?;
    let shutdown = ShutdownCoordinator::new();
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate, shutdown.handle());
    let (frame_tx, frame_rx) = watch::channel(0u64);

    let mut app = if config.celebration.enabled {
        let scheduler = CelebrationScheduler::spawn(
            async_runtime.handle(),
            config.celebration.clone(),
            frame_rx,
            events.sender(),
            shutdown.handle(),
        );
        App::from_config(&config, scheduler)?
    } else {
        App::from_config(&config, || tracing::debug!("celebration disabled"))?
    };
    tracing::info!(
        value = app.counter().value(),
        min = app.counter().min(),
        max = app.counter().max(),
        jackpot = app.counter().jackpot(),
        "counter started"
    );

    let (mut terminal, guard) = setup_terminal()?;
    let mut frames_drawn = 0u64;

    loop {
        if app.take_redraw() {
            terminal.draw(|frame| draw(frame, &app))?;
            frames_drawn += 1;
            frame_tx.send_replace(frames_drawn);
        }
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => app.on_resize(),
            Ok(AppEvent::Celebrate(effect)) => app.on_celebrate(effect),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    drop(guard);
    async_runtime.shutdown_timeout(Duration::from_millis(200));
    tracing::info!(value = app.counter().value(), "counter stopped");
    Ok(())
}
