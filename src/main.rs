//! Taskbar Timer - a Pomodoro countdown with a headless tray shell
//!
//! This is the main entry point for the taskbar-timer application.

use std::sync::Arc;

use tokio::{net::TcpListener, sync::mpsc};
use tracing::info;

use taskbar_timer::{
    api::create_router,
    config::Config,
    shell::{TrayShell, PRESETS},
    state::{AppState, Clock, CountdownEngine, SystemClock},
    tasks::{tick_driver_task, ui_dispatch_task, UiDispatcher, UI_QUEUE_DEPTH},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("taskbar_timer={},tower_http=info", config.log_level()))
        .init();

    info!("Starting taskbar-timer v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: host={}, port={}, bell={}, finish={}",
        config.host,
        config.port,
        config.bell_sound.display(),
        config.finish_sound.display()
    );

    // Create the single countdown engine and the clock it is evaluated against
    let engine = CountdownEngine::new().shared();
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let (ui_tx, ui_rx) = mpsc::channel(UI_QUEUE_DEPTH);

    // The UI context owns the shell; everything else talks to it through ui_tx
    let (dispatcher, view_rx) = UiDispatcher::new(
        Arc::clone(&engine),
        Arc::clone(&clock),
        TrayShell::new(config.sound_cues()),
    );
    tokio::spawn(ui_dispatch_task(dispatcher, ui_rx));

    // Start the tick driver background task
    tokio::spawn(tick_driver_task(engine, clock, ui_tx.clone()));

    // Create HTTP router with all endpoints
    let state = Arc::new(AppState::new(config.port, config.host.clone(), ui_tx, view_rx));
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Control API running on http://{}", addr);
    for preset in PRESETS {
        info!("  POST /start/{:<2}  - {}", preset.minutes(), preset.label());
    }
    info!("  POST /reset     - Stop the countdown");
    info!("  GET  /status    - Current title, phase and remaining time");
    info!("  GET  /health    - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        result = shutdown_signal() => {
            result?;
            info!("Shutdown signal received");
        }
    }

    info!("Timer shutdown complete");
    Ok(())
}
