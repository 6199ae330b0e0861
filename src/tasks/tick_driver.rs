//! Periodic background task that evaluates the countdown

use std::{sync::Arc, time::Duration};

use tokio::{
    sync::mpsc,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::{debug, error, info, warn};

use crate::{
    error::{Result, TimerError},
    state::{Clock, Phase, SharedEngine, TickReport, UiEvent},
};

/// Fixed cadence of the tick loop
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Evaluate the engine once against the clock
pub fn evaluate_tick(engine: &SharedEngine, clock: &dyn Clock) -> Result<TickReport> {
    let mut engine = engine
        .lock()
        .map_err(|e| TimerError::StateLock(e.to_string()))?;

    let now = clock.now();
    let phase = engine.evaluate(now);
    Ok(TickReport {
        phase,
        remaining: engine.remaining(now),
        generation: engine.generation(),
    })
}

/// Background task that wakes every tick and posts the phase to the UI context.
///
/// Runs for the lifetime of the process; it only returns once the UI context
/// has gone away. Ticks missed while the host was asleep are not replayed.
pub async fn tick_driver_task(
    engine: SharedEngine,
    clock: Arc<dyn Clock>,
    ui_tx: mpsc::Sender<UiEvent>,
) {
    info!("Starting tick driver ({:?} interval)", TICK_INTERVAL);

    // First evaluation one full interval after spawn
    let mut ticker = interval_at(Instant::now() + TICK_INTERVAL, TICK_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        // Evaluate under the engine lock, released before posting
        let report = match evaluate_tick(&engine, clock.as_ref()) {
            Ok(report) => report,
            Err(e) => {
                error!("Failed to evaluate countdown: {}", e);
                continue;
            }
        };

        // Log transitions
        match report.phase {
            Phase::HalfTimeReached => info!(
                "Countdown {} reached half time, {}s remaining",
                report.generation,
                report.remaining.as_secs()
            ),
            Phase::Completed => info!("Countdown {} completed", report.generation),
            Phase::Running => debug!(
                "Countdown {} running, {}s remaining",
                report.generation,
                report.remaining.as_secs()
            ),
            Phase::Idle => {}
        }

        // Hand the report to the UI context
        if ui_tx.send(UiEvent::Tick(report)).await.is_err() {
            warn!("UI context closed, stopping tick driver");
            break;
        }
    }
}
