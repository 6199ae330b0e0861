//! The UI context: a single task that owns the shell
//!
//! Tick reports and shell commands arrive on one queue and are applied in
//! order, so every shell callback runs on this task and nowhere else.

use std::{sync::Arc, time::Duration};

use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info, warn};

use crate::{
    error::{Result, TimerError},
    shell::{Preset, UiShell},
    state::{Clock, Phase, SharedEngine, ShellCommand, ShellView, TickReport, UiEvent},
};

/// Depth of the queue into the UI context
pub const UI_QUEUE_DEPTH: usize = 32;

pub struct UiDispatcher<S: UiShell> {
    engine: SharedEngine,
    clock: Arc<dyn Clock>,
    shell: S,
    view_tx: watch::Sender<ShellView>,
    /// Countdown the shell is currently showing
    active_generation: Option<u64>,
}

impl<S: UiShell> UiDispatcher<S> {
    /// Create the dispatcher and a receiver for the views it publishes
    pub fn new(
        engine: SharedEngine,
        clock: Arc<dyn Clock>,
        shell: S,
    ) -> (Self, watch::Receiver<ShellView>) {
        let (view_tx, view_rx) = watch::channel(shell.view());
        let dispatcher = Self {
            engine,
            clock,
            shell,
            view_tx,
            active_generation: None,
        };
        (dispatcher, view_rx)
    }

    pub fn handle(&mut self, event: UiEvent) {
        match event {
            UiEvent::Tick(report) => self.apply_tick(report),
            UiEvent::Command { command, reply } => {
                let result = self.apply_command(command);
                if let Err(e) = &result {
                    warn!("Rejected {} command: {}", command.name(), e);
                }
                if reply.send(result).is_err() {
                    debug!("Caller stopped waiting for {} command", command.name());
                }
            }
        }
        self.view_tx.send_replace(self.shell.view());
    }

    fn apply_command(&mut self, command: ShellCommand) -> Result<ShellView> {
        match command {
            ShellCommand::Start(preset) => self.start(preset)?,
            ShellCommand::Reset => self.reset()?,
        }
        Ok(self.shell.view())
    }

    fn start(&mut self, preset: Preset) -> Result<()> {
        if self.active_generation.is_some() {
            return Err(TimerError::AlreadyRunning);
        }

        let generation = self
            .engine
            .lock()
            .map_err(|e| TimerError::StateLock(e.to_string()))?
            .start(preset.minutes(), self.clock.now())?;

        self.active_generation = Some(generation);
        self.shell.on_started(preset);
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        self.engine
            .lock()
            .map_err(|e| TimerError::StateLock(e.to_string()))?
            .reset();

        if let Some(generation) = self.active_generation.take() {
            info!("Countdown {} stopped by user", generation);
        }
        self.shell.on_reset();
        Ok(())
    }

    fn apply_tick(&mut self, report: TickReport) {
        match self.active_generation {
            // Nothing running: whatever the worker saw, the shell shows idle
            None => {
                if report.phase != Phase::Idle {
                    debug!(
                        "Dropping {} report for inactive countdown {}",
                        report.phase.as_str(),
                        report.generation
                    );
                }
                self.shell.on_phase(Phase::Idle, Duration::ZERO);
                return;
            }
            // Evaluated before the current countdown started
            Some(active) if active != report.generation => {
                debug!(
                    "Dropping {} report from countdown {} while {} is running",
                    report.phase.as_str(),
                    report.generation,
                    active
                );
                return;
            }
            Some(_) => {}
        }

        self.shell.on_phase(report.phase, report.remaining);

        if report.phase == Phase::Completed {
            match self.engine.lock() {
                Ok(mut engine) => engine.reset(),
                Err(e) => error!("Failed to reset completed countdown: {}", e),
            }
            self.active_generation = None;
        }
    }

    pub fn view(&self) -> ShellView {
        self.shell.view()
    }
}

/// Run the UI context until every sender has gone away
pub async fn ui_dispatch_task<S: UiShell>(
    mut dispatcher: UiDispatcher<S>,
    mut ui_rx: mpsc::Receiver<UiEvent>,
) {
    info!("Starting UI context");

    while let Some(event) = ui_rx.recv().await {
        dispatcher.handle(event);
    }

    info!("UI context stopped");
}
