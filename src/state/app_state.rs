//! Handle shared by the control API

use std::{sync::Mutex, time::Instant};

use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{info, warn};

use super::{ShellCommand, ShellView, UiEvent};
use crate::{
    error::{Result, TimerError},
    shell::Preset,
};

/// Entry point for commands into the UI context, plus the latest shell view
#[derive(Debug)]
pub struct AppState {
    /// Queue into the UI context
    pub ui_tx: mpsc::Sender<UiEvent>,
    /// Latest view published by the UI context
    pub view_rx: watch::Receiver<ShellView>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Mutex<Option<String>>,
    pub last_action_time: Mutex<Option<DateTime<Utc>>>,
}

impl AppState {
    pub fn new(
        port: u16,
        host: String,
        ui_tx: mpsc::Sender<UiEvent>,
        view_rx: watch::Receiver<ShellView>,
    ) -> Self {
        Self {
            ui_tx,
            view_rx,
            start_time: Instant::now(),
            port,
            host,
            last_action: Mutex::new(None),
            last_action_time: Mutex::new(None),
        }
    }

    /// Post a command to the UI context and wait for it to be applied
    pub async fn send_command(&self, command: ShellCommand) -> Result<ShellView> {
        let (reply, reply_rx) = oneshot::channel();
        self.ui_tx
            .send(UiEvent::Command { command, reply })
            .await
            .map_err(|_| TimerError::UiUnavailable)?;

        let view = reply_rx.await.map_err(|_| TimerError::UiUnavailable)??;
        self.record_action(command.name());
        Ok(view)
    }

    /// Start a countdown from a preset length in minutes
    pub async fn start(&self, minutes: u32) -> Result<ShellView> {
        let preset = Preset::try_from(minutes)?;
        info!("Start requested for {}", preset.label());
        self.send_command(ShellCommand::Start(preset)).await
    }

    pub async fn reset(&self) -> Result<ShellView> {
        info!("Reset requested");
        self.send_command(ShellCommand::Reset).await
    }

    /// Latest view published by the UI context
    pub fn view(&self) -> ShellView {
        self.view_rx.borrow().clone()
    }

    fn record_action(&self, action: &str) {
        match self.last_action.lock() {
            Ok(mut last_action) => *last_action = Some(action.to_string()),
            Err(e) => warn!("Failed to record last action: {}", e),
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}
