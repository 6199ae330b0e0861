//! Messages posted to the UI context

use std::time::Duration;

use tokio::sync::oneshot;

use super::{Phase, ShellView};
use crate::{error::Result, shell::Preset};

/// One evaluation made by the tick worker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub phase: Phase,
    pub remaining: Duration,
    /// Countdown the evaluation belongs to
    pub generation: u64,
}

/// Commands the shell accepts from its controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    Start(Preset),
    Reset,
}

impl ShellCommand {
    pub fn name(&self) -> &'static str {
        match self {
            ShellCommand::Start(_) => "start",
            ShellCommand::Reset => "reset",
        }
    }
}

#[derive(Debug)]
pub enum UiEvent {
    Tick(TickReport),
    Command {
        command: ShellCommand,
        reply: oneshot::Sender<Result<ShellView>>,
    },
}
