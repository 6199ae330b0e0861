//! Snapshot of what the tray shell is currently showing

use serde::{Deserialize, Serialize};

use crate::{shell::PRESETS, state::Phase};

/// Whether the window is on screen or tucked into the tray
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowState {
    Normal,
    Minimized,
}

/// Sound played by the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cue {
    Bell,
    Finish,
}

/// Tray notification balloon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balloon {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetButton {
    pub minutes: u32,
    pub label: String,
    pub enabled: bool,
}

/// Observable shell state, published after every UI event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellView {
    pub title: String,
    pub phase: Phase,
    pub remaining_seconds: u64,
    pub presets_enabled: bool,
    pub window: WindowState,
    pub last_balloon: Option<Balloon>,
    pub last_cue: Option<Cue>,
    pub presets: Vec<PresetButton>,
}

impl ShellView {
    /// The view of a freshly opened, idle window
    pub fn idle(title: &str) -> Self {
        Self {
            title: title.to_string(),
            phase: Phase::Idle,
            remaining_seconds: 0,
            presets_enabled: true,
            window: WindowState::Normal,
            last_balloon: None,
            last_cue: None,
            presets: preset_buttons(true),
        }
    }
}

pub fn preset_buttons(enabled: bool) -> Vec<PresetButton> {
    PRESETS
        .iter()
        .map(|preset| PresetButton {
            minutes: preset.minutes(),
            label: preset.label(),
            enabled,
        })
        .collect()
}
