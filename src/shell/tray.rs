//! Headless tray shell
//!
//! Keeps the state a tray window would show (title, preset buttons, window
//! state, balloons, sound cues) and logs each presentation action.

use std::{path::PathBuf, time::Duration};

use tracing::info;

use super::Preset;
use crate::state::{
    shell_view::{preset_buttons, Balloon, Cue, ShellView, WindowState},
    Phase,
};

/// Window title while no countdown is running
pub const IDLE_TITLE: &str = "Pomodoro timer";

const BALLOON_TITLE: &str = "pomodoro timer";

/// Callbacks the UI context invokes on the shell.
///
/// All methods run on the UI context, never on the tick worker.
pub trait UiShell: Send + 'static {
    /// A preset was accepted and the countdown is running
    fn on_started(&mut self, preset: Preset);

    /// The user stopped the countdown
    fn on_reset(&mut self);

    /// Applied once per tick with the evaluated phase
    fn on_phase(&mut self, phase: Phase, remaining: Duration);

    fn view(&self) -> ShellView;
}

/// Sound files played for each cue
#[derive(Debug, Clone)]
pub struct SoundCues {
    pub bell: PathBuf,
    pub finish: PathBuf,
}

impl SoundCues {
    fn path(&self, cue: Cue) -> &PathBuf {
        match cue {
            Cue::Bell => &self.bell,
            Cue::Finish => &self.finish,
        }
    }
}

impl Default for SoundCues {
    fn default() -> Self {
        Self {
            bell: PathBuf::from("bell.wav"),
            finish: PathBuf::from("winfantasia.wav"),
        }
    }
}

#[derive(Debug)]
pub struct TrayShell {
    sounds: SoundCues,
    view: ShellView,
}

impl TrayShell {
    pub fn new(sounds: SoundCues) -> Self {
        Self {
            sounds,
            view: ShellView::idle(IDLE_TITLE),
        }
    }

    fn set_presets_enabled(&mut self, enabled: bool) {
        self.view.presets_enabled = enabled;
        self.view.presets = preset_buttons(enabled);
    }

    fn set_window(&mut self, window: WindowState) {
        if self.view.window != window {
            info!("Window state: {:?}", window);
            self.view.window = window;
        }
    }

    fn play(&mut self, cue: Cue) {
        info!("Playing {:?} cue from {}", cue, self.sounds.path(cue).display());
        self.view.last_cue = Some(cue);
    }

    fn show_balloon(&mut self, text: String) {
        info!("Tray balloon: {}", text);
        self.view.last_balloon = Some(Balloon {
            title: BALLOON_TITLE.to_string(),
            text,
        });
    }

    fn set_title(&mut self, title: String) {
        if self.view.title != title {
            tracing::debug!("Title: {}", title);
            self.view.title = title;
        }
    }
}

impl Default for TrayShell {
    fn default() -> Self {
        Self::new(SoundCues::default())
    }
}

impl UiShell for TrayShell {
    fn on_started(&mut self, preset: Preset) {
        self.set_presets_enabled(false);
        self.set_window(WindowState::Minimized);
        self.play(Cue::Bell);
        self.show_balloon(format!("timer set for {} minutes", preset.minutes()));
        self.view.phase = Phase::Running;
        self.view.remaining_seconds = u64::from(preset.minutes()) * 60;
        self.set_title(format_title(Duration::from_secs(self.view.remaining_seconds)));
    }

    fn on_reset(&mut self) {
        self.set_presets_enabled(true);
    }

    fn on_phase(&mut self, phase: Phase, remaining: Duration) {
        self.view.phase = phase;
        self.view.remaining_seconds = remaining.as_secs();

        match phase {
            Phase::Idle => self.set_title(IDLE_TITLE.to_string()),
            Phase::Completed => {
                self.set_presets_enabled(true);
                self.set_window(WindowState::Normal);
                self.play(Cue::Finish);
                self.show_balloon("TIME UP!".to_string());
                self.view.remaining_seconds = 0;
                self.set_title(IDLE_TITLE.to_string());
            }
            Phase::HalfTimeReached => {
                self.play(Cue::Bell);
                self.set_title(format_title(remaining));
            }
            Phase::Running => self.set_title(format_title(remaining)),
        }
    }

    fn view(&self) -> ShellView {
        self.view.clone()
    }
}

/// Title text for a running countdown: `"SS sec"` under a minute, else `"MM min"`
pub fn format_title(remaining: Duration) -> String {
    let secs = remaining.as_secs();
    if secs < 60 {
        format!("{:02} sec", secs)
    } else {
        format!("{:02} min", (secs / 60) % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_switches_to_seconds_in_last_minute() {
        assert_eq!(format_title(Duration::from_secs(55 * 60)), "55 min");
        assert_eq!(format_title(Duration::from_secs(24 * 60 + 59)), "24 min");
        assert_eq!(format_title(Duration::from_secs(60)), "01 min");
        assert_eq!(format_title(Duration::from_secs(59)), "59 sec");
        assert_eq!(format_title(Duration::from_millis(1500)), "01 sec");
        assert_eq!(format_title(Duration::ZERO), "00 sec");
    }

    #[test]
    fn starting_minimizes_and_locks_presets() {
        let mut shell = TrayShell::default();
        shell.on_started(Preset::TwentyFive);

        let view = shell.view();
        assert!(!view.presets_enabled);
        assert!(view.presets.iter().all(|button| !button.enabled));
        assert_eq!(view.window, WindowState::Minimized);
        assert_eq!(view.last_cue, Some(Cue::Bell));
        assert_eq!(view.title, "25 min");
        assert_eq!(
            view.last_balloon.map(|b| b.text).as_deref(),
            Some("timer set for 25 minutes")
        );
    }

    #[test]
    fn completion_restores_window_and_announces() {
        let mut shell = TrayShell::default();
        shell.on_started(Preset::Five);
        shell.on_phase(Phase::Completed, Duration::ZERO);

        let view = shell.view();
        assert!(view.presets_enabled);
        assert_eq!(view.window, WindowState::Normal);
        assert_eq!(view.last_cue, Some(Cue::Finish));
        assert_eq!(view.title, IDLE_TITLE);
        let balloon = view.last_balloon.unwrap();
        assert_eq!(balloon.title, "pomodoro timer");
        assert_eq!(balloon.text, "TIME UP!");
    }

    #[test]
    fn half_time_rings_bell_and_keeps_counting() {
        let mut shell = TrayShell::default();
        shell.on_started(Preset::Ten);
        shell.on_phase(Phase::Running, Duration::from_secs(400));
        assert_eq!(shell.view().title, "06 min");

        shell.on_phase(Phase::HalfTimeReached, Duration::from_secs(300));
        let view = shell.view();
        assert_eq!(view.last_cue, Some(Cue::Bell));
        assert_eq!(view.phase, Phase::HalfTimeReached);
        assert_eq!(view.title, "05 min");
    }

    #[test]
    fn reset_unlocks_presets_and_idle_tick_restores_title() {
        let mut shell = TrayShell::default();
        shell.on_started(Preset::Fifteen);
        shell.on_reset();
        assert!(shell.view().presets_enabled);

        shell.on_phase(Phase::Idle, Duration::ZERO);
        assert_eq!(shell.view().title, IDLE_TITLE);
    }
}
