//! Configuration and CLI argument handling

use std::path::PathBuf;

use clap::Parser;

use crate::shell::SoundCues;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "taskbar-timer")]
#[command(about = "A Pomodoro countdown timer with a headless tray shell")]
#[command(version)]
pub struct Config {
    /// Port for the local control API
    #[arg(short, long, default_value = "20560")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Sound played on start and at half time
    #[arg(long, default_value = "bell.wav")]
    pub bell_sound: PathBuf,

    /// Sound played when the countdown completes
    #[arg(long, default_value = "winfantasia.wav")]
    pub finish_sound: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    pub fn sound_cues(&self) -> SoundCues {
        SoundCues {
            bell: self.bell_sound.clone(),
            finish: self.finish_sound.clone(),
        }
    }
}
