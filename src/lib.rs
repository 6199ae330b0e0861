//! Taskbar Timer - a Pomodoro countdown with a headless tray shell
//!
//! A single countdown engine is evaluated once a second by a background tick
//! driver; the resulting phase is marshalled to a single UI context that owns
//! the tray shell. A small HTTP API stands in for the preset buttons.

pub mod api;
pub mod config;
pub mod error;
pub mod shell;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use error::TimerError;
pub use state::{AppState, CountdownEngine, Phase};
pub use utils::signals::shutdown_signal;
