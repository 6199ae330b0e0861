//! Tray shell module
//!
//! The presentation side of the timer: preset buttons and the headless tray
//! shell that the UI context drives.

pub mod presets;
pub mod tray;

// Re-export main types
pub use presets::{Preset, PRESETS};
pub use tray::{format_title, SoundCues, TrayShell, UiShell, IDLE_TITLE};
