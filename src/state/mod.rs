//! State management module
//!
//! The countdown engine, the clock it is evaluated against, the messages
//! posted to the UI context and the shell view it publishes.

pub mod app_state;
pub mod clock;
pub mod countdown;
pub mod events;
pub mod shell_view;

// Re-export main types
pub use app_state::AppState;
pub use clock::{Clock, ManualClock, SystemClock};
pub use countdown::{CountdownEngine, Phase, SharedEngine};
pub use events::{ShellCommand, TickReport, UiEvent};
pub use shell_view::{ShellView, WindowState};
