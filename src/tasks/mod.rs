//! Background tasks module
//!
//! The tick worker and the UI context it reports to.

pub mod tick_driver;
pub mod ui_dispatch;

// Re-export main functions
pub use tick_driver::{evaluate_tick, tick_driver_task, TICK_INTERVAL};
pub use ui_dispatch::{ui_dispatch_task, UiDispatcher, UI_QUEUE_DEPTH};
