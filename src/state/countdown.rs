//! The single countdown and its per-tick phase evaluation

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Result, TimerError};

/// Engine handle shared by the tick driver and the UI context
pub type SharedEngine = Arc<Mutex<CountdownEngine>>;

/// Discrete result of evaluating the countdown against the current time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Running,
    HalfTimeReached,
    Completed,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::HalfTimeReached => "half_time_reached",
            Phase::Completed => "completed",
        }
    }
}

/// Holds the state of the one active countdown.
///
/// `half_time` and `end_time` are `None` when unset. `half_time` is taken
/// when it fires, so a countdown reports `HalfTimeReached` at most once.
#[derive(Debug, Clone, Default)]
pub struct CountdownEngine {
    is_running: bool,
    start_time: Option<DateTime<Utc>>,
    end_time: Option<DateTime<Utc>>,
    half_time: Option<DateTime<Utc>>,
    duration_minutes: u32,
    generation: u64,
}

impl CountdownEngine {
    /// Create an idle engine
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared(self) -> SharedEngine {
        Arc::new(Mutex::new(self))
    }

    /// Begin a countdown of `duration_minutes` at `now`.
    ///
    /// All three timestamps are reassigned, so nothing from a previous
    /// countdown survives. Starting while running replaces the old countdown.
    pub fn start(&mut self, duration_minutes: u32, now: DateTime<Utc>) -> Result<u64> {
        if duration_minutes == 0 {
            return Err(TimerError::InvalidDuration(duration_minutes));
        }

        let minutes = i64::from(duration_minutes);
        self.start_time = Some(now);
        self.end_time = Some(now + chrono::Duration::minutes(minutes));
        self.half_time = Some(now + chrono::Duration::minutes(minutes / 2));
        self.duration_minutes = duration_minutes;
        self.is_running = true;
        self.generation += 1;

        if let (Some(start_time), Some(end_time)) = (self.start_time, self.end_time) {
            info!(
                "Countdown {} started at {} for {} minutes, ends at {}",
                self.generation, start_time, duration_minutes, end_time
            );
        }
        Ok(self.generation)
    }

    /// Stop the countdown. Timestamps are left alone until the next start.
    pub fn reset(&mut self) {
        if self.is_running {
            debug!("Countdown {} reset", self.generation);
        }
        self.is_running = false;
    }

    /// Derive the phase for this tick, consuming the half-time trigger if it fires.
    pub fn evaluate(&mut self, now: DateTime<Utc>) -> Phase {
        if !self.is_running {
            return Phase::Idle;
        }

        if let Some(half_time) = self.half_time {
            if now >= half_time {
                self.half_time = None;
                return Phase::HalfTimeReached;
            }
        }

        match self.end_time {
            Some(end_time) if now >= end_time => Phase::Completed,
            _ => Phase::Running,
        }
    }

    /// Time left until the end of the countdown, never negative.
    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        match self.end_time {
            Some(end_time) if self.is_running => {
                (end_time - now).to_std().unwrap_or(Duration::ZERO)
            }
            _ => Duration::ZERO,
        }
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    /// Identifier of the most recent countdown, bumped by every start
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }
}
