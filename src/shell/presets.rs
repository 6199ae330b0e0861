//! The fixed set of countdown durations offered by the shell

use serde::{Deserialize, Serialize};

use crate::error::TimerError;

/// One of the preset countdown buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Preset {
    Five,
    Ten,
    Fifteen,
    TwentyFive,
    FiftyFive,
}

/// Presets in the order the buttons are laid out
pub const PRESETS: &[Preset] = &[
    Preset::Five,
    Preset::Ten,
    Preset::Fifteen,
    Preset::TwentyFive,
    Preset::FiftyFive,
];

impl Preset {
    pub fn minutes(&self) -> u32 {
        match self {
            Preset::Five => 5,
            Preset::Ten => 10,
            Preset::Fifteen => 15,
            Preset::TwentyFive => 25,
            Preset::FiftyFive => 55,
        }
    }

    /// Button and menu caption
    pub fn label(&self) -> String {
        format!("{} mins", self.minutes())
    }
}

impl TryFrom<u32> for Preset {
    type Error = TimerError;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        PRESETS
            .iter()
            .copied()
            .find(|preset| preset.minutes() == minutes)
            .ok_or(TimerError::UnsupportedPreset(minutes))
    }
}

impl From<Preset> for u32 {
    fn from(preset: Preset) -> Self {
        preset.minutes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_round_trips_through_minutes() {
        for preset in PRESETS {
            assert_eq!(Preset::try_from(preset.minutes()).unwrap(), *preset);
        }
    }

    #[test]
    fn odd_durations_are_not_presets() {
        for minutes in [0, 1, 20, 30, 60] {
            assert!(matches!(
                Preset::try_from(minutes),
                Err(TimerError::UnsupportedPreset(m)) if m == minutes
            ));
        }
    }

    #[test]
    fn labels_match_buttons() {
        let labels: Vec<String> = PRESETS.iter().map(Preset::label).collect();
        assert_eq!(labels, ["5 mins", "10 mins", "15 mins", "25 mins", "55 mins"]);
    }
}
