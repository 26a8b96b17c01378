//! Presentation hints for UI badges.
//!
//! Purely cosmetic; the engine commits only to level and state names.

use serde::Serialize;
use storytrust_core::models::{ConfidenceLevel, StoryState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    Amber,
    Blue,
    Emerald,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StateIcon {
    Warning,
    Refresh,
    Check,
    WarningRed,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelBadge {
    pub tone: Tone,
    pub label: &'static str,
}

pub fn level_badge(level: ConfidenceLevel) -> LevelBadge {
    match level {
        ConfidenceLevel::Low => LevelBadge {
            tone: Tone::Amber,
            label: "Limited verification",
        },
        ConfidenceLevel::Medium => LevelBadge {
            tone: Tone::Blue,
            label: "Moderate confidence",
        },
        ConfidenceLevel::High => LevelBadge {
            tone: Tone::Emerald,
            label: "Well-verified",
        },
    }
}

pub fn state_icon(state: StoryState) -> StateIcon {
    match state {
        StoryState::SingleSource => StateIcon::Warning,
        StoryState::Developing => StateIcon::Refresh,
        StoryState::Confirmed => StateIcon::Check,
        StoryState::Contradicted => StateIcon::WarningRed,
        StoryState::Resolved => StateIcon::Neutral,
    }
}
