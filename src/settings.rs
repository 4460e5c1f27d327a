//! Difficulty settings
//!
//! Read once when a round is set up. A zero means "not configured" and is
//! replaced by the game default.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_GAME_TIME, DEFAULT_MAX_BUBBLES};

/// Source of difficulty configuration for a round
pub trait DifficultySource {
    /// Population ceiling; 0 means default
    fn number_of_bubbles(&self) -> u32;
    /// Round length in seconds; 0 means default
    fn game_time(&self) -> u32;
}

/// Difficulty preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" | "medium" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Population ceiling for this preset
    pub fn max_bubbles(&self) -> u32 {
        match self {
            Difficulty::Easy => 8,
            Difficulty::Normal => DEFAULT_MAX_BUBBLES,
            Difficulty::Hard => 25,
        }
    }

    /// Round length for this preset
    pub fn game_time(&self) -> u32 {
        match self {
            Difficulty::Easy => 90,
            Difficulty::Normal => DEFAULT_GAME_TIME,
            Difficulty::Hard => 45,
        }
    }
}

/// Player-chosen round settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Maximum bubbles on screen (0 = default)
    pub number_of_bubbles: u32,
    /// Round length in seconds (0 = default)
    pub game_time: u32,
}

impl Settings {
    pub fn from_preset(preset: Difficulty) -> Self {
        Self {
            number_of_bubbles: preset.max_bubbles(),
            game_time: preset.game_time(),
        }
    }
}

impl DifficultySource for Settings {
    fn number_of_bubbles(&self) -> u32 {
        self.number_of_bubbles
    }

    fn game_time(&self) -> u32 {
        self.game_time
    }
}

/// Difficulty with defaults substituted for zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedDifficulty {
    pub max_bubbles: u32,
    pub game_time: u32,
}

/// Read a difficulty source once, applying defaults
pub fn resolve(source: &dyn DifficultySource) -> ResolvedDifficulty {
    let max_bubbles = match source.number_of_bubbles() {
        0 => DEFAULT_MAX_BUBBLES,
        n => n,
    };
    let game_time = match source.game_time() {
        0 => DEFAULT_GAME_TIME,
        t => t,
    };
    ResolvedDifficulty {
        max_bubbles,
        game_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_means_default() {
        let resolved = resolve(&Settings::default());
        assert_eq!(resolved.max_bubbles, 15);
        assert_eq!(resolved.game_time, 60);
    }

    #[test]
    fn test_explicit_values_kept() {
        let settings = Settings {
            number_of_bubbles: 9,
            game_time: 30,
        };
        assert_eq!(
            resolve(&settings),
            ResolvedDifficulty {
                max_bubbles: 9,
                game_time: 30
            }
        );
    }

    #[test]
    fn test_presets() {
        assert_eq!(Difficulty::parse("HARD"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::parse("medium"), Some(Difficulty::Normal));
        assert_eq!(Difficulty::parse("nightmare"), None);
        let easy = Settings::from_preset(Difficulty::Easy);
        assert_eq!(easy.number_of_bubbles, 8);
        assert_eq!(easy.game_time, 90);
        assert_eq!(Difficulty::default().as_str(), "Normal");
    }
}
