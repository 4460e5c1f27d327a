//! Round state and core simulation types
//!
//! Plain data only: a presentation layer reads these to draw the field.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::pool::BubblePool;
use crate::consts::*;
use crate::error::ConfigError;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Clock running, more than `ENDING_THRESHOLD` seconds left
    Running,
    /// Clock running, urgency cue has fired
    Ending,
    /// Clock reached zero
    Over,
    /// Host cancelled the round; nothing is scored or saved
    Aborted,
}

impl RoundPhase {
    /// True once no more ticks or taps will be processed
    pub fn is_finished(&self) -> bool {
        matches!(self, RoundPhase::Over | RoundPhase::Aborted)
    }
}

/// Notifications produced by a tick or a tap, in the order they happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    TimeUpdated { remaining_secs: u32 },
    ScoreUpdated { score: u64 },
    EndingSoon,
    RoundEnded { final_score: u64 },
}

/// Spawnable rectangle, excluding the HUD strip
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayArea {
    pub min: Vec2,
    pub max: Vec2,
}

impl PlayArea {
    pub fn new(min: Vec2, max: Vec2) -> Result<Self, ConfigError> {
        if !(min.is_finite() && max.is_finite()) {
            return Err(ConfigError::NonFiniteBounds { min, max });
        }
        let size = max - min;
        if !(size.x > 0.0 && size.y > 0.0) {
            return Err(ConfigError::EmptyPlayArea {
                width: size.x,
                height: size.y,
            });
        }
        Ok(Self { min, max })
    }

    /// Play area for a screen of the given size.
    ///
    /// The HUD box is `height / 12` tall and sits one box-height below the
    /// top edge; bubbles stay beneath it.
    pub fn from_screen(width: f32, height: f32) -> Result<Self, ConfigError> {
        let hud = height * HUD_FRACTION;
        let upper_wall = height - 2.0 * hud;
        Self::new(Vec2::ZERO, Vec2::new(width, upper_wall))
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Region a bubble center of `radius` may occupy, `None` if it does not fit
    pub fn inset(&self, radius: f32) -> Option<(Vec2, Vec2)> {
        let lo = self.min + Vec2::splat(radius);
        let hi = self.max - Vec2::splat(radius);
        (lo.x <= hi.x && lo.y <= hi.y).then_some((lo, hi))
    }

    /// Whether a whole circle lies inside the area
    pub fn contains_circle(&self, center: Vec2, radius: f32) -> bool {
        center.x - radius >= self.min.x
            && center.x + radius <= self.max.x
            && center.y - radius >= self.min.y
            && center.y + radius <= self.max.y
    }
}

/// Read-only inputs to the spawn scheduler
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnConfig {
    pub min_bubbles: u32,
    pub max_bubbles: u32,
    /// Seconds between spawn ticks
    pub spawn_interval: f32,
    /// Clearance beyond the bubble radius required at placement
    pub min_offset: f32,
    pub bubble_radius: f32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            min_bubbles: MIN_BUBBLES,
            max_bubbles: DEFAULT_MAX_BUBBLES,
            spawn_interval: SPAWN_INTERVAL,
            min_offset: MIN_BUBBLE_OFFSET,
            bubble_radius: BUBBLE_RADIUS,
        }
    }
}

impl SpawnConfig {
    /// Default config with a difficulty-specific population ceiling
    pub fn with_max_bubbles(max_bubbles: u32) -> Self {
        Self {
            max_bubbles,
            ..Self::default()
        }
    }

    /// Reject configs a round must not start with
    pub fn validate(&self, area: &PlayArea) -> Result<(), ConfigError> {
        // Fields are public, so the area may not have come through `PlayArea::new`
        PlayArea::new(area.min, area.max)?;
        if self.max_bubbles < self.min_bubbles {
            return Err(ConfigError::BubbleBounds {
                min: self.min_bubbles,
                max: self.max_bubbles,
            });
        }
        if !(self.spawn_interval > 0.0) {
            return Err(ConfigError::SpawnInterval(self.spawn_interval));
        }
        if self.min_offset < 0.0 {
            return Err(ConfigError::NegativeOffset(self.min_offset));
        }
        if area.inset(self.bubble_radius).is_none() {
            return Err(ConfigError::PlayAreaTooSmall {
                width: area.width(),
                height: area.height(),
                radius: self.bubble_radius,
            });
        }
        Ok(())
    }
}

/// Complete round state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundState {
    /// Total simulated seconds
    pub elapsed: f32,
    /// Whole seconds left on the countdown
    pub remaining_secs: u32,
    /// Time since the last spawn tick
    pub spawn_accumulator: f32,
    pub score: u64,
    pub phase: RoundPhase,
    /// Urgency cue already emitted
    pub ending_fired: bool,
    pub config: SpawnConfig,
    pub area: PlayArea,
    pub pool: BubblePool,
}

impl RoundState {
    /// Validated fresh round. `game_time` must already have defaults applied.
    pub fn new(config: SpawnConfig, area: PlayArea, game_time: u32) -> Result<Self, ConfigError> {
        if game_time == 0 {
            return Err(ConfigError::GameTime);
        }
        config.validate(&area)?;
        Ok(Self {
            elapsed: 0.0,
            remaining_secs: game_time,
            spawn_accumulator: 0.0,
            score: 0,
            phase: RoundPhase::Running,
            ending_fired: false,
            config,
            area,
            pool: BubblePool::new(),
        })
    }
}
