//! Bubble Pop - a timed tap-the-bubbles arcade round
//!
//! Core modules:
//! - `sim`: Deterministic bubble-field simulation (spawning, placement, motion, round clock)
//! - `round`: Round coordinator wiring the simulation to injected collaborators
//! - `highscores`: Player records and the score store interface
//! - `settings`: Difficulty configuration
//! - `persistence`: JSON file backed score store

pub mod error;
pub mod highscores;
pub mod persistence;
pub mod round;
pub mod settings;
pub mod sim;

pub use error::{ConfigError, PersistenceError, PlacementError};
pub use highscores::{MemoryScoreStore, Player, ScoreStore};
pub use round::{NullObserver, Round, RoundObserver};
pub use settings::{Difficulty, DifficultySource, Settings};

/// Game configuration constants
pub mod consts {
    /// Bubble radius (bubbles are 50x50 sprites)
    pub const BUBBLE_RADIUS: f32 = 25.0;
    /// Extra clearance between bubble edges, enforced only at placement time
    pub const MIN_BUBBLE_OFFSET: f32 = 20.0;
    /// Seconds between spawn ticks (one spawn tick = one second off the clock)
    pub const SPAWN_INTERVAL: f32 = 1.0;

    /// Population floor, fixed for every difficulty
    pub const MIN_BUBBLES: u32 = 4;
    /// Population ceiling used when settings report 0
    pub const DEFAULT_MAX_BUBBLES: u32 = 15;
    /// Round length in seconds used when settings report 0
    pub const DEFAULT_GAME_TIME: u32 = 60;
    /// The clock starts urging the player below this many seconds
    pub const ENDING_THRESHOLD: u32 = 10;

    /// Per-axis speed range (units/sec), sign drawn separately
    pub const MIN_AXIS_SPEED: u32 = 500;
    pub const MAX_AXIS_SPEED: u32 = 1000;

    /// Candidate draws before placement gives up on a bubble
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 256;

    /// HUD strip height as a fraction of screen height
    pub const HUD_FRACTION: f32 = 1.0 / 12.0;

    /// Player name recorded when the host never collected one
    pub const DEFAULT_PLAYER_NAME: &str = "Player";
}
