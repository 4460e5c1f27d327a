//! Error taxonomy
//!
//! Empty pools, an expired clock and a full field are normal states and never
//! show up here.

use glam::Vec2;
use thiserror::Error;

/// Rejected round setup. A round is never started with one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("max bubbles {max} is below min bubbles {min}")]
    BubbleBounds { min: u32, max: u32 },
    #[error("play area {width}x{height} must have positive extent")]
    EmptyPlayArea { width: f32, height: f32 },
    #[error("play area bounds {min} to {max} must be finite")]
    NonFiniteBounds { min: Vec2, max: Vec2 },
    #[error("play area {width}x{height} cannot fit a bubble of radius {radius}")]
    PlayAreaTooSmall { width: f32, height: f32, radius: f32 },
    #[error("spawn interval must be positive, got {0}")]
    SpawnInterval(f32),
    #[error("minimum bubble offset must not be negative, got {0}")]
    NegativeOffset(f32),
    #[error("round length must be at least one second")]
    GameTime,
}

/// The placement solver ran out of attempts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlacementError {
    #[error("no free position after {attempts} attempts ({existing} bubbles on screen)")]
    Exhausted { attempts: u32, existing: usize },
}

/// Failure in the file backed score store
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("io error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed save data: {0}")]
    Json(#[from] serde_json::Error),
}
