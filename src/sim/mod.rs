//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only, behind `RandomSource`
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod motion;
pub mod placement;
pub mod pool;
pub mod rng;
pub mod spawn;
pub mod state;
pub mod tick;

pub use motion::advance;
pub use placement::find_position;
pub use pool::{Bubble, BubbleColor, BubblePool};
pub use rng::{RandomSource, SimRng};
pub use spawn::{SpawnReport, spawn_tick};
pub use state::{PlayArea, RoundEvent, RoundPhase, RoundState, SpawnConfig};
pub use tick::{abort, pop_at, pop_bubble, tick};
