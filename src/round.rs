//! Round coordinator
//!
//! Owns one round's simulation state and RNG together with the collaborators
//! injected by the host: a score store and an observer for presentation
//! updates. Difficulty is read once, at construction.
//!
//! `Round` has no interior mutability. A host that receives taps on another
//! thread keeps it behind a `Mutex` and takes the same lock for `step`.

use glam::Vec2;

use crate::consts::DEFAULT_PLAYER_NAME;
use crate::error::ConfigError;
use crate::highscores::{ScoreStore, record_round};
use crate::settings::{DifficultySource, resolve};
use crate::sim::{
    self, PlayArea, RandomSource, RoundEvent, RoundPhase, RoundState, SimRng, SpawnConfig,
};

/// Notification sink for presentation layers. All methods default to no-ops.
pub trait RoundObserver {
    fn on_time_updated(&mut self, _remaining_secs: u32) {}
    fn on_score_updated(&mut self, _score: u64) {}
    fn on_ending_soon(&mut self) {}
    fn on_round_ended(&mut self, _final_score: u64) {}
}

/// Observer that ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl RoundObserver for NullObserver {}

/// One timed play session
pub struct Round<S: ScoreStore, O: RoundObserver, R: RandomSource = SimRng> {
    state: RoundState,
    rng: R,
    store: S,
    observer: O,
    player_name: String,
    highscore: u64,
    events: Vec<RoundEvent>,
}

impl<S: ScoreStore, O: RoundObserver, R: RandomSource> Round<S, O, R> {
    /// Set up a round. Nothing is spawned until the first spawn interval.
    pub fn new(
        area: PlayArea,
        difficulty: &dyn DifficultySource,
        store: S,
        observer: O,
        rng: R,
    ) -> Result<Self, ConfigError> {
        let resolved = resolve(difficulty);
        let config = SpawnConfig::with_max_bubbles(resolved.max_bubbles);
        Self::with_config(config, area, resolved.game_time, store, observer, rng)
    }

    /// Set up a round from an explicit spawn config. `game_time` is taken
    /// as-is; zero is rejected rather than defaulted.
    pub fn with_config(
        config: SpawnConfig,
        area: PlayArea,
        game_time: u32,
        store: S,
        observer: O,
        rng: R,
    ) -> Result<Self, ConfigError> {
        let state = RoundState::new(config, area, game_time)?;
        let highscore = store.highscore();
        log::info!(
            "round setup: {}s, {}..={} bubbles, area {}x{}, best {}",
            game_time,
            config.min_bubbles,
            config.max_bubbles,
            area.width(),
            area.height(),
            highscore
        );
        Ok(Self {
            state,
            rng,
            store,
            observer,
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            highscore,
            events: Vec::new(),
        })
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn phase(&self) -> RoundPhase {
        self.state.phase
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    /// High score as of round setup, for the HUD
    pub fn highscore(&self) -> u64 {
        self.highscore
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Name recorded with the score when the round ends
    pub fn set_player_name(&mut self, name: impl Into<String>) {
        self.player_name = name.into();
    }

    /// Advance one frame
    pub fn step(&mut self, dt: f32) {
        sim::tick(&mut self.state, &mut self.rng, dt, &mut self.events);
        self.dispatch();
    }

    /// Tap at a play-area point. Returns the points scored, if a bubble was hit.
    pub fn tap_at(&mut self, point: Vec2) -> Option<u32> {
        let points = sim::pop_at(&mut self.state, point, &mut self.events);
        self.dispatch();
        points
    }

    /// Tap a specific bubble
    pub fn tap(&mut self, bubble_id: u32) -> Option<u32> {
        let points = sim::pop_bubble(&mut self.state, bubble_id, &mut self.events);
        self.dispatch();
        points
    }

    /// Cancel the round without scoring it
    pub fn abort(&mut self) {
        sim::abort(&mut self.state);
    }

    /// Hand back the collaborators
    pub fn into_parts(self) -> (RoundState, S, O) {
        (self.state, self.store, self.observer)
    }

    fn dispatch(&mut self) {
        for event in self.events.drain(..) {
            match event {
                RoundEvent::TimeUpdated { remaining_secs } => {
                    self.observer.on_time_updated(remaining_secs)
                }
                RoundEvent::ScoreUpdated { score } => self.observer.on_score_updated(score),
                RoundEvent::EndingSoon => self.observer.on_ending_soon(),
                RoundEvent::RoundEnded { final_score } => {
                    if record_round(&mut self.store, &self.player_name, final_score) {
                        log::info!("new high score {final_score} by {}", self.player_name);
                    }
                    self.observer.on_round_ended(final_score);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::highscores::{MemoryScoreStore, Player};
    use crate::settings::Settings;
    use crate::sim::{Bubble, BubbleColor};

    const DT: f32 = 1.0 / 64.0;

    #[derive(Debug, Default)]
    struct Recorder {
        times: Vec<u32>,
        scores: Vec<u64>,
        ending: u32,
        ended: Vec<u64>,
    }

    impl RoundObserver for Recorder {
        fn on_time_updated(&mut self, remaining_secs: u32) {
            self.times.push(remaining_secs);
        }
        fn on_score_updated(&mut self, score: u64) {
            self.scores.push(score);
        }
        fn on_ending_soon(&mut self) {
            self.ending += 1;
        }
        fn on_round_ended(&mut self, final_score: u64) {
            self.ended.push(final_score);
        }
    }

    fn area() -> PlayArea {
        PlayArea::from_screen(375.0, 667.0).unwrap()
    }

    fn round(settings: Settings, store: MemoryScoreStore) -> Round<MemoryScoreStore, Recorder> {
        Round::new(area(), &settings, store, Recorder::default(), SimRng::new(42)).unwrap()
    }

    fn run_to_end<S: ScoreStore, O: RoundObserver>(round: &mut Round<S, O>) {
        while !round.phase().is_finished() {
            round.step(DT);
        }
    }

    #[test]
    fn test_zero_game_time_uses_default() {
        let round = round(Settings::default(), MemoryScoreStore::new());
        assert_eq!(round.state().remaining_secs, 60);
        assert_eq!(round.state().config.max_bubbles, 15);
    }

    #[test]
    fn test_rejects_bad_bounds() {
        let settings = Settings {
            number_of_bubbles: 2,
            game_time: 30,
        };
        let result = Round::new(
            area(),
            &settings,
            MemoryScoreStore::new(),
            NullObserver,
            SimRng::new(1),
        );
        assert!(matches!(
            result,
            Err(ConfigError::BubbleBounds { min: 4, max: 2 })
        ));
    }

    #[test]
    fn test_explicit_config_rejects_zero_game_time() {
        let result = Round::with_config(
            SpawnConfig::default(),
            area(),
            0,
            MemoryScoreStore::new(),
            NullObserver,
            SimRng::new(1),
        );
        assert!(matches!(result, Err(ConfigError::GameTime)));
    }

    #[test]
    fn test_full_round_notifies_and_records() {
        let mut store = MemoryScoreStore::new();
        store.highscore = 3;
        let settings = Settings {
            number_of_bubbles: 12,
            game_time: 12,
        };
        let mut round = round(settings, store);
        round.set_player_name("Ana");

        let mut popped = 0u64;
        loop {
            round.step(DT);
            if round.phase().is_finished() {
                break;
            }
            let first = round.state().pool.bubbles().first().map(|b| b.id);
            if let Some(id) = first {
                popped += u64::from(round.tap(id).unwrap());
            }
        }

        let (state, store, observer) = round.into_parts();
        assert_eq!(state.phase, RoundPhase::Over);
        assert_eq!(state.score, popped);
        assert_eq!(observer.times, (0..12).rev().collect::<Vec<_>>());
        assert_eq!(observer.ending, 1);
        assert_eq!(observer.ended, vec![popped]);
        assert_eq!(observer.scores.last().copied(), Some(popped));
        assert_eq!(store.players, vec![Player::new("Ana", popped)]);
        assert_eq!(store.highscore, popped.max(3));
    }

    #[test]
    fn test_low_score_keeps_highscore() {
        let mut store = MemoryScoreStore::new();
        store.highscore = 1_000;
        let settings = Settings {
            number_of_bubbles: 0,
            game_time: 3,
        };
        let mut round = round(settings, store);
        assert_eq!(round.highscore(), 1_000);
        run_to_end(&mut round);

        let (_, store, observer) = round.into_parts();
        assert_eq!(store.highscore, 1_000);
        assert_eq!(store.players, vec![Player::new(DEFAULT_PLAYER_NAME, 0)]);
        assert_eq!(observer.ended, vec![0]);
    }

    #[test]
    fn test_tap_adds_points() {
        let mut round = round(Settings::default(), MemoryScoreStore::new());
        let state = &mut round.state;
        state.score = 25;
        let id = state.pool.insert(Bubble {
            id: 0,
            pos: Vec2::new(200.0, 200.0),
            vel: Vec2::ZERO,
            radius: BUBBLE_RADIUS,
            color: BubbleColor::Black,
        });

        assert_eq!(round.tap_at(Vec2::new(200.0, 210.0)), Some(10));
        assert_eq!(round.score(), 35);
        assert!(round.state().pool.get(id).is_none());
        assert_eq!(round.observer().scores, vec![35]);
    }

    #[test]
    fn test_abort_skips_recording() {
        let mut round = round(Settings::default(), MemoryScoreStore::new());
        for _ in 0..200 {
            round.step(DT);
        }
        round.abort();
        let remaining = round.state().remaining_secs;
        for _ in 0..10_000 {
            round.step(DT);
        }
        assert_eq!(round.phase(), RoundPhase::Aborted);
        assert_eq!(round.state().remaining_secs, remaining);
        assert!(round.store().players.is_empty());
        assert!(round.observer().ended.is_empty());
    }

    #[test]
    fn test_round_is_shareable_behind_a_lock() {
        fn assert_send<T: Send>() {}
        assert_send::<Round<MemoryScoreStore, NullObserver>>();

        let round = std::sync::Arc::new(std::sync::Mutex::new(
            Round::new(
                area(),
                &Settings::default(),
                MemoryScoreStore::new(),
                NullObserver,
                SimRng::new(8),
            )
            .unwrap(),
        ));
        let tapper = {
            let round = round.clone();
            std::thread::spawn(move || {
                for _ in 0..100 {
                    let mut round = round.lock().unwrap();
                    let id = round.state().pool.bubbles().first().map(|b| b.id);
                    if let Some(id) = id {
                        round.tap(id);
                    }
                }
            })
        };
        for _ in 0..300 {
            round.lock().unwrap().step(DT);
        }
        tapper.join().unwrap();
        let round = round.lock().unwrap();
        assert!(round.state().remaining_secs < 60);
    }
}
