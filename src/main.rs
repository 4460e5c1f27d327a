//! Bubble Pop headless runner
//!
//! Plays one seeded round at 60 Hz with an automated tapper and logs what a
//! presentation layer would show.
//!
//! Usage: `bubble-pop [seed] [easy|normal|hard] [save.json]`

use bubble_pop::highscores::{MAX_HIGH_SCORES, ranked};
use bubble_pop::persistence::JsonFileStore;
use bubble_pop::sim::{PlayArea, SimRng};
use bubble_pop::{Difficulty, MemoryScoreStore, Round, RoundObserver, ScoreStore, Settings};

const FRAME_DT: f32 = 1.0 / 60.0;
/// Frames between automated taps
const TAP_EVERY: u32 = 20;
/// Reference screen (points)
const SCREEN_WIDTH: f32 = 375.0;
const SCREEN_HEIGHT: f32 = 667.0;

struct LogObserver;

impl RoundObserver for LogObserver {
    fn on_time_updated(&mut self, remaining_secs: u32) {
        log::info!("{remaining_secs} secs");
    }

    fn on_score_updated(&mut self, score: u64) {
        log::info!("Score: {score}");
    }

    fn on_ending_soon(&mut self) {
        log::info!("Hurry up!");
    }

    fn on_round_ended(&mut self, final_score: u64) {
        log::info!("Game over - final score {final_score}");
    }
}

fn play<S: ScoreStore>(store: S, settings: &Settings, seed: u64) -> Result<S, String> {
    let area = PlayArea::from_screen(SCREEN_WIDTH, SCREEN_HEIGHT).map_err(|e| e.to_string())?;
    let mut round = Round::new(area, settings, store, LogObserver, SimRng::new(seed))
        .map_err(|e| e.to_string())?;
    round.set_player_name("Autotapper");
    log::info!("Highscore: {}", round.highscore());

    let mut frame = 0u32;
    while !round.phase().is_finished() {
        round.step(FRAME_DT);
        frame += 1;
        if frame % TAP_EVERY == 0 {
            // Aim at where the newest bubble is right now
            let target = round.state().pool.bubbles().last().map(|b| b.pos);
            if let Some(pos) = target {
                round.tap_at(pos);
            }
        }
    }

    let (_, store, _) = round.into_parts();
    Ok(store)
}

fn print_board(store: &dyn ScoreStore) {
    let players = store.players();
    println!("\nTop {MAX_HIGH_SCORES}:");
    for (i, p) in ranked(&players).iter().enumerate() {
        println!("{:>2}. {:<12} {}", i + 1, p.name, p.score);
    }
    println!("Highscore: {}", store.highscore());
}

fn main() {
    env_logger::init();
    log::info!("Bubble Pop (headless) starting...");

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0xB0BB1E);
    let difficulty = args
        .next()
        .and_then(|s| Difficulty::parse(&s))
        .unwrap_or_default();
    let save_path = args.next();

    log::info!("seed {seed}, difficulty {}", difficulty.as_str());

    let result = match save_path {
        Some(path) => match JsonFileStore::open(&path) {
            Ok(store) => {
                let settings = match store.settings() {
                    s if *s == Settings::default() => Settings::from_preset(difficulty),
                    s => s.clone(),
                };
                play(store, &settings, seed).map(|s| print_board(&s))
            }
            Err(e) => Err(e.to_string()),
        },
        None => play(MemoryScoreStore::new(), &Settings::from_preset(difficulty), seed)
            .map(|s| print_board(&s)),
    };

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}
