//! Star Breaker entry point
//!
//! There is no windowing frontend in this build, so the binary runs a
//! headless demo session: the autopilot plays a full game at the fixed
//! timestep, engine events stream to the log and the audio sink, and the
//! final score lands in the high score file.

use std::path::{Path, PathBuf};

use star_breaker::audio::{AudioSink, NullAudio};
use star_breaker::consts::*;
use star_breaker::sim::{FileLevels, GameEvent, GamePhase, GameState, TickInput, tick};
use star_breaker::{HighScores, Settings};

const SETTINGS_FILE: &str = "settings.json";
const HIGH_SCORE_FILE: &str = "highscores.json";
const LEVELS_DIR: &str = "levels";

/// One running session with its collaborators
struct Game {
    state: GameState,
    provider: FileLevels,
    settings: Settings,
    audio: NullAudio,
    highscores: HighScores,
    highscore_path: PathBuf,
    input: TickInput,
    accumulator: f32,
}

impl Game {
    fn new(seed: u64) -> Self {
        let highscore_path = PathBuf::from(HIGH_SCORE_FILE);
        Self {
            state: GameState::new(seed),
            provider: FileLevels::new(LEVELS_DIR),
            settings: Settings::load(Path::new(SETTINGS_FILE)),
            audio: NullAudio,
            highscores: HighScores::load(&highscore_path),
            highscore_path,
            input: TickInput::default(),
            accumulator: 0.0,
        }
    }

    /// Advance the simulation by a frame's worth of wall time
    fn update(&mut self, frame_dt: f32) {
        self.accumulator += frame_dt.min(DT_MAX);
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &self.input, &self.provider, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.primary = false;
            self.input.restart = false;
            self.input.escape = false;
        }
        self.handle_events();
    }

    /// Drain engine events into the log, audio sink, and persistence
    fn handle_events(&mut self) {
        let events = self.state.drain_events();
        for event in &events {
            match event {
                GameEvent::BrickBreak { color, x, y } => {
                    log::debug!("brick break (color {color}) at ({x:.0}, {y:.0})");
                }
                GameEvent::LifeLost => {
                    log::info!("life lost, {} remaining", self.state.lives);
                }
                GameEvent::LevelCleared { level } => {
                    log::info!("level {level} cleared");
                }
                GameEvent::SessionWon { score } | GameEvent::SessionLost { score } => {
                    let rank = self.highscores.record(*score);
                    self.highscores.save(&self.highscore_path);
                    match rank {
                        Some(rank) => log::info!("final score {score} ranked #{rank}"),
                        None => log::info!("final score {score} did not make the leaderboard"),
                    }
                }
                _ => {}
            }
        }
        if !self.settings.muted {
            self.audio.play_events(&events);
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Star Breaker (headless demo) starting...");

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0x5eed);
    log::info!("session seed: {seed}");

    let mut game = Game::new(seed);
    game.input.autopilot = true;

    // 60 fps frames, two fixed substeps each; bounded in case the autopilot
    // never loses
    let frame_dt = SIM_DT * 2.0;
    let max_frames = 60 * 60 * 30;
    for frame in 0..max_frames {
        game.update(frame_dt);
        if frame % 600 == 0 {
            log::info!(
                "score {:>6}  lives {}  level {:>2}  bricks {:>2}",
                game.state.score,
                game.state.lives,
                game.state.level,
                game.state.bricks_remaining
            );
        }
        if game.state.phase == GamePhase::SessionOver || game.state.quit {
            break;
        }
    }

    println!("session over: {:?}", game.state.outcome);
    println!("final score:  {}", game.state.score);
    println!("level:        {}", game.state.level);
    println!(
        "best score:   {}",
        game.highscores.best.max(game.state.score)
    );
}
