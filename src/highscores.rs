//! High score persistence
//!
//! Tracks a single best-ever score plus a top-5 leaderboard, stored as one
//! JSON file. Missing or corrupt storage reads back as empty; the session
//! never fails over storage problems.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Maximum number of leaderboard entries to keep
pub const LEADERBOARD_SIZE: usize = 5;

/// Best-ever score and ranked leaderboard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScores {
    /// Highest score ever recorded
    pub best: u32,
    /// Top scores, descending
    pub entries: Vec<u32>,
}

impl HighScores {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a score would make the leaderboard
    pub fn qualifies(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < LEADERBOARD_SIZE {
            return true;
        }
        self.entries.last().map(|&e| score > e).unwrap_or(true)
    }

    /// Record a finished session's score.
    ///
    /// Updates the best-ever score, inserts into the leaderboard (descending,
    /// truncated to [`LEADERBOARD_SIZE`]), and returns the 1-based rank
    /// achieved, or `None` if the score did not qualify.
    pub fn record(&mut self, score: u32) -> Option<usize> {
        self.best = self.best.max(score);
        if !self.qualifies(score) {
            return None;
        }
        let pos = self
            .entries
            .iter()
            .position(|&e| score > e)
            .unwrap_or(self.entries.len());
        self.entries.insert(pos, score);
        self.entries.truncate(LEADERBOARD_SIZE);
        Some(pos + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest leaderboard entry, if any
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().copied()
    }

    /// Load from disk, defaulting to empty on any failure
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(scores) => {
                    log::info!("loaded high scores from {}", path.display());
                    scores
                }
                Err(err) => {
                    log::warn!("corrupt high score file {} ({err}), starting fresh", path.display());
                    Self::new()
                }
            },
            Err(_) => {
                log::info!("no high score file at {}, starting fresh", path.display());
                Self::new()
            }
        }
    }

    /// Save to disk; failures are logged and otherwise ignored
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = fs::write(path, json) {
                    log::warn!("failed to save high scores to {} ({err})", path.display());
                }
            }
            Err(err) => log::warn!("failed to serialize high scores ({err})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_sorts_descending_and_truncates() {
        let mut scores = HighScores::new();
        for s in [100, 300, 200, 50, 250, 400] {
            scores.record(s);
        }
        assert_eq!(scores.entries, vec![400, 300, 250, 200, 100]);
        assert_eq!(scores.best, 400);
        assert_eq!(scores.top_score(), Some(400));
    }

    #[test]
    fn test_record_rank() {
        let mut scores = HighScores::new();
        assert_eq!(scores.record(100), Some(1));
        assert_eq!(scores.record(200), Some(1));
        assert_eq!(scores.record(150), Some(2));
    }

    #[test]
    fn test_zero_score_does_not_qualify() {
        let mut scores = HighScores::new();
        assert!(!scores.qualifies(0));
        assert_eq!(scores.record(0), None);
        assert!(scores.is_empty());
    }

    #[test]
    fn test_low_score_rejected_when_full() {
        let mut scores = HighScores::new();
        for s in [500, 400, 300, 200, 100] {
            scores.record(s);
        }
        assert_eq!(scores.record(50), None);
        assert_eq!(scores.entries.len(), LEADERBOARD_SIZE);
        // Best still tracks every recorded score
        assert_eq!(scores.best, 500);
    }

    #[test]
    fn test_load_missing_file_defaults() {
        let scores = HighScores::load(Path::new("/nonexistent/highscores.json"));
        assert_eq!(scores, HighScores::new());
    }

    #[test]
    fn test_load_corrupt_file_defaults() {
        let path =
            std::env::temp_dir().join(format!("star-breaker-hs-corrupt-{}", std::process::id()));
        fs::write(&path, "{not json!").unwrap();
        let scores = HighScores::load(&path);
        assert_eq!(scores, HighScores::new());
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_save_load_round_trip() {
        let path = std::env::temp_dir().join(format!("star-breaker-hs-{}", std::process::id()));
        let mut scores = HighScores::new();
        scores.record(120);
        scores.record(340);
        scores.save(&path);
        assert_eq!(HighScores::load(&path), scores);
        fs::remove_file(&path).ok();
    }
}
