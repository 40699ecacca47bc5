//! High score leaderboard
//!
//! In-memory only, tracks the top 10 scores of the process lifetime.

use serde::{Deserialize, Serialize};

/// Leaderboard length
pub const MAX_HIGH_SCORES: usize = 10;

/// One finished game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u64,
    /// Level reached
    pub level: u32,
    /// Simulated seconds played
    pub play_time: f32,
}

/// Finished games, best first
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insertion index for `score`; equal scores keep their older entries ahead
    fn slot(&self, score: u64) -> usize {
        self.entries.partition_point(|e| e.score >= score)
    }

    /// Zero never makes the board; otherwise the score must land in the top ten
    pub fn qualifies(&self, score: u64) -> bool {
        score > 0 && self.slot(score) < MAX_HIGH_SCORES
    }

    /// 1-based rank `score` would take, `None` if it would not make the board
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        self.qualifies(score).then(|| self.slot(score) + 1)
    }

    /// Record a finished game. Returns its 1-based rank if it made the board.
    pub fn add_score(&mut self, score: u64, level: u32, play_time: f32) -> Option<usize> {
        let rank = self.potential_rank(score)?;
        let entry = HighScoreEntry {
            score,
            level,
            play_time,
        };
        self.entries.insert(rank - 1, entry);
        self.entries.truncate(MAX_HIGH_SCORES);
        log::info!(
            "New high score #{}: {} at level {} ({})",
            rank,
            score,
            level,
            format_play_time(play_time)
        );
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Format a play time as `m:ss`
pub fn format_play_time(seconds: f32) -> String {
    let total = seconds.max(0.0) as u32;
    format!("{}:{:02}", total / 60, total % 60)
}
