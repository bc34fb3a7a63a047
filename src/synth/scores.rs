// ===== benchdash/src/synth/scores.rs =====

use crate::catalog;
use serde::Serialize;
use strum_macros::Display;

/// Theoretical score ceiling; used to scale the per-row performance bar.
pub const SCORE_CEILING: u32 = 160;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub game: &'static str,
    /// Average FPS, in [60, 160).
    pub score: u32,
    /// Standing among the reference population, in [60, 100).
    pub percentile: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum PerfRating {
    Excellent,
    Good,
    Fair,
}

impl PerfRating {
    pub fn for_score(score: u32) -> Self {
        if score >= 120 {
            PerfRating::Excellent
        } else if score >= 90 {
            PerfRating::Good
        } else {
            PerfRating::Fair
        }
    }
}

impl GameResult {
    pub fn rating(&self) -> PerfRating {
        PerfRating::for_score(self.score)
    }
}

/// Roll one result per game in the fixed suite. Every invocation draws
/// fresh values; the caller memoizes on the (sku, build) pair so that
/// expanding a table row does not reroll the table.
pub fn generate(rng: &mut fastrand::Rng) -> Vec<GameResult> {
    catalog::GAMES
        .iter()
        .map(|&game| GameResult {
            game,
            score: rng.u32(0..100) + 60,
            percentile: rng.u32(0..40) + 60,
        })
        .collect()
}

/// Rounded arithmetic mean of the scores; 0 for an empty set.
pub fn average_fps(results: &[GameResult]) -> u32 {
    if results.is_empty() {
        return 0;
    }
    let sum: u32 = results.iter().map(|r| r.score).sum();
    ((sum as f64) / (results.len() as f64)).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_of_empty_is_zero() {
        assert_eq!(average_fps(&[]), 0);
    }

    #[test]
    fn average_rounds_to_nearest() {
        let results = vec![
            GameResult { game: "a", score: 100, percentile: 60 },
            GameResult { game: "b", score: 101, percentile: 60 },
        ];
        // 100.5 rounds up
        assert_eq!(average_fps(&results), 101);
    }
}
