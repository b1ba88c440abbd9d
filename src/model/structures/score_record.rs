use crate::error::{RatingError, Result};

/// One player's result in one round. Lower scores are better.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRecord {
    player: String,
    round_seq: i64,
    round_label: String,
    score: f64
}

impl ScoreRecord {
    pub fn new(player: &str, round_seq: i64, round_label: &str, score: f64) -> Result<Self> {
        let player = player.trim();
        if player.is_empty() {
            return Err(RatingError::InvalidRecord {
                reason: format!("empty player name in round {}", round_seq)
            });
        }

        if !score.is_finite() {
            return Err(RatingError::InvalidRecord {
                reason: format!("score {} for {} in round {} is not a number", score, player, round_seq)
            });
        }

        Ok(ScoreRecord {
            player: player.to_string(),
            round_seq,
            round_label: round_label.trim().to_string(),
            score
        })
    }

    pub fn player(&self) -> &str {
        &self.player
    }

    pub fn round_seq(&self) -> i64 {
        self.round_seq
    }

    pub fn round_label(&self) -> &str {
        &self.round_label
    }

    pub fn score(&self) -> f64 {
        self.score
    }
}
