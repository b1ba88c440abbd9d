use itertools::Itertools;
use serde::Serialize;

use crate::model::structures::{
    history_record::HistoryRecord, player_rating::PlayerRating, scaling_record::ScalingRecord,
    snapshot_record::SnapshotRecord
};

/// Everything produced by one pass over the rounds.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RatingResult {
    /// Sorted by descending rating
    pub final_ratings: Vec<PlayerRating>,
    pub history: Vec<HistoryRecord>,
    pub snapshots: Vec<SnapshotRecord>,
    pub scaling_records: Vec<ScalingRecord>
}

impl RatingResult {
    /// Distinct round labels in the order the rounds were processed.
    pub fn rounds(&self) -> Vec<&str> {
        self.snapshots.iter().map(|s| s.round_label.as_str()).unique().collect()
    }

    /// The leaderboard as of the given round label. Without a label this is
    /// the final leaderboard.
    ///
    /// Labels are not guaranteed unique; if several rounds share one, the
    /// latest of them is used. An unknown label gives an empty leaderboard.
    pub fn leaderboard_at(&self, round_label: Option<&str>) -> Vec<PlayerRating> {
        let label = match round_label {
            None => return self.final_ratings.clone(),
            Some(label) => label
        };

        let Some(round_seq) = self
            .snapshots
            .iter()
            .filter(|s| s.round_label == label)
            .map(|s| s.round_seq)
            .max()
        else {
            return Vec::new();
        };

        self.snapshots
            .iter()
            .filter(|s| s.round_seq == round_seq)
            .sorted_by_key(|s| s.rank)
            .map(|s| PlayerRating {
                player: s.player.clone(),
                rating: s.rating
            })
            .collect()
    }

    pub fn player_history(&self, player: &str) -> Vec<&HistoryRecord> {
        self.history.iter().filter(|h| h.player == player).collect()
    }

    pub fn was_scaled(&self) -> bool {
        !self.scaling_records.is_empty()
    }
}
