use indexmap::IndexMap;
use itertools::Itertools;

use crate::model::structures::{player_rating::PlayerRating, snapshot_record::SnapshotRecord};

/// Current rating of every player seen so far.
///
/// Players are kept in first-appearance order. Sorting the leaderboard is
/// stable over that order, so equally rated players are listed by who
/// showed up first, never by name.
#[derive(Debug, Clone, Default)]
pub struct RatingTracker {
    ratings: IndexMap<String, f64>
}

impl RatingTracker {
    pub fn new() -> RatingTracker {
        RatingTracker {
            ratings: IndexMap::new()
        }
    }

    /// Inserts the player with `start_rating` if they have not been seen yet.
    /// Returns true if the player was new.
    pub fn ensure_player(&mut self, player: &str, start_rating: f64) -> bool {
        if self.ratings.contains_key(player) {
            return false;
        }

        self.ratings.insert(player.to_string(), start_rating);
        true
    }

    pub fn get_rating(&self, player: &str) -> Option<f64> {
        self.ratings.get(player).copied()
    }

    /// Adds `delta` to the player's rating and returns (before, after),
    /// or `None` if the player is unknown.
    pub fn apply_delta(&mut self, player: &str, delta: f64) -> Option<(f64, f64)> {
        let rating = self.ratings.get_mut(player)?;
        let before = *rating;
        *rating += delta;

        Some((before, *rating))
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    /// All players sorted by descending rating.
    pub fn leaderboard(&self) -> Vec<PlayerRating> {
        self.sorted()
            .map(|(player, rating)| PlayerRating {
                player: player.clone(),
                rating: *rating
            })
            .collect()
    }

    /// The full leaderboard stamped with the round it follows.
    pub fn snapshot(&self, round_seq: i64, round_label: &str, round_type: &str) -> Vec<SnapshotRecord> {
        self.sorted()
            .enumerate()
            .map(|(i, (player, rating))| SnapshotRecord {
                round_seq,
                round_label: round_label.to_string(),
                round_type: round_type.to_string(),
                rank: i + 1,
                player: player.clone(),
                rating: *rating
            })
            .collect()
    }

    fn sorted(&self) -> impl Iterator<Item = (&String, &f64)> {
        self.ratings.iter().sorted_by(|(_, a), (_, b)| b.total_cmp(a))
    }
}
