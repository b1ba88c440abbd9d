use serde::{Deserialize, Serialize};

/// A leaderboard row as it stood right after a round was applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotRecord {
    pub round_seq: i64,
    pub round_label: String,
    pub round_type: String,
    pub rank: usize,
    pub player: String,
    pub rating: f64
}
