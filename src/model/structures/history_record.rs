use serde::{Deserialize, Serialize};

/// One player's rating change for one round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub round_seq: i64,
    pub round_label: String,
    pub round_type: String,
    pub player: String,
    pub score: f64,
    pub rating_before: f64,
    pub rating_after: f64,
    pub delta: f64,
    /// Zero for rounds with a single player
    pub k_effective: f64
}
