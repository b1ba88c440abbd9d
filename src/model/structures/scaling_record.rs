use serde::{Deserialize, Serialize};

/// Emitted for every player of a round whose deltas were shrunk to fit the cap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalingRecord {
    pub round_seq: i64,
    pub round_label: String,
    pub round_type: String,
    pub player: String,
    pub score: f64,
    pub delta_original: f64,
    pub delta_scaled: f64,
    pub reduction: f64,
    pub scale_factor: f64,
    pub max_abs_delta_original: f64,
    pub delta_cap: f64
}
