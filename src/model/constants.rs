// Engine defaults
pub const DEFAULT_BASE_K: f64 = 36.0;
pub const DEFAULT_START_RATING: f64 = 1500.0;
pub const DEFAULT_USE_MOV: bool = true;
pub const DEFAULT_DELTA_CAP_START_ROUND: u32 = 2;
/// Applied when a round type has no entry in the cap table
pub const FALLBACK_DELTA_CAP: f64 = 300.0;
pub const FALLBACK_ROUND_TYPE: &str = "TR";
pub const FALLBACK_WEIGHT: f64 = 1.0;
// Elo curve
pub const ELO_SCALE: f64 = 400.0;
pub const EXPECTED_SCORE_CLAMP: f64 = 300.0;
// Margin of victory dampening
pub const MOV_DAMPENING: f64 = 2.2;
pub const MOV_RATING_COEFFICIENT: f64 = 0.001;
