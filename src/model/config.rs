use std::{fs, path::Path};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::{
    error::{RatingError, Result},
    model::{
        constants::{
            DEFAULT_BASE_K, DEFAULT_DELTA_CAP_START_ROUND, DEFAULT_START_RATING, DEFAULT_USE_MOV, FALLBACK_DELTA_CAP,
            FALLBACK_WEIGHT
        },
        structures::round_type::RoundType
    }
};

/// Settings for one rating computation.
///
/// In `delta_caps`, a round type mapped to `null` is never capped, while a
/// round type missing from the table falls back to [`FALLBACK_DELTA_CAP`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    pub base_k: f64,
    pub start_rating: f64,
    pub use_mov: bool,
    /// 1-based count of processed rounds from which capping is enforced
    pub delta_cap_start_round: u32,
    pub weights: IndexMap<String, f64>,
    pub delta_caps: IndexMap<String, Option<f64>>
}

impl Default for RatingConfig {
    fn default() -> Self {
        RatingConfig {
            base_k: DEFAULT_BASE_K,
            start_rating: DEFAULT_START_RATING,
            use_mov: DEFAULT_USE_MOV,
            delta_cap_start_round: DEFAULT_DELTA_CAP_START_ROUND,
            weights: RoundType::iter().map(|t| (t.to_string(), t.default_weight())).collect(),
            delta_caps: RoundType::iter()
                .map(|t| (t.to_string(), t.default_delta_cap()))
                .collect()
        }
    }
}

impl RatingConfig {
    /// Loads settings from a JSON file. Fields missing from the file keep their defaults.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: RatingConfig = serde_json::from_str(&contents)?;

        Ok(config)
    }

    /// K-factor multiplier for the round type, 1.0 if the type is unknown.
    pub fn weight_for(&self, round_type: &str) -> f64 {
        self.weights.get(round_type).copied().unwrap_or(FALLBACK_WEIGHT)
    }

    pub fn delta_cap_for(&self, round_type: &str) -> Option<f64> {
        match self.delta_caps.get(round_type) {
            Some(cap) => *cap,
            None => Some(FALLBACK_DELTA_CAP)
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.base_k.is_finite() || self.base_k <= 0.0 {
            return Err(invalid(format!("base K must be a positive number, got {}", self.base_k)));
        }

        if !self.start_rating.is_finite() {
            return Err(invalid(format!("starting rating must be finite, got {}", self.start_rating)));
        }

        for (round_type, weight) in &self.weights {
            if !weight.is_finite() {
                return Err(invalid(format!("weight for {} must be finite, got {}", round_type, weight)));
            }
        }

        for (round_type, cap) in &self.delta_caps {
            if let Some(cap) = cap {
                if !cap.is_finite() || *cap < 0.0 {
                    return Err(invalid(format!(
                        "delta cap for {} must be a non-negative number or null, got {}",
                        round_type, cap
                    )));
                }
            }
        }

        Ok(())
    }
}

fn invalid(reason: String) -> RatingError {
    RatingError::InvalidConfiguration { reason }
}
