use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// The round types every default configuration knows about. Configuration
/// tables are keyed by the token string, so custom types can be added
/// without touching this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter, EnumString)]
pub enum RoundType {
    TR,
    CR,
    TN,
    CM
}

impl RoundType {
    pub fn default_weight(&self) -> f64 {
        match self {
            RoundType::TR => 0.75,
            RoundType::CR => 0.75,
            RoundType::TN => 1.0,
            RoundType::CM => 0.25
        }
    }

    /// `None` means rounds of this type are never capped.
    pub fn default_delta_cap(&self) -> Option<f64> {
        match self {
            RoundType::TR => None,
            RoundType::CR => Some(225.0),
            RoundType::TN => Some(300.0),
            RoundType::CM => Some(150.0)
        }
    }
}
