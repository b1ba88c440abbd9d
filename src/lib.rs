pub mod args;
pub mod error;
pub mod model;
pub mod sheets;
pub mod utils;

pub use error::{RatingError, Result};
pub use model::{compute_ratings, config::RatingConfig, elo_model::EloModel};
