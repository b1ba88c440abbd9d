//! The rating core: turns an ordered series of round results into ratings,
//! per-round history, leaderboard snapshots and cap interventions.

pub mod config;
pub mod constants;
pub mod elo;
pub mod elo_model;
pub mod rating_tracker;
pub mod round_classifier;
pub mod structures;

pub use elo_model::compute_ratings;
