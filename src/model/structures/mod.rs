pub mod history_record;
pub mod player_rating;
pub mod rating_result;
pub mod round_group;
pub mod round_type;
pub mod scaling_record;
pub mod score_record;
pub mod snapshot_record;
