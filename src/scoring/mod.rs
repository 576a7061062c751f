pub mod metrics;
pub mod weights;

pub use metrics::{
    PlayerScores, Score, aggression_index, bowling_depth_score, death_bowling_strength,
    finishing_power, player_form_score, round_half_up, stability_score,
};
