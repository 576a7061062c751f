//! Squad-level reports built on the per-player scores: batting roles,
//! bowling coverage and cross-format comparisons.

pub mod batting;
pub mod bowling;
pub mod insights;

pub use batting::{BattingAnalysis, BatterProfile, RadarSeries, batting_analysis};
pub use bowling::{BowlerProfile, BowlingAnalysis, bowling_analysis};
pub use insights::{
    CombinationSummary, ImpactRating, combination_summaries, format_comparison, impact_ratings,
};

use crate::scoring::{Score, round_half_up};

/// Percentage of `value` against `max`, a zero maximum counting as 1
pub(crate) fn percent_of(value: f64, max: f64) -> Score {
    let max = if max == 0.0 { 1.0 } else { max };
    round_half_up(value / max * 100.0)
}
