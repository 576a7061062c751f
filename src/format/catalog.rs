use serde::{Deserialize, Serialize};

use crate::domain::setup::{MAX_CUSTOM_OVERS, MIN_CUSTOM_OVERS};
use crate::domain::{BowlingPhase, FormatChoice, MatchSetup};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggressionTier {
    Low,
    Medium,
    High,
    Extreme,
}

impl AggressionTier {
    pub fn as_str(&self) -> &str {
        match self {
            AggressionTier::Low => "low",
            AggressionTier::Medium => "medium",
            AggressionTier::High => "high",
            AggressionTier::Extreme => "extreme",
        }
    }
}

/// Structural constraints derived from a match format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatConfig {
    pub label: String,
    pub description: String,
    pub overs: u32,
    pub max_per_bowler: u32,
    pub powerplay_overs: u32,
    pub middle_start: u32,
    pub middle_end: u32,
    pub death_start: u32,
    pub min_bowlers: usize,
    pub aggression: AggressionTier,
    pub anchors_needed: u32,
    pub finishers_needed: u32,
    pub all_rounders_preferred: usize,
}

impl FormatConfig {
    /// Bowling phase of a 1-based over according to the over boundaries.
    ///
    /// The selector tags bowlers by rotating through the phases instead; the
    /// two models are reported side by side rather than merged.
    pub fn phase_for_over(&self, over: u32) -> BowlingPhase {
        if over <= self.powerplay_overs {
            BowlingPhase::Powerplay
        } else if over < self.death_start {
            BowlingPhase::Middle
        } else {
            BowlingPhase::Death
        }
    }

    /// Overs a bowling attack of `bowlers` can deliver within the per-bowler cap
    pub fn bowling_capacity(&self, bowlers: usize) -> u32 {
        bowlers as u32 * self.max_per_bowler
    }
}

/// Resolves the constraints for a setup: table lookup for named formats,
/// derived from the overs for custom ones.
pub fn format_config(setup: &MatchSetup) -> FormatConfig {
    match setup.format {
        FormatChoice::T20 => named("T20", "Full-length T20: build an innings, back it with five bowlers", 20),
        FormatChoice::T15 => named("T15", "Shortened T20: anchors still matter, powerplay comes early", 15),
        FormatChoice::T10 => named("T10", "Ten overs: hitters and all-rounders over accumulators", 10),
        FormatChoice::T5 => named("T5", "Five overs: every ball is a boundary attempt", 5),
        FormatChoice::Custom { overs } => custom(overs.clamp(MIN_CUSTOM_OVERS, MAX_CUSTOM_OVERS), setup.target_size()),
    }
}

fn named(label: &str, description: &str, overs: u32) -> FormatConfig {
    FormatConfig {
        label: label.to_string(),
        description: description.to_string(),
        ..derive_config(overs, 11)
    }
}

fn custom(overs: u32, player_count: usize) -> FormatConfig {
    FormatConfig {
        label: "Custom".to_string(),
        description: format!("Custom {} over match", overs),
        ..derive_config(overs, player_count)
    }
}

// Overs are bounded by MAX_CUSTOM_OVERS, so the float casts below never saturate
fn derive_config(overs: u32, player_count: usize) -> FormatConfig {
    let powerplay_overs = ((overs as f64 * 0.3 + 0.5).floor() as u32).max(1);
    let middle_end = (overs as f64 * 0.75).floor() as u32;

    FormatConfig {
        label: String::new(),
        description: String::new(),
        overs,
        max_per_bowler: (overs / 5).max(1),
        powerplay_overs,
        middle_start: powerplay_overs + 1,
        middle_end,
        death_start: middle_end + 1,
        min_bowlers: player_count.saturating_sub(4).min(5),
        aggression: aggression_for(overs),
        anchors_needed: anchors_for(overs),
        finishers_needed: if overs <= 10 { 3 } else { 2 },
        all_rounders_preferred: if overs <= 10 { 3 } else { 2 },
    }
}

fn aggression_for(overs: u32) -> AggressionTier {
    if overs <= 8 {
        AggressionTier::Extreme
    } else if overs <= 12 {
        AggressionTier::High
    } else {
        AggressionTier::Medium
    }
}

fn anchors_for(overs: u32) -> u32 {
    if overs >= 15 {
        2
    } else if overs >= 10 {
        1
    } else {
        0
    }
}

/// Bowling floor for a lineup of `player_count`; short lineups cannot carry
/// a full attack so the floor relaxes.
pub fn min_bowlers_for_count(player_count: usize, format: &FormatConfig) -> usize {
    if player_count <= 9 {
        player_count.saturating_sub(3).min(4)
    } else if player_count == 10 {
        format.min_bowlers.min(4)
    } else {
        format.min_bowlers
    }
}

/// Configs for every named format, in catalogue order
pub fn named_formats() -> Vec<FormatConfig> {
    FormatChoice::NAMED
        .iter()
        .map(|&format| format_config(&MatchSetup::new(format, 11)))
        .collect()
}
