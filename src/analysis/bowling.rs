use std::cmp::Reverse;

use serde::Serialize;

use super::percent_of;
use crate::domain::{BowlingStyle, PlayerId, Role, RosterSnapshot};
use crate::format::FormatConfig;
use crate::scoring::{PlayerScores, Score};
use crate::selection::eligible;

const PHASE_PICKS: usize = 3;
// Reference ceilings for the strength meters
const DEPTH_CEILING: f64 = 80.0;
const DEATH_CEILING: f64 = 60.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BowlerProfile {
    pub player_id: PlayerId,
    pub name: String,
    pub role: Role,
    pub bowling_style: BowlingStyle,
    pub wickets: f64,
    pub economy: f64,
    pub innings: f64,
    pub depth: Score,
    pub death: Score,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BowlingAnalysis {
    pub format: String,
    pub overs: u32,
    pub max_per_bowler: u32,
    /// Bowling options, deepest first
    pub bowlers: Vec<BowlerProfile>,
    pub capacity: u32,
    pub coverage_percent: Score,
    pub powerplay: Vec<BowlerProfile>,
    pub middle: Vec<BowlerProfile>,
    pub death: Vec<BowlerProfile>,
    pub depth_percent: Score,
    pub death_percent: Score,
    pub powerplay_percent: Score,
    pub warnings: Vec<String>,
}

fn picks(bowlers: &[BowlerProfile], sort: impl FnOnce(&mut Vec<BowlerProfile>)) -> Vec<BowlerProfile> {
    let mut sorted = bowlers.to_vec();
    sort(&mut sorted);
    sorted.truncate(PHASE_PICKS);
    sorted
}

fn total(bowlers: &[BowlerProfile], key: impl Fn(&BowlerProfile) -> Score) -> f64 {
    bowlers.iter().map(key).sum::<Score>() as f64
}

/// Bowling options of the available squad, their over capacity against the
/// format and the best picks for each phase.
///
/// A player counts as an option when their role bowls and they have bowled
/// at least one innings.
pub fn bowling_analysis(snapshot: &RosterSnapshot, format: &FormatConfig) -> BowlingAnalysis {
    let mut bowlers: Vec<BowlerProfile> = eligible(&snapshot.squad)
        .into_iter()
        .filter(|p| p.role.can_bowl())
        .map(|p| {
            let stats = snapshot.stats_for(p.player_id);
            let scores = PlayerScores::compute(&stats);
            BowlerProfile {
                player_id: p.player_id,
                name: p.name.clone(),
                role: p.role,
                bowling_style: p.bowling_style,
                wickets: stats.wickets(),
                economy: stats.economy(),
                innings: stats.bowling_innings(),
                depth: scores.bowling_depth,
                death: scores.death_bowling,
            }
        })
        .filter(|b| b.innings > 0.0)
        .collect();
    bowlers.sort_by_key(|b| Reverse(b.depth));

    let capacity = format.bowling_capacity(bowlers.len());
    let coverage_percent = percent_of(capacity as f64, format.overs as f64).min(100);

    let powerplay = picks(&bowlers, |_| {});
    let middle = picks(&bowlers, |v| v.sort_by(|a, b| a.economy.total_cmp(&b.economy)));
    let death = picks(&bowlers, |v| v.sort_by_key(|b| Reverse(b.death)));

    let depth_percent = percent_of(total(&bowlers, |b| b.depth), bowlers.len() as f64 * DEPTH_CEILING);
    let death_percent = percent_of(total(&death, |b| b.death), PHASE_PICKS as f64 * DEATH_CEILING);
    let powerplay_percent = percent_of(total(&powerplay, |b| b.depth), PHASE_PICKS as f64 * DEPTH_CEILING);

    let mut warnings = Vec::new();
    if bowlers.len() < format.min_bowlers {
        warnings.push(format!(
            "Only {} bowling options. Need at least {} for {}.",
            bowlers.len(),
            format.min_bowlers,
            format.label
        ));
    }
    if capacity < format.overs {
        warnings.push(format!(
            "Bowling capacity ({} overs) doesn't cover required {} overs.",
            capacity, format.overs
        ));
    }
    if death.len() < 2 {
        warnings.push("Limited death bowling options, consider adding a death specialist.".to_string());
    }

    BowlingAnalysis {
        format: format.label.clone(),
        overs: format.overs,
        max_per_bowler: format.max_per_bowler,
        bowlers,
        capacity,
        coverage_percent,
        powerplay,
        middle,
        death,
        depth_percent,
        death_percent,
        powerplay_percent,
        warnings,
    }
}
