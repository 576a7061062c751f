use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use super::eligibility::eligible;
use super::pool::{Candidate, Metric, SelectionState};
use super::validation::{unmet, validate};
use crate::domain::{
    BowlingPhase, CombinationPlayer, MatchSetup, PlayerId, Role, RosterSnapshot,
    combination::batting_phase_for,
};
use crate::format::{FormatConfig, format_config, min_bowlers_for_count};
use crate::scoring::{Score, round_half_up, weights};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Balanced,
    Aggressive,
    Defensive,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Balanced, Variant::Aggressive, Variant::Defensive];

    pub fn as_str(&self) -> &str {
        match self {
            Variant::Balanced => "balanced",
            Variant::Aggressive => "aggressive",
            Variant::Defensive => "defensive",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "balanced" => Ok(Variant::Balanced),
            "aggressive" => Ok(Variant::Aggressive),
            "defensive" => Ok(Variant::Defensive),
            other => Err(format!("unknown variant '{}', expected balanced, aggressive or defensive", other)),
        }
    }
}

/// How bowling phases were assigned to the lineup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PhaseModel {
    /// powerplay, middle, death repeating down the batting order
    IndexRotation,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineupScores {
    pub total_aggression: Score,
    pub total_stability: Score,
    pub total_finishing: Score,
    pub total_bowling_depth: Score,
    pub total_death_bowling: Score,
    pub powerplay_score: Score,
}

/// A generated lineup with its aggregate scores and advisory warnings
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartXi {
    pub variant: Variant,
    pub format: FormatConfig,
    pub target_size: usize,
    pub players: Vec<CombinationPlayer>,
    pub scores: LineupScores,
    pub warnings: Vec<String>,
    pub phase_model: PhaseModel,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, Copy)]
enum PassLimit {
    UpTo(usize),
    ReachMinBowlers,
    FillSeats,
}

#[derive(Debug, Clone, Copy)]
struct RolePass {
    role: Role,
    metric: Metric,
    limit: PassLimit,
}

fn role_passes(variant: Variant, format: &FormatConfig, min_bowlers: usize) -> [RolePass; 3] {
    let pass = |role, metric, limit| RolePass { role, metric, limit };
    match variant {
        Variant::Aggressive => [
            pass(Role::AllRounder, Metric::Aggression, PassLimit::UpTo(format.all_rounders_preferred + 1)),
            pass(Role::Bowler, Metric::BowlingDepth, PassLimit::ReachMinBowlers),
            pass(Role::Batter, Metric::Aggression, PassLimit::FillSeats),
        ],
        Variant::Defensive => [
            pass(Role::Bowler, Metric::BowlingDepth, PassLimit::UpTo(min_bowlers + 1)),
            pass(Role::AllRounder, Metric::Stability, PassLimit::UpTo(format.all_rounders_preferred)),
            pass(Role::Batter, Metric::Stability, PassLimit::FillSeats),
        ],
        Variant::Balanced => [
            pass(Role::AllRounder, Metric::Form, PassLimit::UpTo(format.all_rounders_preferred)),
            pass(Role::Bowler, Metric::BowlingDepth, PassLimit::ReachMinBowlers),
            pass(Role::Batter, Metric::Form, PassLimit::FillSeats),
        ],
    }
}

fn pass_count(limit: PassLimit, state: &SelectionState, target: usize, min_bowlers: usize) -> usize {
    let seats = target.saturating_sub(state.selected.len());
    let wanted = match limit {
        PassLimit::UpTo(n) => n,
        PassLimit::ReachMinBowlers => {
            min_bowlers.saturating_sub(state.count_selected(|c| c.role().can_bowl()))
        }
        PassLimit::FillSeats => seats,
    };
    wanted.min(seats)
}

/// Builds a lineup for `setup` with the greedy role passes of `variant`.
///
/// Deterministic for identical inputs. A pool smaller than the target size
/// yields a shorter lineup and the unmet requirements end up in `warnings`.
pub fn generate_smart_xi(snapshot: &RosterSnapshot, setup: &MatchSetup, variant: Variant) -> SmartXi {
    let format = format_config(setup);
    let target = setup.target_size();

    let pool: Vec<Candidate> = eligible(&snapshot.squad)
        .into_iter()
        .filter(|p| !setup.is_impact_sub(p.player_id))
        .map(|p| Candidate::score(p, snapshot))
        .collect();
    debug!("Selecting {} of {} eligible players ({} variant)", target, pool.len(), variant);

    let state = SelectionState::new(pool).take_top(|c| c.role() == Role::Keeper, Metric::Form, 1.min(target));
    let keeper_id = state.selected.first().map(|c| c.id());

    let min_bowlers = min_bowlers_for_count(target, &format);
    let mut state = state;
    for pass in role_passes(variant, &format, min_bowlers) {
        let count = pass_count(pass.limit, &state, target, min_bowlers);
        state = state.take_top(|c| c.role() == pass.role, pass.metric, count);
    }

    // Short on batters: the leftovers of any role take the empty seats
    let seats = target.saturating_sub(state.selected.len());
    let state = state.take_top(|_| true, Metric::Form, seats);

    let mut lineup = state.selected;
    lineup.truncate(target);
    order_for_batting(&mut lineup, keeper_id);

    let players = assign_slots(&lineup);
    let scores = aggregate_scores(&lineup);

    let mut warnings = unmet(&validate(&players, &format, target));
    if keeper_id.is_none() {
        warnings.push("No eligible wicketkeeper in the squad".to_string());
    }

    SmartXi {
        variant,
        notes: phase_notes(&players, &format),
        format,
        target_size: target,
        players,
        scores,
        warnings,
        phase_model: PhaseModel::IndexRotation,
    }
}

/// Keeper opens, pure batters follow, everyone else after; best form first
/// inside each group.
fn order_for_batting(lineup: &mut [Candidate], keeper_id: Option<PlayerId>) {
    lineup.sort_by_key(|c| {
        let group = if Some(c.id()) == keeper_id {
            0
        } else if c.role() == Role::Batter {
            1
        } else {
            2
        };
        (group, Reverse(c.scores.form))
    });
}

fn assign_slots(lineup: &[Candidate]) -> Vec<CombinationPlayer> {
    lineup
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let bowls = c.role().can_bowl();
            CombinationPlayer {
                player_id: c.id(),
                role: c.role(),
                batting_order: i as u32 + 1,
                bowling_priority: bowls.then_some(i as u32),
                is_captain: i == 0,
                is_vice_captain: i == 1,
                is_keeper: c.role() == Role::Keeper,
                batting_phase: batting_phase_for(i),
                bowling_phase: bowls.then(|| BowlingPhase::ROTATION[i % 3]),
            }
        })
        .collect()
}

fn aggregate_scores(lineup: &[Candidate]) -> LineupScores {
    let sum = |metric: Metric, bowlers_only: bool| -> Score {
        lineup
            .iter()
            .filter(|c| !bowlers_only || c.role().can_bowl())
            .map(|c| metric.of(&c.scores))
            .sum()
    };

    let total_aggression = sum(Metric::Aggression, false);
    let total_bowling_depth = sum(Metric::BowlingDepth, true);

    LineupScores {
        total_aggression,
        total_stability: sum(Metric::Stability, false),
        total_finishing: sum(Metric::Finishing, false),
        total_bowling_depth,
        total_death_bowling: sum(Metric::DeathBowling, true),
        powerplay_score: round_half_up(
            total_aggression as f64 * weights::POWERPLAY_AGGRESSION
                + total_bowling_depth as f64 * weights::POWERPLAY_BOWLING_DEPTH,
        ),
    }
}

fn phase_notes(players: &[CombinationPlayer], format: &FormatConfig) -> Vec<String> {
    if !players.iter().any(|p| p.bowling_phase.is_some()) {
        return Vec::new();
    }
    vec![format!(
        "Bowling phases rotate powerplay/middle/death down the order; {} overs are split powerplay 1-{}, middle {}-{}, death {}-{}",
        format.label,
        format.powerplay_overs,
        format.middle_start,
        format.middle_end,
        format.death_start,
        format.overs
    )]
}
