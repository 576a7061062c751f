use serde::Serialize;

use super::catalog::FormatConfig;
use crate::domain::{ImpactSubKind, MatchSetup, PlayerId, Role, RosterSnapshot};
use crate::scoring::{PlayerScores, Score};
use crate::selection::eligible;

/// When to bring each kind of designated substitute on
pub fn activation_suggestions(setup: &MatchSetup, format: &FormatConfig) -> Vec<String> {
    let subs = setup.active_impact_subs();
    let has = |kind| subs.iter().any(|s| s.kind == kind);

    let mut suggestions = Vec::new();
    if has(ImpactSubKind::Batting) {
        suggestions.push(format!(
            "Activate batting impact after {} overs if chasing 8+ RPO",
            format.overs / 2
        ));
    }
    if has(ImpactSubKind::Bowling) {
        suggestions.push(format!(
            "Activate bowling impact during death (over {}+) if defending",
            format.death_start
        ));
    }
    if has(ImpactSubKind::Flexible) {
        suggestions.push("Flexible sub: assess match situation at innings break".to_string());
    }
    suggestions
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub title: String,
    pub description: String,
    pub suggestion: String,
    pub sub_kind: ImpactSubKind,
    /// Rough win-probability gain in percent
    pub win_boost: u32,
}

struct NamedSub {
    name: String,
    role: Role,
    kind: ImpactSubKind,
}

/// Tactical situations and which designated substitute answers them
pub fn impact_scenarios(snapshot: &RosterSnapshot, setup: &MatchSetup, format: &FormatConfig) -> Vec<Scenario> {
    let subs: Vec<NamedSub> = setup
        .active_impact_subs()
        .iter()
        .map(|s| {
            let player = snapshot.player(s.player_id);
            NamedSub {
                name: player.map(|p| p.name.clone()).unwrap_or_else(|| "Unknown".to_string()),
                role: player.map(|p| p.role).unwrap_or(Role::Batter),
                kind: s.kind,
            }
        })
        .collect();
    if subs.is_empty() {
        return Vec::new();
    }

    let first = |kind: ImpactSubKind| subs.iter().find(|s| s.kind == kind);
    let batting = first(ImpactSubKind::Batting);
    let bowling = first(ImpactSubKind::Bowling);
    let flexible = first(ImpactSubKind::Flexible);
    let specialist_bowler = subs
        .iter()
        .find(|s| s.kind == ImpactSubKind::Bowling && s.role == Role::Bowler);

    let defending = match (bowling, flexible) {
        (Some(b), _) => (
            format!("Activate {} (Bowling Impact) at over {} to tighten death overs.", b.name, format.death_start),
            ImpactSubKind::Bowling,
            12,
        ),
        (None, Some(f)) => (
            format!("Use {} (Flexible) as a bowling change at over {}.", f.name, format.overs * 6 / 10),
            ImpactSubKind::Flexible,
            7,
        ),
        (None, None) => (
            "No bowling impact sub available, consider swapping a batter for a bowler.".to_string(),
            ImpactSubKind::Flexible,
            0,
        ),
    };

    let chasing = match (batting, flexible) {
        (Some(b), _) => (
            format!("Activate {} (Batting Impact) after over {} for a power finish.", b.name, format.overs / 2),
            ImpactSubKind::Batting,
            15,
        ),
        (None, Some(f)) => (
            format!("Deploy {} at over {} to accelerate.", f.name, format.overs * 4 / 10),
            ImpactSubKind::Flexible,
            9,
        ),
        (None, None) => (
            "No batting impact sub available, adjust aggression in existing lineup.".to_string(),
            ImpactSubKind::Flexible,
            0,
        ),
    };

    let slowing = match (specialist_bowler, flexible) {
        (Some(b), _) => format!(
            "Bring in {} to exploit slow conditions in middle overs ({}-{}).",
            b.name, format.middle_start, format.middle_end
        ),
        (None, Some(f)) => format!("{} can adapt, deploy as a change bowler to break partnerships.", f.name),
        (None, None) => "Consider existing bowlers for spin options.".to_string(),
    };

    let collapse = match (batting, flexible) {
        (Some(b), _) => (
            format!("Bring {} immediately to stabilize innings. Focus on building partnerships.", b.name),
            ImpactSubKind::Batting,
            18,
        ),
        (None, Some(f)) => (
            format!("Deploy {} as stabilizer, shift to accumulation mode.", f.name),
            ImpactSubKind::Flexible,
            10,
        ),
        (None, None) => (
            "Existing middle order must absorb pressure.".to_string(),
            ImpactSubKind::Flexible,
            0,
        ),
    };

    vec![
        Scenario {
            title: "Defending Low Total".to_string(),
            description: format!("You're defending under {} runs. Bowling pressure is critical.", format.overs * 6),
            suggestion: defending.0,
            sub_kind: defending.1,
            win_boost: defending.2,
        },
        Scenario {
            title: "Chasing High Target".to_string(),
            description: "Required rate above 8 RPO. Need batting firepower.".to_string(),
            suggestion: chasing.0,
            sub_kind: chasing.1,
            win_boost: chasing.2,
        },
        Scenario {
            title: "Pitch Slowing Down".to_string(),
            description: "Ball is gripping, spinners becoming effective.".to_string(),
            suggestion: slowing,
            sub_kind: ImpactSubKind::Bowling,
            win_boost: 8,
        },
        Scenario {
            title: "Early Wickets Fallen".to_string(),
            description: "3+ wickets down in powerplay, need stability.".to_string(),
            suggestion: collapse.0,
            sub_kind: collapse.1,
            win_boost: collapse.2,
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactCandidate {
    pub player_id: PlayerId,
    pub name: String,
    pub role: Role,
    pub score: Score,
    pub form: Score,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImpactCandidates {
    pub batting: Vec<ImpactCandidate>,
    pub bowling: Vec<ImpactCandidate>,
}

/// Best eligible batting candidates by aggression and bowling candidates by
/// bowling depth
pub fn impact_candidates(snapshot: &RosterSnapshot, limit: usize) -> ImpactCandidates {
    let scored: Vec<_> = eligible(&snapshot.squad)
        .into_iter()
        .map(|p| (p, PlayerScores::compute(&snapshot.stats_for(p.player_id))))
        .collect();

    let shortlist = |bowlers_only: bool, metric: fn(&PlayerScores) -> Score| {
        let mut list: Vec<ImpactCandidate> = scored
            .iter()
            .filter(|(p, _)| !bowlers_only || p.role.can_bowl())
            .map(|(p, s)| ImpactCandidate {
                player_id: p.player_id,
                name: p.name.clone(),
                role: p.role,
                score: metric(s),
                form: s.form,
            })
            .collect();
        list.sort_by_key(|c| std::cmp::Reverse(c.score));
        list.truncate(limit);
        list
    };

    ImpactCandidates {
        batting: shortlist(false, |s| s.aggression),
        bowling: shortlist(true, |s| s.bowling_depth),
    }
}
