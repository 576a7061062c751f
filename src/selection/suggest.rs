use log::debug;
use serde::Serialize;

use super::eligibility::eligible;
use super::pool::{Candidate, Metric, SelectionState, rank_by};
use crate::config::settings::SuggestSettings;
use crate::domain::{BowlingStyle, PlayerId, Role, RosterSnapshot};
use crate::scoring::Score;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedPlayer {
    pub player_id: PlayerId,
    pub name: String,
    pub role: Role,
    pub bowling_style: BowlingStyle,
    pub form: Score,
}

impl RankedPlayer {
    fn from_candidate(c: &Candidate) -> Self {
        Self {
            player_id: c.id(),
            name: c.player.name.clone(),
            role: c.role(),
            bowling_style: c.player.bowling_style,
            form: c.scores.form,
        }
    }
}

/// Quick lineup from whoever is available, a backup lineup from the rest,
/// and the structural risks of the main one.
#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    pub main: Vec<RankedPlayer>,
    pub alternative: Vec<RankedPlayer>,
    pub risks: Vec<String>,
}

pub fn suggest_xi(snapshot: &RosterSnapshot) -> Suggestion {
    suggest_xi_with(snapshot, &SuggestSettings::default())
}

/// Best-effort suggestion; never fails, short pools only add risks.
///
/// The structural picks walk the form-sorted pool from its end, so among
/// several keepers (or bowlers, or all-rounders) the lowest-form ones are
/// taken first. Only the leftover seats go to the top of the form table.
pub fn suggest_xi_with(snapshot: &RosterSnapshot, settings: &SuggestSettings) -> Suggestion {
    let mut ranked: Vec<Candidate> = eligible(&snapshot.squad)
        .into_iter()
        .map(|p| Candidate::score(p, snapshot))
        .collect();
    rank_by(&mut ranked, Metric::Form);

    let mut risks = Vec::new();
    let mut state = SelectionState::new(ranked.clone());

    let requirements = [
        (Role::Keeper, settings.keepers, "wicketkeepers"),
        (Role::Bowler, settings.pure_bowlers, "pure bowlers"),
        (Role::AllRounder, settings.all_rounders, "all-rounders"),
    ];
    for (role, count, label) in requirements {
        let before = state.selected.len();
        state = state.take_from_end(|c| c.role() == role, count);
        let picked = state.selected.len() - before;
        if picked < count {
            risks.push(format!("Only {}/{} {} available", picked, count, label));
        }
    }

    let seats = settings.lineup_size.saturating_sub(state.selected.len());
    let state = state.take_top(|_| true, Metric::Form, seats);

    let mut main = state.selected;
    main.truncate(settings.lineup_size);

    let alternative: Vec<RankedPlayer> = ranked
        .iter()
        .filter(|c| !main.iter().any(|m| m.id() == c.id()))
        .take(settings.lineup_size)
        .map(RankedPlayer::from_candidate)
        .collect();

    let bowling_options = main.iter().filter(|c| c.role().can_bowl()).count();
    let batting_options = main.iter().filter(|c| c.role().can_bat()).count();
    if bowling_options < settings.min_bowling_options {
        risks.push(format!(
            "Only {} bowling options in XI (need {}+)",
            bowling_options, settings.min_bowling_options
        ));
    }
    if batting_options < settings.min_batting_options {
        risks.push(format!("Only {} batting options", batting_options));
    }
    if main.len() < settings.lineup_size {
        risks.push(format!("Only {} fit & available players", main.len()));
    }
    debug!("Suggested {} players with {} risks", main.len(), risks.len());

    Suggestion {
        main: main.iter().map(RankedPlayer::from_candidate).collect(),
        alternative,
        risks,
    }
}
