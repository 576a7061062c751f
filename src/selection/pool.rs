use std::cmp::Reverse;

use crate::domain::{PlayerId, Role, RosterSnapshot, SquadPlayer};
use crate::scoring::{PlayerScores, Score};

/// Which composite score a selection pass ranks by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Form,
    Aggression,
    Stability,
    Finishing,
    BowlingDepth,
    DeathBowling,
}

impl Metric {
    pub fn of(&self, scores: &PlayerScores) -> Score {
        match self {
            Metric::Form => scores.form,
            Metric::Aggression => scores.aggression,
            Metric::Stability => scores.stability,
            Metric::Finishing => scores.finishing,
            Metric::BowlingDepth => scores.bowling_depth,
            Metric::DeathBowling => scores.death_bowling,
        }
    }
}

/// A squad player paired with their precomputed scores
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub player: &'a SquadPlayer,
    pub scores: PlayerScores,
}

impl<'a> Candidate<'a> {
    pub fn score(player: &'a SquadPlayer, snapshot: &RosterSnapshot) -> Self {
        let stats = snapshot.stats_for(player.player_id);
        Self {
            player,
            scores: PlayerScores::compute(&stats),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.player.player_id
    }

    pub fn role(&self) -> Role {
        self.player.role
    }
}

/// Stable descending sort on one metric; ties keep their incoming order
pub fn rank_by<'a>(candidates: &mut [Candidate<'a>], metric: Metric) {
    candidates.sort_by_key(|c| Reverse(metric.of(&c.scores)));
}

/// Remaining pool and picks so far. Every step consumes the state and
/// returns the next one, so a player can only ever be picked once.
#[derive(Debug, Clone, Default)]
pub struct SelectionState<'a> {
    pub remaining: Vec<Candidate<'a>>,
    pub selected: Vec<Candidate<'a>>,
}

impl<'a> SelectionState<'a> {
    pub fn new(pool: Vec<Candidate<'a>>) -> Self {
        Self {
            remaining: pool,
            selected: Vec::new(),
        }
    }

    /// Picks up to `count` matching candidates, best `metric` first
    pub fn take_top(self, filter: impl Fn(&Candidate<'a>) -> bool, metric: Metric, count: usize) -> Self {
        let mut matching: Vec<Candidate<'a>> = self.remaining.iter().filter(|c| filter(*c)).copied().collect();
        rank_by(&mut matching, metric);
        matching.truncate(count);
        self.extract(matching)
    }

    /// Picks up to `count` matching candidates walking the pool from its end
    pub fn take_from_end(self, filter: impl Fn(&Candidate<'a>) -> bool, count: usize) -> Self {
        let picks: Vec<Candidate<'a>> = self
            .remaining
            .iter()
            .rev()
            .filter(|c| filter(*c))
            .take(count)
            .copied()
            .collect();
        self.extract(picks)
    }

    pub fn count_selected(&self, filter: impl Fn(&Candidate<'a>) -> bool) -> usize {
        self.selected.iter().filter(|c| filter(*c)).count()
    }

    fn extract(self, picks: Vec<Candidate<'a>>) -> Self {
        let remaining = self
            .remaining
            .into_iter()
            .filter(|c| !picks.iter().any(|p| p.id() == c.id()))
            .collect();
        let mut selected = self.selected;
        selected.extend(picks);
        Self { remaining, selected }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PlayerStats;
    use crate::domain::models::BattingStats;

    fn snapshot(forms: &[(PlayerId, Role, f64)]) -> RosterSnapshot {
        let squad = forms.iter().map(|&(id, role, _)| SquadPlayer::new(id, "P", role)).collect();
        let stats = forms
            .iter()
            .map(|&(id, _, runs)| PlayerStats {
                player_id: id,
                batting: Some(BattingStats {
                    runs: Some(runs),
                    ..BattingStats::default()
                }),
                ..PlayerStats::default()
            })
            .collect();
        RosterSnapshot::new(squad, stats)
    }

    fn ids(candidates: &[Candidate]) -> Vec<PlayerId> {
        candidates.iter().map(|c| c.id()).collect()
    }

    #[test]
    fn test_take_top_orders_by_metric_and_shrinks_pool() {
        let snap = snapshot(&[(1, Role::Batter, 50.0), (2, Role::Bowler, 500.0), (3, Role::Batter, 250.0)]);
        let pool = snap.squad.iter().map(|p| Candidate::score(p, &snap)).collect();
        let state = SelectionState::new(pool).take_top(|c| c.role() == Role::Batter, Metric::Form, 5);
        assert_eq!(ids(&state.selected), vec![3, 1]);
        assert_eq!(ids(&state.remaining), vec![2]);
    }

    #[test]
    fn test_take_from_end_walks_backwards() {
        let snap = snapshot(&[(1, Role::Bowler, 0.0), (2, Role::Bowler, 0.0), (3, Role::Bowler, 0.0)]);
        let pool = snap.squad.iter().map(|p| Candidate::score(p, &snap)).collect();
        let state = SelectionState::new(pool).take_from_end(|_| true, 2);
        assert_eq!(ids(&state.selected), vec![3, 2]);
        assert_eq!(ids(&state.remaining), vec![1]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let snap = snapshot(&[(4, Role::Batter, 100.0), (5, Role::Batter, 100.0), (6, Role::Batter, 100.0)]);
        let mut pool: Vec<_> = snap.squad.iter().map(|p| Candidate::score(p, &snap)).collect();
        rank_by(&mut pool, Metric::Form);
        assert_eq!(ids(&pool), vec![4, 5, 6]);
    }
}
