use std::cmp::Reverse;

use serde::Serialize;

use crate::domain::{FormatChoice, MatchSetup, PlayerId, PlayerStats, RosterSnapshot, TeamCombination};
use crate::scoring::{Score, aggression_index, round_half_up};
use crate::selection::{SmartXi, Variant, generate_smart_xi};

/// Balanced lineup for every named format at full strength, impact
/// substitutes off, so the aggregate scores can be compared side by side
pub fn format_comparison(snapshot: &RosterSnapshot) -> Vec<SmartXi> {
    FormatChoice::NAMED
        .iter()
        .map(|&format| generate_smart_xi(snapshot, &MatchSetup::new(format, 11), Variant::Balanced))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactRating {
    pub player_id: PlayerId,
    pub name: String,
    pub impact: Score,
    pub batting: Score,
    pub bowling: Score,
    pub fielding: Score,
}

impl ImpactRating {
    fn rate(stats: &PlayerStats, name: &str) -> Self {
        let batting = stats.runs() * 0.3 + stats.batting_average() * 2.0 + stats.strike_rate() * 0.5;
        let economy = stats.economy();
        let bowling = stats.wickets() * 5.0 + if economy > 0.0 { (10.0 - economy) * 3.0 } else { 0.0 };
        let fielding = stats.catches() * 3.0 + stats.run_outs() * 5.0;
        Self {
            player_id: stats.player_id,
            name: name.to_string(),
            impact: round_half_up(batting + bowling + fielding),
            batting: round_half_up(batting),
            bowling: round_half_up(bowling),
            fielding: round_half_up(fielding),
        }
    }
}

/// All-round contribution of every player who has batted, highest first
pub fn impact_ratings(snapshot: &RosterSnapshot, limit: usize) -> Vec<ImpactRating> {
    let mut ratings: Vec<ImpactRating> = snapshot
        .all_stats()
        .filter(|s| s.batting_innings() > 0.0)
        .map(|s| {
            let name = snapshot.player(s.player_id).map(|p| p.name.as_str()).unwrap_or(&s.name);
            ImpactRating::rate(s, name)
        })
        .collect();
    ratings.sort_by_key(|r| (Reverse(r.impact), r.player_id));
    ratings.truncate(limit);
    ratings
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinationSummary {
    pub id: String,
    pub name: String,
    pub format: Option<String>,
    pub runs: f64,
    pub wickets: f64,
    pub aggression: Score,
}

/// Career totals of each saved combination's players
pub fn combination_summaries(snapshot: &RosterSnapshot, combinations: &[TeamCombination]) -> Vec<CombinationSummary> {
    combinations
        .iter()
        .map(|combo| {
            let stats: Vec<PlayerStats> = combo.players.iter().map(|p| snapshot.stats_for(p.player_id)).collect();
            CombinationSummary {
                id: combo.id.clone(),
                name: combo.name.clone(),
                format: combo.format.clone(),
                runs: stats.iter().map(|s| s.runs()).sum(),
                wickets: stats.iter().map(|s| s.wickets()).sum(),
                aggression: stats.iter().map(aggression_index).sum(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{BattingStats, BowlingStats, FieldingStats};
    use crate::domain::{LineupDraft, Role, SquadPlayer};

    fn all_rounder_stats(id: PlayerId) -> PlayerStats {
        PlayerStats {
            player_id: id,
            name: format!("Stats {}", id),
            batting: Some(BattingStats {
                innings: Some(10.0),
                runs: Some(200.0),
                average: Some(20.0),
                strike_rate: Some(120.0),
                ..BattingStats::default()
            }),
            bowling: Some(BowlingStats {
                wickets: Some(10.0),
                economy: Some(7.0),
                ..BowlingStats::default()
            }),
            fielding: Some(FieldingStats {
                catches: Some(4.0),
                run_outs: Some(1.0),
                ..FieldingStats::default()
            }),
        }
    }

    #[test]
    fn test_impact_rating_components() {
        let snapshot = RosterSnapshot::new(vec![SquadPlayer::new(1, "Ace", Role::AllRounder)], vec![all_rounder_stats(1)]);
        let ratings = impact_ratings(&snapshot, 12);
        assert_eq!(ratings.len(), 1);
        // 60 + 40 + 60 batting, 50 + 9 bowling, 12 + 5 fielding
        assert_eq!(ratings[0].batting, 160);
        assert_eq!(ratings[0].bowling, 59);
        assert_eq!(ratings[0].fielding, 17);
        assert_eq!(ratings[0].impact, 236);
        assert_eq!(ratings[0].name, "Ace");
    }

    #[test]
    fn test_unbatted_players_are_not_rated() {
        let snapshot = RosterSnapshot::new(Vec::new(), vec![PlayerStats::empty(9)]);
        assert!(impact_ratings(&snapshot, 12).is_empty());
    }

    #[test]
    fn test_format_comparison_covers_named_formats() {
        let comparison = format_comparison(&RosterSnapshot::default());
        let labels: Vec<&str> = comparison.iter().map(|xi| xi.format.label.as_str()).collect();
        assert_eq!(labels, vec!["T20", "T15", "T10", "T5"]);
    }

    #[test]
    fn test_combination_summary_totals() {
        let snapshot = RosterSnapshot::new(Vec::new(), vec![all_rounder_stats(1), all_rounder_stats(2)]);
        let mut draft = LineupDraft::new(11);
        draft.add(&SquadPlayer::new(1, "One", Role::AllRounder));
        draft.add(&SquadPlayer::new(2, "Two", Role::AllRounder));
        let combo = draft.into_combination("Pair", "", Some("T20".to_string()));
        let summaries = combination_summaries(&snapshot, &[combo]);
        assert_eq!(summaries[0].runs, 400.0);
        assert_eq!(summaries[0].wickets, 20.0);
        assert_eq!(summaries[0].aggression, 144);
    }
}
