//! Property tests for the lineup selector
//!
//! These tests verify, over random squads and setups:
//! - No player is picked twice and only eligible players are picked
//! - The lineup never exceeds the target and fills it when it can
//! - Batting order is dense and leadership is assigned once
//! - Identical inputs give identical lineups

use std::collections::HashSet;

use cricket_lineup::domain::models::{BattingStats, BowlingStats};
use cricket_lineup::domain::{
    Fitness, FormatChoice, MatchSetup, PlayerStats, Role, RosterSnapshot, SquadPlayer,
};
use cricket_lineup::selection::{Variant, generate_smart_xi, suggest_xi};
use proptest::prelude::*;

const ROLES: [Role; 4] = [Role::Batter, Role::Bowler, Role::AllRounder, Role::Keeper];

#[derive(Debug, Clone)]
struct Entry {
    role: usize,
    runs: f64,
    strike_rate: f64,
    wickets: f64,
    economy: f64,
    eligible: bool,
}

fn entry() -> impl Strategy<Value = Entry> {
    (0..4usize, 0.0..600.0f64, 0.0..220.0f64, 0.0..40.0f64, 0.0..12.0f64, prop::bool::weighted(0.85)).prop_map(
        |(role, runs, strike_rate, wickets, economy, eligible)| Entry {
            role,
            runs,
            strike_rate,
            wickets,
            economy,
            eligible,
        },
    )
}

fn roster(entries: &[Entry]) -> RosterSnapshot {
    let squad = entries
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let mut player = SquadPlayer::new(i as i64 + 1, &format!("Player {}", i + 1), ROLES[e.role]);
            if !e.eligible {
                player.fitness = Fitness::Injured;
            }
            player
        })
        .collect();
    let stats = entries
        .iter()
        .enumerate()
        .map(|(i, e)| PlayerStats {
            player_id: i as i64 + 1,
            batting: Some(BattingStats {
                innings: Some(10.0),
                runs: Some(e.runs),
                strike_rate: Some(e.strike_rate),
                ..BattingStats::default()
            }),
            bowling: Some(BowlingStats {
                wickets: Some(e.wickets),
                economy: Some(e.economy),
                ..BowlingStats::default()
            }),
            ..PlayerStats::default()
        })
        .collect();
    RosterSnapshot::new(squad, stats)
}

fn setup() -> impl Strategy<Value = MatchSetup> {
    (0..5usize, 2..=50u32, 5..=15usize).prop_map(|(format, overs, players)| {
        let format = match format {
            0 => FormatChoice::T20,
            1 => FormatChoice::T15,
            2 => FormatChoice::T10,
            3 => FormatChoice::T5,
            _ => FormatChoice::Custom { overs },
        };
        MatchSetup::new(format, players)
    })
}

fn variant() -> impl Strategy<Value = Variant> {
    prop::sample::select(Variant::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_lineup_is_well_formed(
        entries in prop::collection::vec(entry(), 0..24),
        setup in setup(),
        variant in variant(),
    ) {
        let snapshot = roster(&entries);
        let xi = generate_smart_xi(&snapshot, &setup, variant);
        let target = setup.target_size();
        let eligible = entries.iter().filter(|e| e.eligible).count();

        let ids: HashSet<i64> = xi.players.iter().map(|p| p.player_id).collect();
        prop_assert_eq!(ids.len(), xi.players.len());
        prop_assert!(xi.players.len() <= target);
        prop_assert_eq!(xi.players.len(), eligible.min(target));
        prop_assert!(xi.players.iter().all(|p| entries[(p.player_id - 1) as usize].eligible));

        let orders: Vec<u32> = xi.players.iter().map(|p| p.batting_order).collect();
        let dense: Vec<u32> = (1..=xi.players.len() as u32).collect();
        prop_assert_eq!(orders, dense);

        if xi.players.len() >= 2 {
            let captains: Vec<_> = xi.players.iter().filter(|p| p.is_captain).collect();
            let vices: Vec<_> = xi.players.iter().filter(|p| p.is_vice_captain).collect();
            prop_assert_eq!(captains.len(), 1);
            prop_assert_eq!(vices.len(), 1);
            prop_assert_ne!(captains[0].player_id, vices[0].player_id);
        }
    }

    #[test]
    fn prop_generation_is_deterministic(
        entries in prop::collection::vec(entry(), 0..24),
        setup in setup(),
        variant in variant(),
    ) {
        let snapshot = roster(&entries);
        let first = generate_smart_xi(&snapshot, &setup, variant);
        let second = generate_smart_xi(&snapshot, &setup, variant);
        prop_assert_eq!(first.players, second.players);
        prop_assert_eq!(first.warnings, second.warnings);
        prop_assert_eq!(first.scores, second.scores);
    }

    #[test]
    fn prop_suggestion_never_repeats_players(entries in prop::collection::vec(entry(), 0..30)) {
        let suggestion = suggest_xi(&roster(&entries));
        let mut ids: Vec<i64> = suggestion.main.iter().map(|p| p.player_id).collect();
        prop_assert!(ids.len() <= 11);
        ids.extend(suggestion.alternative.iter().map(|p| p.player_id));
        let unique: HashSet<i64> = ids.iter().copied().collect();
        prop_assert_eq!(unique.len(), ids.len());
    }
}

#[test]
fn test_balanced_eleven_fields_five_bowling_options() {
    let mut entries = Vec::new();
    for (role, count) in [(3, 1), (1, 4), (2, 2), (0, 4)] {
        for _ in 0..count {
            entries.push(Entry {
                role,
                runs: 200.0,
                strike_rate: 120.0,
                wickets: 10.0,
                economy: 7.0,
                eligible: true,
            });
        }
    }
    let setup = MatchSetup::new(FormatChoice::T20, 11);
    let xi = generate_smart_xi(&roster(&entries), &setup, Variant::Balanced);
    assert_eq!(xi.players.len(), 11);
    assert!(xi.players.iter().filter(|p| p.role.can_bowl()).count() >= 5);
    assert!(xi.warnings.is_empty());
}
