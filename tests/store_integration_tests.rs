//! Integration tests for the snapshot directory and the combinations database
//!
//! These tests verify:
//! - Squad state survives a save and reload alongside fresh imports
//! - Generated lineups can be saved, listed, reloaded and deleted
//! - Saved combinations validate against the saved setup

use std::fs;

use cricket_lineup::config::settings::AppConfig;
use cricket_lineup::database::{self, combinations, setup::ensure_schema};
use cricket_lineup::domain::{Fitness, FormatChoice, LineupDraft, MatchSetup};
use cricket_lineup::format::format_config;
use cricket_lineup::selection::{Variant, validate_combination};
use cricket_lineup::services::{SelectionService, SquadUpdate};
use tempfile::TempDir;

fn write_snapshot(dir: &TempDir) {
    let players: Vec<String> = (1..=13)
        .map(|id| {
            let hint = if id == 1 { "WK" } else { "" };
            format!(r#"{{"player_id": {id}, "name": "Player {id}", "slug": "player-{id}", "sub_title": "{hint}"}}"#)
        })
        .collect();
    fs::write(dir.path().join("players.json"), format!("[{}]", players.join(","))).unwrap();

    let stats: Vec<String> = (1..=13)
        .map(|id| {
            let bowl = if id % 2 == 0 { 12 } else { 0 };
            format!(
                r#"{{"player_id": {id}, "batting": {{"innings": 8, "runs": {}, "strike_rate": 110}}, "bowling": {{"innings": {bowl}, "wickets": {bowl}, "economy": 7.5}}}}"#,
                id * 15
            )
        })
        .collect();
    fs::write(dir.path().join("player_stats.json"), format!("[{}]", stats.join(","))).unwrap();
}

fn config(dir: &TempDir) -> AppConfig {
    let db = dir.path().join("combinations.db");
    AppConfig::new().with_store(&db.display().to_string(), &dir.path().display().to_string())
}

#[test]
fn test_squad_edits_survive_reload() {
    let dir = TempDir::new().unwrap();
    write_snapshot(&dir);
    let service = SelectionService::new(config(&dir)).unwrap();

    let update = SquadUpdate {
        fitness: Some(Fitness::Doubtful),
        available: Some(false),
        ..SquadUpdate::default()
    };
    service.update_player(4, &update).unwrap();

    let reloaded = SelectionService::new(config(&dir)).unwrap();
    let squad = reloaded.squad().unwrap();
    assert_eq!(squad.len(), 13);
    let player = squad.iter().find(|p| p.player_id == 4).unwrap();
    assert_eq!(player.fitness, Fitness::Doubtful);
    assert!(!player.available);

    let lineups = reloaded.generate(None, &[Variant::Balanced]).unwrap();
    assert!(lineups[0].players.iter().all(|p| p.player_id != 4));
}

#[test]
fn test_generated_lineup_round_trips_through_database() {
    let dir = TempDir::new().unwrap();
    write_snapshot(&dir);
    let config = config(&dir);
    let service = SelectionService::new(config.clone()).unwrap();
    let setup = MatchSetup::new(FormatChoice::T15, 11);
    let xi = service.generate(Some(setup.clone()), &[Variant::Defensive]).unwrap().remove(0);

    let combination = LineupDraft::from_players(xi.target_size, xi.players.clone())
        .into_combination("Defensive T15", "rain expected", Some(setup.format.label()));

    let pool = database::create_pool(&config.store.database_path).unwrap();
    let mut conn = database::get_connection(&pool).unwrap();
    ensure_schema(&mut conn).unwrap();
    combinations::save(&mut conn, &combination).unwrap();

    let listed = combinations::list_all(&mut conn).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].player_count, xi.players.len());

    let loaded = combinations::find_by_id(&mut conn, &combination.id).unwrap().unwrap();
    assert_eq!(loaded.players, xi.players);
    assert_eq!(loaded.notes, "rain expected");

    let checks = validate_combination(&loaded, &format_config(&setup));
    assert_eq!(checks.len(), 4);
    assert_eq!(
        checks.iter().all(|c| c.satisfied),
        xi.warnings.is_empty(),
        "saved combination should validate like the generated lineup"
    );

    assert!(combinations::delete(&mut conn, &combination.id).unwrap());
    assert!(combinations::list_all(&mut conn).unwrap().is_empty());
}

#[test]
fn test_schema_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let config = config(&dir);
    let pool = database::create_pool(&config.store.database_path).unwrap();
    let mut conn = database::get_connection(&pool).unwrap();
    ensure_schema(&mut conn).unwrap();
    ensure_schema(&mut conn).unwrap();
    assert!(combinations::list_all(&mut conn).unwrap().is_empty());
}
