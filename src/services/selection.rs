use anyhow::{Result, bail};
use log::{info, warn};
use serde::Serialize;

use crate::analysis::{
    BattingAnalysis, BowlingAnalysis, CombinationSummary, ImpactRating, batting_analysis, bowling_analysis,
    combination_summaries, format_comparison, impact_ratings,
};
use crate::config::settings::AppConfig;
use crate::domain::{Fitness, MatchSetup, PlayerId, Role, RosterSnapshot, SquadPlayer, TeamCombination};
use crate::format::impact::{ImpactCandidates, Scenario, activation_suggestions, impact_candidates, impact_scenarios};
use crate::format::requirements::{MatchRequirements, match_requirements};
use crate::format::{FormatConfig, format_config};
use crate::selection::{SmartXi, Suggestion, ValidationCheck, Variant, generate_smart_xi, suggest_xi_with, validate};
use crate::snapshot::SnapshotStore;

/// Everything worth knowing before the toss for one setup
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchPlan {
    pub format: FormatConfig,
    pub requirements: MatchRequirements,
    pub activation: Vec<String>,
    pub scenarios: Vec<Scenario>,
    pub candidates: ImpactCandidates,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SquadReport {
    pub batting: BattingAnalysis,
    pub bowling: BowlingAnalysis,
    pub formats: Vec<SmartXi>,
    pub impact: Vec<ImpactRating>,
}

/// Admin edits to one squad entry; unset fields stay as they are
#[derive(Debug, Clone, Default)]
pub struct SquadUpdate {
    pub role: Option<Role>,
    pub fitness: Option<Fitness>,
    pub available: Option<bool>,
    pub active: Option<bool>,
}

/// Loads the snapshot from the stats directory and runs the selection
/// engine over it
pub struct SelectionService {
    config: AppConfig,
    store: SnapshotStore,
}

impl SelectionService {
    pub fn new(config: AppConfig) -> Result<Self> {
        let store = SnapshotStore::new(&config.store.stats_dir)?;
        Ok(Self { config, store })
    }

    pub fn snapshot(&self) -> Result<RosterSnapshot> {
        self.store.load_snapshot()
    }

    /// The given setup, else the saved one
    pub fn resolve_setup(&self, setup: Option<MatchSetup>) -> Result<MatchSetup> {
        match setup {
            Some(setup) => Ok(setup.normalized()),
            None => self.store.load_setup(),
        }
    }

    pub fn save_setup(&self, setup: &MatchSetup) -> Result<()> {
        self.store.save_setup(setup)
    }

    pub fn generate(&self, setup: Option<MatchSetup>, variants: &[Variant]) -> Result<Vec<SmartXi>> {
        let snapshot = self.snapshot()?;
        let setup = self.resolve_setup(setup)?;
        let lineups: Vec<SmartXi> = variants
            .iter()
            .map(|&variant| generate_smart_xi(&snapshot, &setup, variant))
            .collect();

        for lineup in &lineups {
            info!(
                "Generated {} lineup for {}: {} players, {} warnings",
                lineup.variant,
                lineup.format.label,
                lineup.players.len(),
                lineup.warnings.len()
            );
        }
        Ok(lineups)
    }

    pub fn suggest(&self) -> Result<Suggestion> {
        let snapshot = self.snapshot()?;
        let suggestion = suggest_xi_with(&snapshot, &self.config.selection.suggest);
        if !suggestion.risks.is_empty() {
            warn!("Suggested lineup carries {} risks", suggestion.risks.len());
        }
        Ok(suggestion)
    }

    pub fn validate(&self, combination: &TeamCombination, setup: Option<MatchSetup>) -> Result<Vec<ValidationCheck>> {
        let setup = self.resolve_setup(setup)?;
        let format = format_config(&setup);
        let target = combination.size.unwrap_or_else(|| setup.target_size());
        Ok(validate(&combination.players, &format, target))
    }

    pub fn plan(&self, setup: Option<MatchSetup>) -> Result<MatchPlan> {
        let snapshot = self.snapshot()?;
        let setup = self.resolve_setup(setup)?;
        let format = format_config(&setup);

        Ok(MatchPlan {
            requirements: match_requirements(&setup, &format),
            activation: activation_suggestions(&setup, &format),
            scenarios: impact_scenarios(&snapshot, &setup, &format),
            candidates: impact_candidates(&snapshot, self.config.selection.shortlist_size),
            format,
        })
    }

    pub fn analyze(&self, setup: Option<MatchSetup>) -> Result<SquadReport> {
        let snapshot = self.snapshot()?;
        let setup = self.resolve_setup(setup)?;
        let format = format_config(&setup);

        Ok(SquadReport {
            batting: batting_analysis(&snapshot, &setup, &format),
            bowling: bowling_analysis(&snapshot, &format),
            formats: format_comparison(&snapshot),
            impact: impact_ratings(&snapshot, self.config.selection.impact_ratings_size),
        })
    }

    pub fn summarize(&self, combinations: &[TeamCombination]) -> Result<Vec<CombinationSummary>> {
        Ok(combination_summaries(&self.snapshot()?, combinations))
    }

    pub fn squad(&self) -> Result<Vec<SquadPlayer>> {
        self.store.load_squad()
    }

    /// Applies an admin edit to one player and persists the squad
    pub fn update_player(&self, player_id: PlayerId, update: &SquadUpdate) -> Result<SquadPlayer> {
        let mut squad = self.store.load_squad()?;
        let Some(player) = squad.iter_mut().find(|p| p.player_id == player_id) else {
            bail!("Player {} is not in the squad", player_id);
        };

        if let Some(role) = update.role {
            player.role = role;
        }
        if let Some(fitness) = update.fitness {
            player.fitness = fitness;
        }
        if let Some(available) = update.available {
            player.available = available;
        }
        if let Some(active) = update.active {
            player.active = active;
        }
        let updated = player.clone();

        self.store.save_squad(&squad)?;
        info!("Updated {} ({})", updated.name, updated.player_id);
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FormatChoice;
    use std::fs;
    use tempfile::TempDir;

    fn service(dir: &TempDir) -> SelectionService {
        let players: Vec<String> = (1..=12)
            .map(|id| {
                let hint = if id == 1 { "WK" } else { "" };
                format!(r#"{{"player_id": {}, "name": "Player {}", "sub_title": "{}"}}"#, id, id, hint)
            })
            .collect();
        fs::write(dir.path().join("players.json"), format!("[{}]", players.join(","))).unwrap();

        let stats: Vec<String> = (1..=12)
            .map(|id| {
                let bowl = if id > 6 { 10 } else { 0 };
                format!(
                    r#"{{"player_id": {}, "batting": {{"innings": 5, "runs": {}}}, "bowling": {{"innings": {}, "wickets": {}}}}}"#,
                    id,
                    id * 20,
                    bowl,
                    bowl
                )
            })
            .collect();
        fs::write(dir.path().join("player_stats.json"), format!("[{}]", stats.join(","))).unwrap();

        let config = AppConfig::new().with_store(":memory:", &dir.path().display().to_string());
        SelectionService::new(config).unwrap()
    }

    #[test]
    fn test_generate_all_variants_from_files() {
        let dir = TempDir::new().unwrap();
        let lineups = service(&dir).generate(None, &Variant::ALL).unwrap();
        assert_eq!(lineups.len(), 3);
        assert!(lineups.iter().all(|l| l.players.len() == 11));
    }

    #[test]
    fn test_saved_setup_is_used() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);
        service.save_setup(&MatchSetup::new(FormatChoice::T10, 8)).unwrap();
        let lineups = service.generate(None, &[Variant::Balanced]).unwrap();
        assert_eq!(lineups[0].format.label, "T10");
        assert_eq!(lineups[0].players.len(), 8);
    }

    #[test]
    fn test_update_player_persists() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);
        let update = SquadUpdate {
            fitness: Some(Fitness::Injured),
            ..SquadUpdate::default()
        };
        service.update_player(3, &update).unwrap();
        let squad = service.squad().unwrap();
        assert_eq!(squad.iter().find(|p| p.player_id == 3).map(|p| p.fitness), Some(Fitness::Injured));
        assert!(service.update_player(99, &update).is_err());
    }

    #[test]
    fn test_plan_and_analysis() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);
        let plan = service.plan(None).unwrap();
        assert_eq!(plan.format.label, "T20");
        assert!(plan.scenarios.is_empty());
        assert_eq!(plan.candidates.batting.len(), 5);

        let report = service.analyze(None).unwrap();
        assert_eq!(report.formats.len(), 4);
        assert_eq!(report.bowling.bowlers.len(), 6);
    }

    #[test]
    fn test_out_of_range_setup_is_clamped_before_planning() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);
        let body = r#"{"format":{"type":"CUSTOM","overs":4000000000},"playerCount":11,
                       "impactSubEnabled":true,"impactSubs":[{"player_id":12,"type":"flexible"}]}"#;
        let setup: MatchSetup = serde_json::from_str(body).unwrap();

        let plan = service.plan(Some(setup.clone())).unwrap();
        assert_eq!(plan.format.overs, 50);
        assert_eq!(plan.scenarios.len(), 4);

        let report = service.analyze(Some(setup)).unwrap();
        assert_eq!(report.bowling.overs, 50);
    }

    #[test]
    fn test_saved_setup_file_is_clamped() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);
        fs::write(
            dir.path().join("match_setup.json"),
            r#"{"format":{"type":"CUSTOM","overs":0},"playerCount":2}"#,
        )
        .unwrap();
        let setup = service.resolve_setup(None).unwrap();
        assert_eq!(setup.format, FormatChoice::Custom { overs: 2 });
        assert_eq!(setup.player_count, 5);
        let plan = service.plan(None).unwrap();
        assert!(plan.format.middle_start <= plan.format.middle_end + 1);
    }
}
