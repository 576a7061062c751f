use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::roster::merge_squad;
use crate::domain::{MatchSetup, Player, PlayerStats, RosterSnapshot, SquadPlayer};
use crate::errors::{store_context, with_parse_context, with_store_context};

pub const PLAYERS_FILE: &str = "players.json";
pub const STATS_FILE: &str = "player_stats.json";
pub const SQUAD_FILE: &str = "squad.json";
pub const SETUP_FILE: &str = "match_setup.json";

/// Directory of JSON files holding the roster import, career stats and the
/// admins' saved selection state
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        with_store_context(fs::create_dir_all(&dir), "create", &dir.display().to_string())?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn load_players(&self) -> Result<Vec<Player>> {
        self.load_or_empty(PLAYERS_FILE)
    }

    pub fn load_stats(&self) -> Result<Vec<PlayerStats>> {
        self.load_or_empty(STATS_FILE)
    }

    /// Saved squad merged with any newly imported players
    pub fn load_squad(&self) -> Result<Vec<SquadPlayer>> {
        let players = self.load_players()?;
        let stats = self.load_stats()?;
        let saved: Vec<SquadPlayer> = self.read_json_opt(SQUAD_FILE)?.unwrap_or_default();
        Ok(merge_squad(saved, &players, &stats))
    }

    pub fn save_squad(&self, squad: &[SquadPlayer]) -> Result<()> {
        self.write_json(SQUAD_FILE, &squad)?;
        info!("Saved squad of {} players", squad.len());
        Ok(())
    }

    /// Saved match setup, or the default T20 setup when none was saved
    pub fn load_setup(&self) -> Result<MatchSetup> {
        let setup: Option<MatchSetup> = self.read_json_opt(SETUP_FILE)?;
        Ok(setup.map(MatchSetup::normalized).unwrap_or_default())
    }

    pub fn save_setup(&self, setup: &MatchSetup) -> Result<()> {
        self.write_json(SETUP_FILE, setup)?;
        info!("Saved match setup: {} with {} players", setup.format.label(), setup.player_count);
        Ok(())
    }

    pub fn load_snapshot(&self) -> Result<RosterSnapshot> {
        let squad = self.load_squad()?;
        let stats = self.load_stats()?;
        info!("Loaded snapshot: {} squad players, {} stat records", squad.len(), stats.len());
        Ok(RosterSnapshot::new(squad, stats))
    }

    // --- Helper Methods ---

    fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    fn load_or_empty<T: for<'de> Deserialize<'de>>(&self, file: &str) -> Result<Vec<T>> {
        match self.read_json_opt(file)? {
            Some(items) => Ok(items),
            None => {
                warn!("{} not found in {}", file, self.dir.display());
                Ok(Vec::new())
            }
        }
    }

    fn write_json<T: Serialize + ?Sized>(&self, file: &str, data: &T) -> Result<()> {
        let json = with_parse_context(serde_json::to_string_pretty(data), file)?;
        with_store_context(fs::write(self.path(file), json), "write", file)
    }

    fn read_json_opt<T: for<'de> Deserialize<'de>>(&self, file: &str) -> Result<Option<T>> {
        let path = self.path(file);
        if !path.exists() {
            return Ok(None);
        }

        let json = with_store_context(fs::read_to_string(&path), "read", file)?;
        let data = serde_json::from_str(&json).with_context(|| {
            format!(
                "{}. First 200 chars: {}",
                store_context("parse", file),
                json.chars().take(200).collect::<String>()
            )
        })?;
        Ok(Some(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FormatChoice, Role};
    use tempfile::TempDir;

    fn write(dir: &TempDir, file: &str, json: &str) {
        fs::write(dir.path().join(file), json).unwrap();
    }

    #[test]
    fn test_empty_directory_loads_empty_snapshot() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path()).unwrap();
        let snapshot = store.load_snapshot().unwrap();
        assert!(snapshot.squad.is_empty());
        assert_eq!(store.load_setup().unwrap(), MatchSetup::default());
    }

    #[test]
    fn test_import_infers_roles() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            PLAYERS_FILE,
            r#"[{"player_id": 1, "name": "Keeper", "sub_title": "WK"},
                {"player_id": 2, "name": "Seamer", "profile_pic_url": "p.png"}]"#,
        );
        write(
            &dir,
            STATS_FILE,
            r#"[{"player_id": 2, "batting": {"innings": 1}, "bowling": {"innings": 9, "wickets": 12}}]"#,
        );
        let store = SnapshotStore::new(dir.path()).unwrap();
        let squad = store.load_squad().unwrap();
        assert_eq!(squad[0].role, Role::Keeper);
        assert_eq!(squad[1].role, Role::AllRounder);
        assert_eq!(squad[1].photo, "p.png");
    }

    #[test]
    fn test_saved_state_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path()).unwrap();

        let mut player = SquadPlayer::new(5, "Spinner", Role::Bowler);
        player.available = false;
        store.save_squad(&[player]).unwrap();
        let setup = MatchSetup::new(FormatChoice::T10, 9);
        store.save_setup(&setup).unwrap();

        let squad = store.load_squad().unwrap();
        assert_eq!(squad.len(), 1);
        assert!(!squad[0].available);
        assert_eq!(store.load_setup().unwrap(), setup);
    }

    #[test]
    fn test_corrupt_file_reports_context() {
        let dir = TempDir::new().unwrap();
        write(&dir, SETUP_FILE, "{not json");
        let store = SnapshotStore::new(dir.path()).unwrap();
        let err = store.load_setup().unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse snapshot file: match_setup.json"));
    }
}
