use anyhow::{Context, Result, anyhow};
use rusqlite::{OptionalExtension, params};

use super::connection::DbConn;
use super::models::{CombinationOverview, CombinationPlayerRow, CombinationRow};
use crate::domain::{BattingPhase, BowlingPhase, CombinationPlayer, Role, TeamCombination};
use crate::errors::combination_context;

const COMBINATION_COLUMNS: &str = "id, name, created, notes, format, size";
const PLAYER_COLUMNS: &str = "combination_id, player_id, role, batting_order, bowling_priority, is_captain, is_vice_captain, is_keeper, batting_phase, bowling_phase";

/// Inserts the combination, replacing any stored one with the same id
pub fn save(conn: &mut DbConn, combination: &TeamCombination) -> Result<()> {
    let tx = conn
        .transaction()
        .with_context(|| combination_context("start saving", &combination.id))?;

    tx.execute(
        "DELETE FROM combination_players WHERE combination_id = ?1",
        params![combination.id],
    )?;
    tx.execute(
        &format!("INSERT OR REPLACE INTO combinations ({}) VALUES (?1, ?2, ?3, ?4, ?5, ?6)", COMBINATION_COLUMNS),
        params![
            combination.id,
            combination.name,
            combination.created,
            combination.notes,
            combination.format,
            combination.size
        ],
    )
    .with_context(|| combination_context("insert", &combination.id))?;

    let sql = format!(
        "INSERT INTO combination_players ({}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        PLAYER_COLUMNS
    );
    for player in &combination.players {
        tx.execute(
            &sql,
            params![
                combination.id,
                player.player_id,
                player.role.as_str(),
                player.batting_order,
                player.bowling_priority,
                player.is_captain,
                player.is_vice_captain,
                player.is_keeper,
                player.batting_phase.as_str(),
                player.bowling_phase.as_ref().map(|p| p.as_str())
            ],
        )
        .with_context(|| format!("Failed to insert player {} of combination {}", player.player_id, combination.id))?;
    }

    tx.commit()
        .with_context(|| combination_context("commit", &combination.id))
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<CombinationOverview>> {
    let sql = "SELECT c.id, c.name, c.created, c.format, COUNT(p.player_id) \
               FROM combinations c LEFT JOIN combination_players p ON p.combination_id = c.id \
               GROUP BY c.id ORDER BY c.created DESC, c.id DESC";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_overview_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list combinations")?;

    Ok(rows)
}

pub fn find_by_id(conn: &mut DbConn, id: &str) -> Result<Option<TeamCombination>> {
    let sql = format!("SELECT {} FROM combinations WHERE id = ?1", COMBINATION_COLUMNS);
    let row = conn
        .query_row(&sql, params![id], parse_combination_row)
        .optional()
        .with_context(|| combination_context("query", id))?;

    let Some(row) = row else {
        return Ok(None);
    };
    let players = find_players(conn, id)?
        .into_iter()
        .map(into_player)
        .collect::<Result<Vec<_>>>()?;

    Ok(Some(TeamCombination {
        id: row.id,
        name: row.name,
        created: row.created,
        players,
        notes: row.notes,
        format: row.format,
        size: row.size,
    }))
}

/// Returns whether a combination was removed
pub fn delete(conn: &mut DbConn, id: &str) -> Result<bool> {
    conn.execute("DELETE FROM combination_players WHERE combination_id = ?1", params![id])
        .with_context(|| combination_context("delete players of", id))?;
    let deleted = conn
        .execute("DELETE FROM combinations WHERE id = ?1", params![id])
        .with_context(|| combination_context("delete", id))?;
    Ok(deleted > 0)
}

fn find_players(conn: &mut DbConn, id: &str) -> Result<Vec<CombinationPlayerRow>> {
    let sql = format!(
        "SELECT {} FROM combination_players WHERE combination_id = ?1 ORDER BY batting_order",
        PLAYER_COLUMNS
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![id], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .with_context(|| combination_context("load players of", id))?;

    Ok(rows)
}

fn into_player(row: CombinationPlayerRow) -> Result<CombinationPlayer> {
    let role = Role::parse(&row.role).ok_or_else(|| anyhow!("Unknown role '{}'", row.role))?;
    let batting_phase = BattingPhase::parse(&row.batting_phase)
        .ok_or_else(|| anyhow!("Unknown batting phase '{}'", row.batting_phase))?;
    let bowling_phase = match row.bowling_phase.as_deref() {
        Some(phase) => Some(BowlingPhase::parse(phase).ok_or_else(|| anyhow!("Unknown bowling phase '{}'", phase))?),
        None => None,
    };

    Ok(CombinationPlayer {
        player_id: row.player_id,
        role,
        batting_order: row.batting_order,
        bowling_priority: row.bowling_priority,
        is_captain: row.is_captain,
        is_vice_captain: row.is_vice_captain,
        is_keeper: row.is_keeper,
        batting_phase,
        bowling_phase,
    })
}

fn parse_combination_row(row: &rusqlite::Row) -> rusqlite::Result<CombinationRow> {
    Ok(CombinationRow {
        id: row.get(0)?,
        name: row.get(1)?,
        created: row.get(2)?,
        notes: row.get(3)?,
        format: row.get(4)?,
        size: row.get(5)?,
    })
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<CombinationPlayerRow> {
    Ok(CombinationPlayerRow {
        combination_id: row.get(0)?,
        player_id: row.get(1)?,
        role: row.get(2)?,
        batting_order: row.get(3)?,
        bowling_priority: row.get(4)?,
        is_captain: row.get(5)?,
        is_vice_captain: row.get(6)?,
        is_keeper: row.get(7)?,
        batting_phase: row.get(8)?,
        bowling_phase: row.get(9)?,
    })
}

fn parse_overview_row(row: &rusqlite::Row) -> rusqlite::Result<CombinationOverview> {
    Ok(CombinationOverview {
        id: row.get(0)?,
        name: row.get(1)?,
        created: row.get(2)?,
        format: row.get(3)?,
        player_count: row.get(4)?,
    })
}
