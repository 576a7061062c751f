use anyhow::{Context, Result};

use super::connection::DbConn;

/// Creates any missing tables; existing combinations are kept
pub fn ensure_schema(conn: &mut DbConn) -> Result<()> {
    run_statements(conn, include_str!("schema.sql"))?;
    log::debug!("Combination schema ready");
    Ok(())
}

/// Drops every saved combination and recreates the schema
pub fn reset_database(conn: &mut DbConn) -> Result<()> {
    run_statements(
        conn,
        "DROP TABLE IF EXISTS combination_players; DROP TABLE IF EXISTS combinations",
    )?;
    ensure_schema(conn)?;
    log::info!("Database schema reset successfully");
    Ok(())
}

fn run_statements(conn: &mut DbConn, sql: &str) -> Result<()> {
    for (idx, statement) in split_sql_statements(sql).iter().enumerate() {
        execute_sql(conn, statement)
            .with_context(|| format!("Failed to execute statement {}", idx + 1))?;
    }
    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn execute_sql(conn: &mut DbConn, sql: &str) -> Result<()> {
    conn.execute(sql, [])
        .context("Failed to execute SQL statement")
        .map(|_| ())
}
