use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::Deserialize;

use super::connection::DbConn;
use super::records;
use crate::config::settings::{DEFAULT_RECORD_TYPE, DEFAULT_STATUS};
use crate::domain::ContentRecord;

pub fn reset_database(conn: &mut DbConn) -> Result<()> {
    let schema_sql = include_str!("schema.sql");
    let statements = split_sql_statements(schema_sql);

    for (idx, statement) in statements.iter().enumerate() {
        if !statement.trim().is_empty() {
            execute_sql(conn, statement)
                .with_context(|| format!("Failed to execute statement {}", idx + 1))?;
        }
    }

    log::info!("Database schema reset successfully");
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

/// One record in a seed file: a JSON array of these, IDs assigned by the
/// database on import.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedRecord {
    #[serde(rename = "type", default = "default_record_type")]
    pub record_type: String,
    #[serde(default = "default_status")]
    pub status: String,
    pub title: String,
    pub body: String,
    pub post_date: NaiveDateTime,
    #[serde(default)]
    pub modified_date: Option<NaiveDateTime>,
}

fn default_record_type() -> String {
    DEFAULT_RECORD_TYPE.to_string()
}

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

pub fn load_seed_file(path: &Path) -> Result<Vec<SeedRecord>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;

    serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse seed file {}", path.display()))
}

pub fn insert_seed_records(conn: &mut DbConn, seeds: &[SeedRecord]) -> Result<usize> {
    for seed in seeds {
        let record = ContentRecord {
            id: 0, // assigned by the database
            record_type: seed.record_type.clone(),
            status: seed.status.clone(),
            title: seed.title.clone(),
            body: seed.body.clone(),
            post_date: seed.post_date,
            modified_date: seed.modified_date,
        };
        records::insert_record(conn, &record)?;
    }

    Ok(seeds.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::connection;

    #[test]
    fn test_reset_database_is_repeatable() {
        let pool = connection::create_memory_pool().unwrap();
        let mut conn = connection::get_connection(&pool).unwrap();

        reset_database(&mut conn).unwrap();
        reset_database(&mut conn).unwrap();
    }

    #[test]
    fn test_seed_file_round_trip() {
        let pool = connection::create_memory_pool().unwrap();
        let mut conn = connection::get_connection(&pool).unwrap();
        reset_database(&mut conn).unwrap();

        let path = std::env::temp_dir().join("content_sweep_seed_test.json");
        std::fs::write(
            &path,
            r#"[
                {"title": "First", "body": "hello", "post_date": "2024-01-01T12:00:00"},
                {"type": "page", "status": "draft", "title": "Second", "body": "world", "post_date": "2024-01-02T12:00:00"}
            ]"#,
        )
        .unwrap();

        let seeds = load_seed_file(&path).unwrap();
        assert_eq!(insert_seed_records(&mut conn, &seeds).unwrap(), 2);

        let first = records::get_record(&mut conn, 1).unwrap().unwrap();
        assert_eq!(first.record_type, "post");
        assert_eq!(first.status, "publish");
        assert_eq!(first.title, "First");

        let second = records::get_record(&mut conn, 2).unwrap().unwrap();
        assert_eq!(second.record_type, "page");
        assert_eq!(second.status, "draft");

        std::fs::remove_file(&path).unwrap();
    }
}
