use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use crate::domain::{ContentRecord, RecordId};

const RECORD_COLUMNS: &str = "id, type, status, title, body, post_date, modified_date";

pub fn insert_record(conn: &mut DbConn, record: &ContentRecord) -> Result<ContentRecord> {
    let sql = format!(
        "INSERT INTO records (type, status, title, body, post_date, modified_date) VALUES (?1, ?2, ?3, ?4, ?5, ?6) RETURNING {RECORD_COLUMNS}"
    );

    conn.query_row(
        &sql,
        params![
            record.record_type,
            record.status,
            record.title,
            record.body,
            record.post_date,
            record.modified_date
        ],
        parse_record_row,
    )
    .context("Failed to insert record")
}

pub fn get_record(conn: &mut DbConn, id: RecordId) -> Result<Option<ContentRecord>> {
    let sql = format!("SELECT {RECORD_COLUMNS} FROM records WHERE id = ?1");

    conn.query_row(&sql, params![id], parse_record_row)
        .optional()
        .context("Failed to load record")
}

pub fn update_record(conn: &mut DbConn, record: &ContentRecord) -> Result<usize> {
    let sql = "UPDATE records SET type = ?1, status = ?2, title = ?3, body = ?4, post_date = ?5, modified_date = ?6 WHERE id = ?7";

    conn.execute(
        sql,
        params![
            record.record_type,
            record.status,
            record.title,
            record.body,
            record.post_date,
            record.modified_date,
            record.id
        ],
    )
    .context("Failed to update record")
}

/// Runs an assembled count query (see `database::sql`).
pub fn count_with(conn: &mut DbConn, sql: &str) -> Result<usize> {
    conn.query_row(sql, [], |row| row.get::<_, i64>(0))
        .map(|n| n as usize)
        .context("Failed to run count query")
}

/// Runs an assembled ID query (see `database::sql`).
pub fn ids_with(conn: &mut DbConn, sql: &str) -> Result<Vec<RecordId>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

fn parse_record_row(row: &rusqlite::Row) -> rusqlite::Result<ContentRecord> {
    Ok(ContentRecord {
        id: row.get(0)?,
        record_type: row.get(1)?,
        status: row.get(2)?,
        title: row.get(3)?,
        body: row.get(4)?,
        post_date: row.get(5)?,
        modified_date: row.get(6)?,
    })
}
