use std::rc::Rc;

use super::connection::DbConn;
use super::diagnostics::SharedDiagnostics;
use super::{records, sql};
use crate::domain::{ContentRecord, RecordFilter, RecordId};
use crate::errors::StoreError;
use crate::pagination::PageSpec;
use crate::store::RecordStore;

/// `RecordStore` over a pooled SQLite connection. Every executed statement
/// is appended to the shared diagnostics buffer; pair this store with a
/// `SqliteReclaimer` over the same buffer so long sweeps stay bounded.
pub struct SqliteStore {
    conn: DbConn,
    diagnostics: SharedDiagnostics,
}

impl SqliteStore {
    pub fn new(conn: DbConn) -> Self {
        Self {
            conn,
            diagnostics: SharedDiagnostics::default(),
        }
    }

    /// Handle to the diagnostics buffer, for wiring up a reclaimer.
    pub fn diagnostics(&self) -> SharedDiagnostics {
        Rc::clone(&self.diagnostics)
    }

    fn trace(&self, statement: &str) {
        self.diagnostics.borrow_mut().record(statement);
    }
}

impl RecordStore for SqliteStore {
    fn count(&mut self, filter: &RecordFilter) -> Result<usize, StoreError> {
        let query = sql::count_query(filter);
        self.trace(&query);

        records::count_with(&mut self.conn, &query).map_err(|source| StoreError::Query {
            detail: query,
            source,
        })
    }

    fn query_ids(
        &mut self,
        filter: &RecordFilter,
        page: &PageSpec,
    ) -> Result<Vec<RecordId>, StoreError> {
        let query = sql::id_query(filter, page);
        self.trace(&query);

        records::ids_with(&mut self.conn, &query).map_err(|source| StoreError::Query {
            detail: query,
            source,
        })
    }

    fn load(&mut self, id: RecordId) -> Result<ContentRecord, StoreError> {
        self.trace(&format!("load record {id}"));

        records::get_record(&mut self.conn, id)
            .map_err(|source| StoreError::Query {
                detail: format!("load record {id}"),
                source,
            })?
            .ok_or(StoreError::Missing(id))
    }

    fn persist(&mut self, record: &ContentRecord) -> Result<(), StoreError> {
        self.trace(&format!("update record {}", record.id));

        let changed = records::update_record(&mut self.conn, record)
            .map_err(|source| StoreError::Write {
                id: record.id,
                source,
            })?;

        if changed == 0 {
            return Err(StoreError::Missing(record.id));
        }
        Ok(())
    }
}
