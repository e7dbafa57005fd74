use std::cell::RefCell;
use std::rc::Rc;

use crate::batch::Reclaimer;

/// Per-statement instrumentation buffer. The SQLite store appends every
/// statement it executes; over a long sweep this grows with every record,
/// so the driver's page-boundary reclaimer drains it.
///
/// Shared between the store and its reclaimer via `Rc<RefCell<_>>`; the
/// engine is single-threaded, so no locking.
#[derive(Debug, Default)]
pub struct QueryDiagnostics {
    queries: Vec<String>,
}

pub type SharedDiagnostics = Rc<RefCell<QueryDiagnostics>>;

impl QueryDiagnostics {
    pub fn record(&mut self, sql: &str) {
        self.queries.push(sql.to_string());
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    /// Clears the buffer and returns how many entries were dropped.
    pub fn drain(&mut self) -> usize {
        let dropped = self.queries.len();
        self.queries.clear();
        dropped
    }
}

/// Drains the shared diagnostics buffer at every page boundary.
pub struct SqliteReclaimer {
    diagnostics: SharedDiagnostics,
}

impl SqliteReclaimer {
    pub fn new(diagnostics: SharedDiagnostics) -> Self {
        Self { diagnostics }
    }
}

impl Reclaimer for SqliteReclaimer {
    fn reset(&mut self) {
        let dropped = self.diagnostics.borrow_mut().drain();
        log::debug!("Reclaimed {dropped} buffered query log entries");
    }
}
