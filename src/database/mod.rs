pub mod connection;
pub mod diagnostics;
pub mod records;
pub mod setup;
pub mod sql;
pub mod store;

pub use connection::{create_memory_pool, create_pool, get_connection, DbConn, DbPool};
pub use diagnostics::{QueryDiagnostics, SharedDiagnostics, SqliteReclaimer};
pub use store::SqliteStore;
