use thiserror::Error;

use crate::domain::RecordId;

/// Failures surfaced by a record store. All of them are fatal to a run;
/// bulk jobs are re-invoked after fixing the root cause rather than retried.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("query failed: {detail}")]
    Query {
        detail: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("failed to persist record {id}")]
    Write {
        id: RecordId,
        #[source]
        source: anyhow::Error,
    },

    /// The record vanished between the ID query and the load.
    #[error("record {0} no longer exists")]
    Missing(RecordId),
}

#[derive(Debug, Error)]
pub enum SweepError {
    /// Invalid filter or page configuration, surfaced at construction.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// Caller-supplied transform logic failed; propagated unchanged.
    #[error("transform failed on record {id}")]
    Transform {
        id: RecordId,
        #[source]
        source: anyhow::Error,
    },
}
