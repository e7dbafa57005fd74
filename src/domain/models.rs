use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::config::settings::{ANY_STATUS, DEFAULT_ORDER_BY, DEFAULT_RECORD_TYPE, DEFAULT_STATUS};
use crate::errors::SweepError;

pub type RecordId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Constraints on the record set to iterate. Immutable once iteration starts.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordFilter {
    pub record_type: String,
    pub status: String,
    pub order_by: String,
    pub order: SortOrder,
}

impl Default for RecordFilter {
    fn default() -> Self {
        Self {
            record_type: DEFAULT_RECORD_TYPE.to_string(),
            status: DEFAULT_STATUS.to_string(),
            order_by: DEFAULT_ORDER_BY.to_string(),
            order: SortOrder::Desc,
        }
    }
}

impl RecordFilter {
    /// The `order_by` field is interpolated into query text as-is, so it
    /// must be a bare column identifier.
    pub fn validate(&self) -> Result<(), SweepError> {
        if self.record_type.is_empty() {
            return Err(SweepError::Configuration(
                "record type must not be empty".to_string(),
            ));
        }

        if self.order_by.is_empty() || !is_bare_identifier(&self.order_by) {
            return Err(SweepError::Configuration(format!(
                "order_by must be a bare column identifier, got {:?}",
                self.order_by
            )));
        }

        Ok(())
    }

    /// True when the status sentinel "any" disables the status predicate.
    pub fn matches_any_status(&self) -> bool {
        self.status == ANY_STATUS
    }
}

fn is_bare_identifier(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// The unit of work being iterated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub id: RecordId,
    #[serde(rename = "type")]
    pub record_type: String,
    pub status: String,
    pub title: String,
    pub body: String,
    pub post_date: NaiveDateTime,
    pub modified_date: Option<NaiveDateTime>,
}
