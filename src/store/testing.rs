use anyhow::anyhow;
use chrono::{Days, NaiveDate, NaiveDateTime};

use crate::domain::{ContentRecord, RecordFilter, RecordId, SortOrder};
use crate::errors::StoreError;
use crate::pagination::PageSpec;
use crate::store::RecordStore;

/// In-memory store used by the unit tests. Tracks how often each part of
/// the contract is exercised so tests can assert call counts.
pub struct MemoryStore {
    pub records: Vec<ContentRecord>,
    pub count_calls: usize,
    pub query_calls: usize,
    pub persisted: Vec<RecordId>,
    pub fail_persist: bool,
}

pub fn fixture_date(day_offset: u64) -> NaiveDateTime {
    let base = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    base.checked_add_days(Days::new(day_offset)).unwrap()
}

pub fn fixture_record(id: RecordId) -> ContentRecord {
    ContentRecord {
        id,
        record_type: "post".to_string(),
        status: "publish".to_string(),
        title: format!("Title {id}"),
        body: format!("Body of record {id}"),
        post_date: fixture_date(id as u64),
        modified_date: None,
    }
}

impl MemoryStore {
    pub fn new(records: Vec<ContentRecord>) -> Self {
        Self {
            records,
            count_calls: 0,
            query_calls: 0,
            persisted: Vec::new(),
            fail_persist: false,
        }
    }

    /// Store seeded with `n` published posts, IDs 1..=n, ascending dates.
    pub fn with_records(n: usize) -> Self {
        Self::new((1..=n as RecordId).map(fixture_record).collect())
    }

    fn matching(&self, filter: &RecordFilter) -> Vec<&ContentRecord> {
        self.records
            .iter()
            .filter(|r| {
                r.record_type == filter.record_type
                    && (filter.matches_any_status() || r.status == filter.status)
            })
            .collect()
    }
}

impl RecordStore for MemoryStore {
    fn count(&mut self, filter: &RecordFilter) -> Result<usize, StoreError> {
        self.count_calls += 1;
        Ok(self.matching(filter).len())
    }

    fn query_ids(
        &mut self,
        filter: &RecordFilter,
        page: &PageSpec,
    ) -> Result<Vec<RecordId>, StoreError> {
        self.query_calls += 1;

        let mut matching = self.matching(filter);
        match filter.order_by.as_str() {
            "post_date" => matching.sort_by_key(|r| r.post_date),
            "title" => matching.sort_by(|a, b| a.title.cmp(&b.title)),
            _ => matching.sort_by_key(|r| r.id),
        }
        if filter.order == SortOrder::Desc {
            matching.reverse();
        }

        Ok(matching
            .into_iter()
            .skip(page.offset())
            .take(page.size)
            .map(|r| r.id)
            .collect())
    }

    fn load(&mut self, id: RecordId) -> Result<ContentRecord, StoreError> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(StoreError::Missing(id))
    }

    fn persist(&mut self, record: &ContentRecord) -> Result<(), StoreError> {
        if self.fail_persist {
            return Err(StoreError::Write {
                id: record.id,
                source: anyhow!("persist disabled for this test"),
            });
        }

        let slot = self
            .records
            .iter_mut()
            .find(|r| r.id == record.id)
            .ok_or(StoreError::Missing(record.id))?;
        *slot = record.clone();
        self.persisted.push(record.id);
        Ok(())
    }
}
