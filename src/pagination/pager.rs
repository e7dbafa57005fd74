use crate::domain::{RecordFilter, RecordId};
use crate::errors::{StoreError, SweepError};
use crate::pagination::PageSpec;
use crate::store::RecordStore;

/// Walks a filtered, ordered record set in bounded windows.
///
/// The total matching count is computed exactly once per pager and cached
/// for its lifetime; it is never refreshed even if the underlying data
/// changes mid-run.
pub struct Pager {
    filter: RecordFilter,
    page: PageSpec,
    total_matching: Option<usize>,
}

impl Pager {
    pub fn new(filter: RecordFilter, page: PageSpec) -> Result<Self, SweepError> {
        filter.validate()?;
        page.validate()?;

        Ok(Self {
            filter,
            page,
            total_matching: None,
        })
    }

    /// Idempotent: the first call issues exactly one count query and caches
    /// the result; later calls return the cache.
    pub fn setup(&mut self, store: &mut dyn RecordStore) -> Result<usize, StoreError> {
        if let Some(total) = self.total_matching {
            return Ok(total);
        }

        let total = store.count(&self.filter)?;
        self.total_matching = Some(total);
        Ok(total)
    }

    /// Runs `setup` implicitly, so callers can skip an explicit setup step.
    pub fn has_next_page(&mut self, store: &mut dyn RecordStore) -> Result<bool, StoreError> {
        let total = self.setup(store)?;
        Ok(self.page.offset() < total)
    }

    /// Fetches the IDs for the current page. Issues exactly one query.
    pub fn current_page_ids(
        &mut self,
        store: &mut dyn RecordStore,
    ) -> Result<Vec<RecordId>, StoreError> {
        self.setup(store)?;
        store.query_ids(&self.filter, &self.page)
    }

    /// Moves to the next page without re-validating bounds; callers must
    /// re-check `has_next_page`.
    pub fn advance(&mut self) {
        self.page.advance();
    }

    pub fn total_matching(&self) -> Option<usize> {
        self.total_matching
    }

    pub fn current_page(&self) -> usize {
        self.page.number
    }

    pub fn offset(&self) -> usize {
        self.page.offset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::testing::MemoryStore;

    fn pager(size: usize) -> Pager {
        Pager::new(RecordFilter::default(), PageSpec::new().with_size(size)).unwrap()
    }

    #[test]
    fn test_setup_counts_exactly_once() {
        let mut store = MemoryStore::with_records(13);
        let mut pager = pager(5);

        assert_eq!(pager.setup(&mut store).unwrap(), 13);
        assert_eq!(pager.setup(&mut store).unwrap(), 13);
        pager.has_next_page(&mut store).unwrap();
        pager.has_next_page(&mut store).unwrap();

        assert_eq!(store.count_calls, 1);
        assert_eq!(pager.total_matching(), Some(13));
    }

    #[test]
    fn test_has_next_page_runs_setup_implicitly() {
        let mut store = MemoryStore::with_records(3);
        let mut pager = pager(100);

        assert!(pager.has_next_page(&mut store).unwrap());
        assert_eq!(pager.total_matching(), Some(3));
    }

    #[test]
    fn test_thirteen_records_in_pages_of_five() {
        let mut store = MemoryStore::with_records(13);
        let mut pager = pager(5);

        let mut page_sizes = Vec::new();
        while pager.has_next_page(&mut store).unwrap() {
            page_sizes.push(pager.current_page_ids(&mut store).unwrap().len());
            pager.advance();
        }

        assert_eq!(page_sizes, vec![5, 5, 3]);
        assert_eq!(pager.current_page(), 4);
        assert!(!pager.has_next_page(&mut store).unwrap());
    }

    #[test]
    fn test_pages_cover_every_record_once_in_order() {
        let mut store = MemoryStore::with_records(13);
        let mut pager = pager(5);

        let mut seen = Vec::new();
        while pager.has_next_page(&mut store).unwrap() {
            seen.extend(pager.current_page_ids(&mut store).unwrap());
            pager.advance();
        }

        // Default order is post_date DESC, and fixture dates increase with
        // the ID, so the full walk is 13 down to 1 with no gaps.
        assert_eq!(seen, (1..=13).rev().collect::<Vec<_>>());
    }

    #[test]
    fn test_page_larger_than_total_yields_single_page() {
        let mut store = MemoryStore::with_records(4);
        let mut pager = pager(100);

        assert!(pager.has_next_page(&mut store).unwrap());
        assert_eq!(pager.current_page_ids(&mut store).unwrap().len(), 4);
        pager.advance();
        assert!(!pager.has_next_page(&mut store).unwrap());
    }

    #[test]
    fn test_empty_match_set_has_no_pages() {
        let mut store = MemoryStore::with_records(0);
        let mut pager = pager(5);

        assert!(!pager.has_next_page(&mut store).unwrap());
        assert_eq!(pager.total_matching(), Some(0));
    }

    #[test]
    fn test_offset_tracks_page_position() {
        let mut pager = pager(5);
        assert_eq!(pager.offset(), 0);
        pager.advance();
        assert_eq!(pager.offset(), 5);
        pager.advance();
        assert_eq!(pager.offset(), 10);
    }

    #[test]
    fn test_invalid_page_spec_rejected_at_construction() {
        let result = Pager::new(RecordFilter::default(), PageSpec::new().with_size(0));
        assert!(matches!(result, Err(SweepError::Configuration(_))));
    }
}
