use crate::domain::{ContentRecord, RecordFilter, RecordId};
use crate::errors::StoreError;
use crate::pagination::PageSpec;

#[cfg(test)]
pub(crate) mod testing;

/// Storage collaborator the engine iterates against.
pub trait RecordStore {
    /// Counts the records matching the filter, ignoring pagination.
    fn count(&mut self, filter: &RecordFilter) -> Result<usize, StoreError>;

    /// Returns the IDs for one page, in the filter's order.
    ///
    /// Ties in the order-by field are broken by the store's default
    /// secondary order, which is not guaranteed to be stable across pages.
    /// If the underlying data changes mid-run this can skip or double-visit
    /// a record near a page boundary; known limitation.
    fn query_ids(
        &mut self,
        filter: &RecordFilter,
        page: &PageSpec,
    ) -> Result<Vec<RecordId>, StoreError>;

    fn load(&mut self, id: RecordId) -> Result<ContentRecord, StoreError>;

    fn persist(&mut self, record: &ContentRecord) -> Result<(), StoreError>;
}
