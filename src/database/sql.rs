//! Query text assembly for the records table.
//!
//! The `count` and ID queries are executed as assembled strings so their
//! exact shape can be pinned by compatibility tests against other adapters
//! for the same table. String values are single-quote-escaped here; the
//! order-by identifier is validated upstream by `RecordFilter::validate`.

use crate::domain::RecordFilter;
use crate::pagination::PageSpec;

pub(crate) fn count_query(filter: &RecordFilter) -> String {
    format!("SELECT count(id) FROM records {}", where_clause(filter))
}

pub(crate) fn id_query(filter: &RecordFilter, page: &PageSpec) -> String {
    [
        "SELECT id FROM records".to_string(),
        where_clause(filter),
        order_clause(filter),
        limit_clause(page),
    ]
    .join(" ")
}

/// Type predicate first, then status. The status sentinel "any" omits the
/// status predicate entirely rather than matching the literal value.
pub(crate) fn where_clause(filter: &RecordFilter) -> String {
    let mut clause = format!("WHERE type='{}'", escape(&filter.record_type));

    if !filter.matches_any_status() {
        clause.push_str(&format!(" AND status='{}'", escape(&filter.status)));
    }

    clause
}

pub(crate) fn order_clause(filter: &RecordFilter) -> String {
    format!("ORDER BY {} {}", filter.order_by, filter.order.as_sql())
}

pub(crate) fn limit_clause(page: &PageSpec) -> String {
    format!("LIMIT {},{}", page.offset(), page.size)
}

fn escape(value: &str) -> String {
    value.replace('\'', "''")
}
