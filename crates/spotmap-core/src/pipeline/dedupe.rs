//! Database list deduplication.

use std::collections::HashSet;

use crate::record::DatabaseSummary;

/// Keep the first summary for every distinct id, preserving order.
pub fn unique_databases(
    databases: impl IntoIterator<Item = DatabaseSummary>,
) -> Vec<DatabaseSummary> {
    let mut seen = HashSet::new();
    databases
        .into_iter()
        .filter(|db| seen.insert(db.id.clone()))
        .collect()
}

/// Drop archived summaries, then deduplicate.
pub fn active_databases(
    databases: impl IntoIterator<Item = DatabaseSummary>,
) -> Vec<DatabaseSummary> {
    unique_databases(databases.into_iter().filter(|db| !db.archived))
}
