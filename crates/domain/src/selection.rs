// crates/domain/src/selection.rs
use std::cmp::Ordering;

use crate::migration::{DirectoryEntry, MigrationCandidate};

/// Keep only entries that qualify as migration folders, in listing order.
pub fn collect_candidates(entries: &[DirectoryEntry]) -> Vec<MigrationCandidate> {
    entries.iter().filter_map(MigrationCandidate::from_entry).collect()
}

/// Newest first; equal instants fall back to name, descending.
pub fn newest_first(a: &MigrationCandidate, b: &MigrationCandidate) -> Ordering {
    b.timestamp()
        .cmp(&a.timestamp())
        .then_with(|| b.name().cmp(a.name()))
}

/// The candidate with the latest timestamp, if any.
pub fn select_latest(candidates: &[MigrationCandidate]) -> Option<&MigrationCandidate> {
    candidates.iter().min_by(|a, b| newest_first(a, b))
}
