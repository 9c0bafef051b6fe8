//! Order math for committed drops.
//!
//! Pure functions over ordered sequences of opaque ids. Inputs are borrowed
//! and never mutated; fresh sequences come back, so before/after states can
//! be compared directly in tests. Callers validate indices first — the store
//! rejects out-of-range coordinates before anything reaches these functions.

use crate::task::TaskId;

/// Move the element at `source_index` to `dest_index` within one sequence.
///
/// `dest_index` is interpreted against the sequence *after* removal — the
/// standard "move element" convention, not "insert before original index".
/// Length and the multiset of ids are preserved; only order changes.
pub fn reposition(sequence: &[TaskId], source_index: usize, dest_index: usize) -> Vec<TaskId> {
    let mut next = sequence.to_vec();
    let moved = next.remove(source_index);
    next.insert(dest_index, moved);
    next
}

/// Move the element at `source_index` of `source` into `dest` at
/// `dest_index`, returning the two updated sequences.
///
/// `dest_index` ranges over `0..=dest.len()` inclusive; the upper bound
/// appends. The sequences are distinct, so the removal does not shift the
/// destination index.
pub fn transfer(
    source: &[TaskId],
    source_index: usize,
    dest: &[TaskId],
    dest_index: usize,
) -> (Vec<TaskId>, Vec<TaskId>) {
    let mut new_source = source.to_vec();
    let moved = new_source.remove(source_index);
    let mut new_dest = dest.to_vec();
    new_dest.insert(dest_index, moved);
    (new_source, new_dest)
}
