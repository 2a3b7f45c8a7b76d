//! Field-parameterized heap sort over a [`Sequence`] of records.
//!
//! The sort touches the sequence only through `get`, `swap` and `length`, so
//! it works on the linked chain without an auxiliary array.

use crate::error::Result;
use crate::record::{extract, Record};
use crate::sequence::Sequence;
use log::debug;
use std::cmp::Ordering;

/// A sequence known to be ascending by `field`.
///
/// Only [`heap_sort`] constructs this, which makes it the proof that a
/// binary search over the same field is meaningful.
#[derive(Debug, Clone)]
pub struct SortedBy {
    sequence: Sequence<Record>,
    field: String,
}

impl SortedBy {
    /// The field the sequence is ordered by.
    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn sequence(&self) -> &Sequence<Record> {
        &self.sequence
    }

    pub fn get(&self, index: usize) -> Result<&Record> {
        self.sequence.get(index)
    }

    pub fn length(&self) -> usize {
        self.sequence.length()
    }

    pub fn into_inner(self) -> Sequence<Record> {
        self.sequence
    }
}

/// Orders `a` against `b` by `field`.
fn compare_at(seq: &Sequence<Record>, field: &str, a: usize, b: usize) -> Result<Ordering> {
    let left = extract(seq.get(a)?, field)?;
    let right = extract(seq.get(b)?, field)?;
    Ok(left.compare(right))
}

/// Restores the max-heap property below `start`, treating `end` as the last
/// live heap position.
fn sift_down(seq: &mut Sequence<Record>, field: &str, start: usize, end: usize) -> Result<()> {
    let mut root = start;
    loop {
        let mut child = root * 2 + 1;
        if child > end {
            break;
        }
        if child < end && compare_at(seq, field, child, child + 1)? == Ordering::Less {
            child += 1;
        }
        if compare_at(seq, field, root, child)? == Ordering::Less {
            seq.swap(root, child)?;
            root = child;
        } else {
            break;
        }
    }
    Ok(())
}

/// Sorts `seq` ascending by `field` in place and returns it wrapped as
/// [`SortedBy`].
///
/// The sort is not stable: records with equal keys keep their relative order
/// only when the heap happens not to move them. Fails with
/// [`FieldNotFound`](crate::EngineError::FieldNotFound) at the first
/// comparison touching a record without `field`; the sequence may then be
/// partially reordered.
pub fn heap_sort(mut seq: Sequence<Record>, field: &str) -> Result<SortedBy> {
    let n = seq.length();

    if n >= 2 {
        for start in (0..=(n - 2) / 2).rev() {
            sift_down(&mut seq, field, start, n - 1)?;
        }

        for end in (1..n).rev() {
            seq.swap(0, end)?;
            sift_down(&mut seq, field, 0, end - 1)?;
        }
    }

    debug!("Sorted {} records by '{}'", n, field);

    Ok(SortedBy {
        sequence: seq,
        field: field.to_string(),
    })
}
