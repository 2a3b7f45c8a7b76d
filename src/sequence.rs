//! Singly-linked record sequence.
//!
//! Nodes live in an arena and link to their successor by arena index, so
//! traversal is a plain loop and ownership is a single `Vec`. Every positional
//! operation walks the `next` chain from the head; there is no random access
//! and no cached length.

use crate::error::{EngineError, Result};
use std::mem;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: Option<usize>,
}

/// An ordered, non-empty chain of values.
///
/// # Invariants
///
/// - Position 0 is the head
/// - Following `next` from the head visits every node exactly once and ends
///   at the terminal `None`
/// - Each node is owned by exactly one sequence
///
/// An empty input never produces a `Sequence`; see [`Sequence::build`].
#[derive(Debug, Clone)]
pub struct Sequence<T> {
    nodes: Vec<Node<T>>,
    head: usize,
}

impl<T> Sequence<T> {
    /// Builds a chain preserving the order of `values`.
    ///
    /// Returns [`EngineError::EmptySequence`] for an empty input, which is
    /// distinct from a one-element sequence.
    pub fn build(values: Vec<T>) -> Result<Self> {
        if values.is_empty() {
            return Err(EngineError::EmptySequence);
        }

        let count = values.len();
        let nodes = values
            .into_iter()
            .enumerate()
            .map(|(i, value)| Node {
                value,
                next: if i + 1 < count { Some(i + 1) } else { None },
            })
            .collect();

        Ok(Sequence { nodes, head: 0 })
    }

    /// Arena slot of the node at `index`.
    fn slot(&self, index: usize) -> Result<usize> {
        let mut cursor = self.head;
        for _ in 0..index {
            match self.nodes[cursor].next {
                Some(next) => cursor = next,
                None => {
                    return Err(EngineError::IndexOutOfRange {
                        index,
                        length: self.length(),
                    })
                }
            }
        }
        Ok(cursor)
    }

    fn tail(&self) -> usize {
        let mut cursor = self.head;
        while let Some(next) = self.nodes[cursor].next {
            cursor = next;
        }
        cursor
    }

    /// Value at `index`.
    pub fn get(&self, index: usize) -> Result<&T> {
        let slot = self.slot(index)?;
        Ok(&self.nodes[slot].value)
    }

    /// Overwrites the value at `index` in place.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        let slot = self.slot(index)?;
        self.nodes[slot].value = value;
        Ok(())
    }

    /// Exchanges the values at positions `a` and `b`. Links are untouched.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        let slot_a = self.slot(a)?;
        let slot_b = self.slot(b)?;
        if slot_a == slot_b {
            return Ok(());
        }

        let (low, high) = if slot_a < slot_b {
            (slot_a, slot_b)
        } else {
            (slot_b, slot_a)
        };
        let (left, right) = self.nodes.split_at_mut(high);
        mem::swap(&mut left[low].value, &mut right[0].value);
        Ok(())
    }

    /// Number of nodes, counted by walking the chain.
    ///
    /// O(n) on every call.
    pub fn length(&self) -> usize {
        let mut count = 1;
        let mut cursor = self.head;
        while let Some(next) = self.nodes[cursor].next {
            count += 1;
            cursor = next;
        }
        count
    }

    /// Adds a node after the current tail.
    pub fn append(&mut self, value: T) {
        let tail = self.tail();
        let slot = self.nodes.len();
        self.nodes.push(Node { value, next: None });
        self.nodes[tail].next = Some(slot);
    }

    /// Values in chain order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            cursor: Some(self.head),
        }
    }

    /// Consumes the sequence, returning its values in chain order.
    pub fn into_vec(self) -> Vec<T> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut cursor = Some(self.head);
        while let Some(slot) = cursor {
            order.push(slot);
            cursor = self.nodes[slot].next;
        }

        let mut values: Vec<Option<T>> = self.nodes.into_iter().map(|n| Some(n.value)).collect();
        order
            .into_iter()
            .filter_map(|slot| values[slot].take())
            .collect()
    }
}

/// Iterator over a [`Sequence`] in chain order.
pub struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    cursor: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.cursor?;
        let node = &self.nodes[slot];
        self.cursor = node.next;
        Some(&node.value)
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
