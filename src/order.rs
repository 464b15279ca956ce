//! Owner-side ordering of draggable heading columns.

use crate::heading::{ColumnDescriptor, ColumnId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::warn;

/// Authoritative left-to-right order of the draggable columns.
///
/// Positions are drag-order indices, so they line up with the indices a
/// [`crate::heading::SortableHeading`] reports in its swap callback.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnOrder {
    ids: Vec<ColumnId>,
}

impl ColumnOrder {
    pub fn new(ids: Vec<ColumnId>) -> Self {
        Self { ids }
    }

    pub fn ids(&self) -> &[ColumnId] {
        &self.ids
    }

    pub fn position(&self, id: &ColumnId) -> Option<usize> {
        self.ids.iter().position(|candidate| candidate == id)
    }

    /// Swap two drag-order positions; returns false when either is out of range.
    pub fn swap(&mut self, a: usize, b: usize) -> bool {
        if a >= self.ids.len() || b >= self.ids.len() {
            warn!(
                "Ignoring column swap {a} <-> {b}; only {} columns are ordered",
                self.ids.len()
            );
            return false;
        }
        self.ids.swap(a, b);
        true
    }

    /// Align the saved order with the columns that currently exist.
    ///
    /// Known ids keep their saved order, unseen ids are appended in the order
    /// given and ids that disappeared are dropped.
    pub fn reconcile(&mut self, known: &[ColumnId]) {
        let known_set: HashSet<&ColumnId> = known.iter().collect();
        let mut seen = HashSet::new();
        self.ids
            .retain(|id| known_set.contains(id) && seen.insert(id.clone()));
        for id in known {
            if !seen.contains(id) {
                seen.insert(id.clone());
                self.ids.push(id.clone());
            }
        }
    }

    /// Rearrange the draggable descriptors into this order.
    ///
    /// Static columns keep their slots; draggable columns missing from the
    /// order fill the remaining draggable slots in their original order.
    pub fn arrange(&self, columns: &[ColumnDescriptor]) -> Vec<ColumnDescriptor> {
        let draggable: Vec<&ColumnDescriptor> =
            columns.iter().filter(|column| column.draggable).collect();
        let mut ordered: Vec<&ColumnDescriptor> = self
            .ids
            .iter()
            .filter_map(|id| draggable.iter().copied().find(|column| &column.id == id))
            .collect();
        for column in draggable.iter().copied() {
            if self.position(&column.id).is_none() {
                ordered.push(column);
            }
        }
        let mut ordered = ordered.into_iter();
        columns
            .iter()
            .map(|column| {
                if column.draggable {
                    ordered.next().unwrap_or(column).clone()
                } else {
                    column.clone()
                }
            })
            .collect()
    }
}
