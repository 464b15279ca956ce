//! Column descriptors supplied by the owner each frame, plus the derived
//! drag-order indices and resolved cell widths.

use egui::WidgetText;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier for a heading column.
///
/// Cells derive their egui id from it, so it must not change while the owner
/// reorders columns.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(String);

impl ColumnId {
    /// Wrap a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColumnId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// One cell of the heading row.
#[derive(Clone, Debug)]
pub struct ColumnDescriptor {
    pub id: ColumnId,
    /// Preferred width in points; zero means the cell takes a share of the free space.
    pub width: f32,
    pub draggable: bool,
    pub item: WidgetText,
}

impl ColumnDescriptor {
    /// A static cell that never takes part in reordering.
    pub fn fixed(id: impl Into<ColumnId>, width: f32, item: impl Into<WidgetText>) -> Self {
        Self {
            id: id.into(),
            width,
            draggable: false,
            item: item.into(),
        }
    }

    /// A cell the user can drag to a new position.
    pub fn draggable(id: impl Into<ColumnId>, width: f32, item: impl Into<WidgetText>) -> Self {
        Self {
            id: id.into(),
            width,
            draggable: true,
            item: item.into(),
        }
    }

    pub fn flex_basis(&self) -> Option<f32> {
        flex_basis(self.width)
    }
}

/// Fixed basis for a width, or `None` when the width is zero, negative or NaN.
pub fn flex_basis(width: f32) -> Option<f32> {
    (width > 0.0).then_some(width)
}

/// Dense drag-order index per column, counting draggable columns only.
pub fn drag_order(columns: &[ColumnDescriptor]) -> Vec<Option<usize>> {
    let mut next = 0;
    columns
        .iter()
        .map(|column| {
            column.draggable.then(|| {
                let index = next;
                next += 1;
                index
            })
        })
        .collect()
}

/// Width of every cell given the horizontal space available to the row.
///
/// Cells with a basis keep it even if the row overflows; the rest split the
/// remainder evenly and collapse to zero when nothing is left.
pub fn resolve_widths(columns: &[ColumnDescriptor], available: f32) -> Vec<f32> {
    let fixed: f32 = columns.iter().filter_map(ColumnDescriptor::flex_basis).sum();
    let flexible = columns
        .iter()
        .filter(|column| column.flex_basis().is_none())
        .count();
    let share = if flexible == 0 || !available.is_finite() {
        0.0
    } else {
        ((available - fixed) / flexible as f32).max(0.0)
    };
    columns
        .iter()
        .map(|column| column.flex_basis().unwrap_or(share))
        .collect()
}
