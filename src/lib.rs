//! Reorderable table heading for egui, plus the pieces the demo owner uses
//! to keep and persist a column order.
/// Application directory resolution.
pub mod app_dirs;
/// Persisted heading settings.
pub mod config;
/// The heading widget and its drag-and-drop seam.
pub mod heading;
/// Tracing subscriber setup.
pub mod logging;
/// Owner-side column ordering.
pub mod order;
/// Shared egui colors.
pub mod style;
/// Translation table demo built on the heading.
pub mod translations;

pub use heading::{ColumnDescriptor, ColumnId, HeadingResponse, SortableHeading};
pub use order::ColumnOrder;
