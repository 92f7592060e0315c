//! Derived display order.
//!
//! # Invariants
//! - Pinned tasks precede unpinned tasks under `ListLayout::PinnedFirst`.
//! - Relative base order inside each pinned group is preserved.
//! - Nothing here stores state; callers recompute after every mutation.

use crate::model::task::Task;
use serde::{Deserialize, Serialize};

/// How rows are laid out relative to stored order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListLayout {
    /// Stable partition: pinned rows first, base order inside each group.
    #[default]
    PinnedFirst,
    /// Rows follow base order; the pin flag is only a row marker.
    Insertion,
}

impl ListLayout {
    /// Whether users may reorder rows by hand in this layout.
    ///
    /// Pinned-first rows are positioned by their flag, so manual moves would
    /// not survive the next recomputation.
    pub fn allows_reorder(self) -> bool {
        matches!(self, Self::Insertion)
    }
}

/// Returns tasks in the order rows are presented for `layout`.
pub fn display_order(tasks: &[Task], layout: ListLayout) -> Vec<&Task> {
    match layout {
        ListLayout::PinnedFirst => pinned_first(tasks),
        ListLayout::Insertion => tasks.iter().collect(),
    }
}

/// Stable pinned-first partition of `tasks`.
///
/// `sort_by_key` is a stable sort, and the key only separates the two groups,
/// so two tasks with the same flag never swap.
pub fn pinned_first(tasks: &[Task]) -> Vec<&Task> {
    let mut rows: Vec<&Task> = tasks.iter().collect();
    rows.sort_by_key(|task| !task.is_pinned);
    rows
}
