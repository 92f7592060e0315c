//! Per-row commands triggered by swipe and tap gestures.

use crate::model::task::Task;
use serde::{Deserialize, Serialize};

/// Command a single row can issue against its own task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowAction {
    /// Destructive trailing swipe.
    Delete,
    /// Trailing swipe that pins or unpins.
    TogglePinned,
    /// Leading swipe or checkmark tap.
    ToggleCompleted,
}

impl RowAction {
    /// Actions in the order a row offers them.
    pub const ALL: [RowAction; 3] = [
        RowAction::Delete,
        RowAction::TogglePinned,
        RowAction::ToggleCompleted,
    ];

    /// Label a row shows for this action given the task's current state.
    pub fn label(self, task: &Task) -> &'static str {
        match self {
            Self::Delete => "Delete",
            Self::TogglePinned if task.is_pinned => "Unpin",
            Self::TogglePinned => "Pin",
            Self::ToggleCompleted if task.is_completed => "Incomplete",
            Self::ToggleCompleted => "Complete",
        }
    }

    /// Stable snake_case name used across the FFI boundary.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Delete => "delete",
            Self::TogglePinned => "toggle_pinned",
            Self::ToggleCompleted => "toggle_completed",
        }
    }

    /// Parses the name produced by [`RowAction::as_str`].
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == value.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::RowAction;
    use crate::model::task::Task;

    #[test]
    fn labels_follow_task_state() {
        let task = Task::new("row");
        assert_eq!(RowAction::TogglePinned.label(&task), "Pin");
        assert_eq!(RowAction::ToggleCompleted.label(&task), "Complete");

        let task = task.pinned(true).completed(true);
        assert_eq!(RowAction::TogglePinned.label(&task), "Unpin");
        assert_eq!(RowAction::ToggleCompleted.label(&task), "Incomplete");
        assert_eq!(RowAction::Delete.label(&task), "Delete");
    }

    #[test]
    fn parse_round_trips_names() {
        for action in RowAction::ALL {
            assert_eq!(RowAction::parse(action.as_str()), Some(action));
        }
        assert_eq!(RowAction::parse("archive"), None);
    }
}
