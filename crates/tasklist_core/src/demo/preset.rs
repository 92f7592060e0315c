//! Seeded list patterns.
//!
//! # Invariants
//! - Seed titles are fixed per pattern; ids are fresh on every build.
//! - Only `DemoList::Pinned` uses the pinned-first layout.

use crate::demo::capability::ListCapability;
use crate::model::display::ListLayout;
use crate::service::task_list::TaskList;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const FOUR_TASKS: &[&str] = &[
    "Learn SwiftUI Lists",
    "Build an awesome app",
    "Ship to App Store",
    "Celebrate success",
];

const SIX_TASKS: &[&str] = &[
    "Learn SwiftUI Lists",
    "Build an awesome app",
    "Ship to App Store",
    "Celebrate success",
    "Write documentation",
    "Add tests",
];

/// One list pattern with its seed data and interactions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DemoList {
    /// Static rows, no interaction.
    Basic,
    /// Task rows with completion and pin markers, no interaction.
    Overview,
    Deletable,
    Movable,
    SwipeActions,
    MultiSelect,
    /// Pinned rows sort first.
    #[default]
    Pinned,
}

impl DemoList {
    pub const ALL: [DemoList; 7] = [
        DemoList::Basic,
        DemoList::Overview,
        DemoList::Deletable,
        DemoList::Movable,
        DemoList::SwipeActions,
        DemoList::MultiSelect,
        DemoList::Pinned,
    ];

    /// Kebab-case name accepted by [`DemoList::from_str`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Overview => "overview",
            Self::Deletable => "deletable",
            Self::Movable => "movable",
            Self::SwipeActions => "swipe-actions",
            Self::MultiSelect => "multi-select",
            Self::Pinned => "pinned",
        }
    }

    /// Navigation title shown above the list.
    pub fn title(self) -> &'static str {
        match self {
            Self::Basic => "My Tasks",
            _ => "Tasks",
        }
    }

    pub fn seed_titles(self) -> &'static [&'static str] {
        match self {
            Self::Basic => &["Task 1", "Task 2", "Task 3", "Task 4"],
            Self::Overview => &FOUR_TASKS[..3],
            Self::Deletable | Self::Movable | Self::SwipeActions => FOUR_TASKS,
            Self::MultiSelect | Self::Pinned => SIX_TASKS,
        }
    }

    pub fn layout(self) -> ListLayout {
        match self {
            Self::Pinned => ListLayout::PinnedFirst,
            _ => ListLayout::Insertion,
        }
    }

    pub fn capabilities(self) -> &'static [ListCapability] {
        use ListCapability::*;
        match self {
            Self::Basic | Self::Overview => &[],
            Self::Deletable => &[Delete],
            Self::Movable => &[Delete, Reorder],
            Self::SwipeActions => &[Delete, Reorder, ToggleCompleted, Pin],
            Self::MultiSelect => &[Delete, Reorder, ToggleCompleted, MultiSelect],
            Self::Pinned => &[Delete, ToggleCompleted, Pin],
        }
    }

    pub fn supports(self, capability: ListCapability) -> bool {
        self.capabilities().contains(&capability)
    }

    /// Builds a fresh list seeded for this pattern.
    pub fn build(self) -> TaskList {
        let mut list = TaskList::from_titles(self.seed_titles().iter().copied(), self.layout());
        // The overview pattern shows its last seed row as already done.
        if self == Self::Overview {
            if let Some(last) = list.ids().last().copied() {
                list.bulk_complete(&HashSet::from([last]));
            }
        }
        list
    }
}

impl Display for DemoList {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DemoList {
    type Err = DemoParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('_', "-");
        if normalized.is_empty() {
            return Err(DemoParseError::Empty);
        }
        Self::ALL
            .into_iter()
            .find(|demo| demo.as_str() == normalized)
            .ok_or(DemoParseError::Unknown(normalized))
    }
}

/// Demo name parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoParseError {
    Empty,
    Unknown(String),
}

impl Display for DemoParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "demo list name must not be empty"),
            Self::Unknown(value) => write!(
                f,
                "unknown demo list `{value}`; expected basic|overview|deletable|movable|swipe-actions|multi-select|pinned"
            ),
        }
    }
}

impl Error for DemoParseError {}

#[cfg(test)]
mod tests {
    use super::{DemoList, DemoParseError};
    use crate::demo::capability::ListCapability;
    use crate::model::display::ListLayout;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!(
            "Swipe_Actions".parse::<DemoList>(),
            Ok(DemoList::SwipeActions)
        );
        assert_eq!(" pinned ".parse::<DemoList>(), Ok(DemoList::Pinned));
    }

    #[test]
    fn rejects_unknown_and_empty_names() {
        assert_eq!("".parse::<DemoList>(), Err(DemoParseError::Empty));
        assert_eq!(
            "kanban".parse::<DemoList>(),
            Err(DemoParseError::Unknown("kanban".to_string()))
        );
    }

    #[test]
    fn only_pinned_pattern_sorts_pins_first_and_it_cannot_reorder() {
        for demo in DemoList::ALL {
            let pinned_first = demo.layout() == ListLayout::PinnedFirst;
            assert_eq!(pinned_first, demo == DemoList::Pinned);
            if pinned_first {
                assert!(!demo.supports(ListCapability::Reorder));
            }
        }
    }

    #[test]
    fn overview_marks_last_seed_completed() {
        let list = DemoList::Overview.build();
        let flags = list
            .tasks()
            .iter()
            .map(|task| task.is_completed)
            .collect::<Vec<_>>();
        assert_eq!(flags, vec![false, false, true]);
    }

    #[test]
    fn builds_seed_rows_in_order() {
        let list = DemoList::Pinned.build();
        assert_eq!(list.len(), 6);
        assert_eq!(list.tasks()[5].title, "Add tests");
        assert_eq!(list.layout(), ListLayout::PinnedFirst);
        assert_eq!(DemoList::default(), DemoList::Pinned);
    }
}
