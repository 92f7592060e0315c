//! Interactions a list pattern enables.

/// One interaction a presented list can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ListCapability {
    Delete,
    Reorder,
    ToggleCompleted,
    Pin,
    MultiSelect,
}

impl ListCapability {
    /// Stable string id.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Delete => "delete",
            Self::Reorder => "reorder",
            Self::ToggleCompleted => "toggle_completed",
            Self::Pin => "pin",
            Self::MultiSelect => "multi_select",
        }
    }

    /// User-facing short description.
    pub fn description(self) -> &'static str {
        match self {
            Self::Delete => "Remove rows by swipe or edit mode.",
            Self::Reorder => "Drag rows to a new position in edit mode.",
            Self::ToggleCompleted => "Mark rows complete or incomplete.",
            Self::Pin => "Pin rows so they stand out or sort first.",
            Self::MultiSelect => "Select several rows and act on them together.",
        }
    }
}
