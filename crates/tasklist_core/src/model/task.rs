//! Task domain model.
//!
//! # Responsibility
//! - Define the record rendered as one row by every list pattern.
//! - Provide the in-place toggles used by row bindings.
//!
//! # Invariants
//! - `id` is assigned once and never reused for another task.
//! - `id` is never the nil UUID.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one task.
///
/// Rows are addressed by this id rather than by position so that commands
/// stay correct when the display order differs from storage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Uuid", into = "Uuid")]
pub struct TaskId(Uuid);

impl TaskId {
    /// Generates a fresh random id.
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing UUID, rejecting the nil value.
    pub fn from_uuid(uuid: Uuid) -> Result<Self, TaskValidationError> {
        if uuid.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        Ok(Self(uuid))
    }

    /// Parses the hyphenated string form used across the FFI boundary.
    pub fn parse_str(value: &str) -> Result<Self, TaskValidationError> {
        let uuid = Uuid::parse_str(value.trim())
            .map_err(|_| TaskValidationError::MalformedId(value.to_string()))?;
        Self::from_uuid(uuid)
    }

    /// Returns the wrapped UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl TryFrom<Uuid> for TaskId {
    type Error = TaskValidationError;

    fn try_from(uuid: Uuid) -> Result<Self, Self::Error> {
        Self::from_uuid(uuid)
    }
}

impl From<TaskId> for Uuid {
    fn from(id: TaskId) -> Self {
        id.0
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shape errors for task identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// The nil UUID cannot identify a task.
    NilId,
    /// Input is not a UUID string.
    MalformedId(String),
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "task id must not be the nil uuid"),
            Self::MalformedId(value) => write!(f, "malformed task id `{value}`"),
        }
    }
}

impl Error for TaskValidationError {}

/// One to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable id used for every lookup.
    pub id: TaskId,
    /// User-facing label.
    pub title: String,
    pub is_completed: bool,
    /// Pinned tasks are listed ahead of unpinned ones in pinned-first layouts.
    pub is_pinned: bool,
}

impl Task {
    /// Creates an incomplete, unpinned task with a generated id.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: TaskId::new_v4(),
            title: title.into(),
            is_completed: false,
            is_pinned: false,
        }
    }

    /// Creates a task with a caller-provided id.
    ///
    /// Used by tests and import paths where identity already exists.
    pub fn with_id(uuid: Uuid, title: impl Into<String>) -> Result<Self, TaskValidationError> {
        let id = TaskId::from_uuid(uuid)?;
        Ok(Self {
            id,
            title: title.into(),
            is_completed: false,
            is_pinned: false,
        })
    }

    /// Builder-style completion flag, mostly for seed data.
    pub fn completed(mut self, is_completed: bool) -> Self {
        self.is_completed = is_completed;
        self
    }

    /// Builder-style pin flag.
    pub fn pinned(mut self, is_pinned: bool) -> Self {
        self.is_pinned = is_pinned;
        self
    }

    /// Flips completion and returns the new value.
    pub fn toggle_completed(&mut self) -> bool {
        self.is_completed = !self.is_completed;
        self.is_completed
    }

    /// Flips the pin flag and returns the new value.
    pub fn toggle_pinned(&mut self) -> bool {
        self.is_pinned = !self.is_pinned;
        self.is_pinned
    }
}
