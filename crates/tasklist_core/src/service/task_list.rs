//! Owned task list state and its commands.
//!
//! # Responsibility
//! - Hold base order, layout and multi-select state behind one owner.
//! - Map row offsets from the presented order back to stable ids.
//!
//! # Invariants
//! - Base order only changes through `move_tasks` and deletions.
//! - Task ids are unique for the lifetime of the list.
//! - Selection only ever contains ids present in the list.
//! - Single-item paths fail with `NotFound`; bulk paths skip missing ids.
//! - A command that returns `Err` has not mutated anything.

use crate::model::display::{display_order, ListLayout};
use crate::model::task::{Task, TaskId};
use crate::service::row_action::RowAction;
use log::{debug, warn};
use std::collections::{BTreeSet, HashSet};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type TaskListResult<T> = Result<T, TaskListError>;

/// Errors from task list commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskListError {
    /// No task with this id is in the list.
    NotFound(TaskId),
    /// A row or base offset points past the end of the list.
    OffsetOutOfRange { offset: usize, len: usize },
    /// Manual reordering is not defined for the current layout.
    ReorderUnavailable(ListLayout),
    /// Construction input repeats an id.
    DuplicateId(TaskId),
}

impl Display for TaskListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "task not found: {id}"),
            Self::OffsetOutOfRange { offset, len } => {
                write!(f, "offset {offset} out of range for list of {len} task(s)")
            }
            Self::ReorderUnavailable(layout) => {
                write!(f, "manual reorder is not available for {layout:?} layout")
            }
            Self::DuplicateId(id) => write!(f, "duplicate task id: {id}"),
        }
    }
}

impl Error for TaskListError {}

/// In-memory task list bound to one presenting session.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    layout: ListLayout,
    selection: HashSet<TaskId>,
}

impl TaskList {
    /// Creates a list from seed tasks in their given base order.
    ///
    /// # Errors
    /// - `DuplicateId` when two seed tasks share an id.
    pub fn from_tasks(tasks: Vec<Task>, layout: ListLayout) -> TaskListResult<Self> {
        let mut seen = HashSet::with_capacity(tasks.len());
        for task in &tasks {
            if !seen.insert(task.id) {
                return Err(TaskListError::DuplicateId(task.id));
            }
        }
        Ok(Self {
            tasks,
            layout,
            selection: HashSet::new(),
        })
    }

    /// Creates a list of fresh tasks from titles.
    pub fn from_titles<I, S>(titles: I, layout: ListLayout) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tasks: titles.into_iter().map(Task::new).collect(),
            layout,
            selection: HashSet::new(),
        }
    }

    /// Tasks in base order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Ids in base order.
    pub fn ids(&self) -> Vec<TaskId> {
        self.tasks.iter().map(|task| task.id).collect()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn layout(&self) -> ListLayout {
        self.layout
    }

    pub fn set_layout(&mut self, layout: ListLayout) {
        self.layout = layout;
    }

    /// Rows in presented order, recomputed on every call.
    pub fn display_order(&self) -> Vec<&Task> {
        display_order(&self.tasks, self.layout)
    }

    /// Row position of `id` in the current display order.
    pub fn display_index_of(&self, id: TaskId) -> TaskListResult<usize> {
        self.display_order()
            .iter()
            .position(|task| task.id == id)
            .ok_or_else(|| self.not_found(id, "display_index_of"))
    }

    /// Strict lookup used by row bindings.
    pub fn task(&self, id: TaskId) -> TaskListResult<&Task> {
        self.tasks
            .iter()
            .find(|task| task.id == id)
            .ok_or_else(|| self.not_found(id, "task"))
    }

    /// Removes every task whose id is in `ids` and returns how many were removed.
    ///
    /// Ids that are not present are ignored, so repeating a delete is a no-op.
    pub fn delete(&mut self, ids: &HashSet<TaskId>) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !ids.contains(&task.id));
        self.selection.retain(|id| !ids.contains(id));
        let removed = before - self.tasks.len();
        debug!(
            "event=tasks_deleted module=task_list status=ok requested={} removed={}",
            ids.len(),
            removed
        );
        removed
    }

    /// Deletes the rows at `offsets` of the current display order.
    ///
    /// Every offset is resolved to an id before anything is removed, so
    /// earlier removals never shift later offsets.
    ///
    /// # Errors
    /// - `OffsetOutOfRange` when any offset is past the last row; nothing is
    ///   deleted in that case.
    pub fn delete_at_display_offsets(
        &mut self,
        offsets: &BTreeSet<usize>,
    ) -> TaskListResult<usize> {
        let ids = {
            let rows = self.display_order();
            let mut ids = HashSet::with_capacity(offsets.len());
            for &offset in offsets {
                let task = rows.get(offset).ok_or(TaskListError::OffsetOutOfRange {
                    offset,
                    len: rows.len(),
                })?;
                ids.insert(task.id);
            }
            ids
        };
        Ok(self.delete(&ids))
    }

    /// Moves the tasks at base `offsets` to `destination`.
    ///
    /// The moved tasks keep their relative order and are inserted as one block
    /// at `destination` of the remaining tasks, clamped to the end.
    ///
    /// # Errors
    /// - `ReorderUnavailable` under `ListLayout::PinnedFirst`.
    /// - `OffsetOutOfRange` when an offset is `>= len` or `destination > len`.
    pub fn move_tasks(
        &mut self,
        offsets: &BTreeSet<usize>,
        destination: usize,
    ) -> TaskListResult<()> {
        if !self.layout.allows_reorder() {
            return Err(TaskListError::ReorderUnavailable(self.layout));
        }
        let len = self.tasks.len();
        if let Some(&offset) = offsets.iter().next_back().filter(|&&offset| offset >= len) {
            return Err(TaskListError::OffsetOutOfRange { offset, len });
        }
        if destination > len {
            return Err(TaskListError::OffsetOutOfRange {
                offset: destination,
                len,
            });
        }
        if offsets.is_empty() {
            return Ok(());
        }

        let mut moving = Vec::with_capacity(offsets.len());
        let mut remaining = Vec::with_capacity(len - offsets.len());
        for (index, task) in std::mem::take(&mut self.tasks).into_iter().enumerate() {
            if offsets.contains(&index) {
                moving.push(task);
            } else {
                remaining.push(task);
            }
        }
        let insert_at = destination.min(remaining.len());
        let tail = remaining.split_off(insert_at);
        remaining.extend(moving);
        remaining.extend(tail);
        self.tasks = remaining;

        debug!(
            "event=tasks_moved module=task_list status=ok count={} destination={}",
            offsets.len(),
            destination
        );
        Ok(())
    }

    /// Flips completion of one task and returns the new value.
    pub fn toggle_completed(&mut self, id: TaskId) -> TaskListResult<bool> {
        let value = self.task_mut(id, "toggle_completed")?.toggle_completed();
        debug!("event=task_completion_toggled module=task_list status=ok completed={value}");
        Ok(value)
    }

    /// Flips the pin flag of one task and returns the new value.
    pub fn toggle_pinned(&mut self, id: TaskId) -> TaskListResult<bool> {
        let value = self.task_mut(id, "toggle_pinned")?.toggle_pinned();
        debug!("event=task_pin_toggled module=task_list status=ok pinned={value}");
        Ok(value)
    }

    /// Replaces the title of one task.
    pub fn rename(&mut self, id: TaskId, title: impl Into<String>) -> TaskListResult<()> {
        self.task_mut(id, "rename")?.title = title.into();
        Ok(())
    }

    /// Marks every present task in `ids` completed, then clears the selection.
    ///
    /// Returns how many tasks were found.
    pub fn bulk_complete(&mut self, ids: &HashSet<TaskId>) -> usize {
        let mut touched = 0;
        for task in self.tasks.iter_mut().filter(|task| ids.contains(&task.id)) {
            task.is_completed = true;
            touched += 1;
        }
        self.selection.clear();
        debug!(
            "event=tasks_bulk_completed module=task_list status=ok requested={} touched={}",
            ids.len(),
            touched
        );
        touched
    }

    /// Removes every present task in `ids`, then clears the selection.
    pub fn bulk_delete(&mut self, ids: &HashSet<TaskId>) -> usize {
        let removed = self.delete(ids);
        self.selection.clear();
        removed
    }

    /// Adds one task to the selection.
    pub fn select(&mut self, id: TaskId) -> TaskListResult<()> {
        self.task(id)?;
        self.selection.insert(id);
        Ok(())
    }

    /// Removes one id from the selection. Returns whether it was selected.
    pub fn deselect(&mut self, id: TaskId) -> bool {
        self.selection.remove(&id)
    }

    /// Flips selection of one task and returns whether it is now selected.
    pub fn toggle_selection(&mut self, id: TaskId) -> TaskListResult<bool> {
        self.task(id)?;
        if self.selection.remove(&id) {
            return Ok(false);
        }
        self.selection.insert(id);
        Ok(true)
    }

    pub fn is_selected(&self, id: TaskId) -> bool {
        self.selection.contains(&id)
    }

    /// Currently selected ids.
    pub fn selection(&self) -> &HashSet<TaskId> {
        &self.selection
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Completes every selected task.
    pub fn complete_selected(&mut self) -> usize {
        let ids = self.selection.clone();
        self.bulk_complete(&ids)
    }

    /// Deletes every selected task.
    pub fn delete_selected(&mut self) -> usize {
        let ids = self.selection.clone();
        self.bulk_delete(&ids)
    }

    /// Runs one row action against the task with `id`.
    ///
    /// Row actions come from a rendered row, so a missing id is an error even
    /// for `Delete`.
    pub fn apply(&mut self, id: TaskId, action: RowAction) -> TaskListResult<()> {
        match action {
            RowAction::Delete => {
                self.task(id)?;
                self.delete(&HashSet::from([id]));
            }
            RowAction::TogglePinned => {
                self.toggle_pinned(id)?;
            }
            RowAction::ToggleCompleted => {
                self.toggle_completed(id)?;
            }
        }
        Ok(())
    }

    fn task_mut(&mut self, id: TaskId, op: &str) -> TaskListResult<&mut Task> {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => Ok(task),
            None => {
                warn!("event=task_lookup module=task_list status=not_found op={op}");
                Err(TaskListError::NotFound(id))
            }
        }
    }

    fn not_found(&self, id: TaskId, op: &str) -> TaskListError {
        warn!("event=task_lookup module=task_list status=not_found op={op}");
        TaskListError::NotFound(id)
    }
}
