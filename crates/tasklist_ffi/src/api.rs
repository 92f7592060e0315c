//! FFI use-case API for Flutter-facing list calls.
//!
//! # Responsibility
//! - Expose the task list commands as sync, row-level calls.
//! - Own the single list session a presenting screen binds to.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Task ids cross the boundary as hyphenated UUID strings.
//! - Interactions a demo pattern does not enable are rejected.

use log::warn;
use std::collections::BTreeSet;
use std::sync::{Mutex, OnceLock};
use tasklist_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    DemoList, ListCapability, LogConfig, RowAction, TaskId, TaskList,
};

const DEMO_ENV: &str = "TASKLIST_DEMO";
static SESSION: OnceLock<Mutex<ListSession>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    let result = LogConfig::new(level.as_str(), log_dir.trim())
        .and_then(|config| init_logging_inner(&config));
    match result {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    /// Stable task ID in string form.
    pub id: String,
    pub title: String,
    pub is_completed: bool,
    pub is_pinned: bool,
    pub is_selected: bool,
}

/// Rows of the active session in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRowsResponse {
    pub ok: bool,
    /// Active pattern name, e.g. `pinned`.
    pub demo: String,
    /// Navigation title for the pattern.
    pub title: String,
    /// Enabled interactions (`delete|reorder|toggle_completed|pin|multi_select`).
    pub capabilities: Vec<String>,
    /// Help text for each entry of `capabilities`, index-aligned.
    pub capability_descriptions: Vec<String>,
    pub rows: Vec<TaskRow>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Generic envelope for list commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListActionResponse {
    /// Whether the command succeeded.
    pub ok: bool,
    /// Number of rows the command touched.
    pub affected: u32,
    pub message: String,
}

impl ListActionResponse {
    fn success(affected: usize, message: impl Into<String>) -> Self {
        Self {
            ok: true,
            affected: u32::try_from(affected).unwrap_or(u32::MAX),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            affected: 0,
            message: message.into(),
        }
    }
}

/// One swipe/tap action a row offers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowActionItem {
    /// Stable action name accepted by [`list_apply_row_action`].
    pub action: String,
    /// Label for the current task state, e.g. `Pin` or `Unpin`.
    pub label: String,
}

/// Actions available on one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowActionsResponse {
    pub ok: bool,
    pub actions: Vec<RowActionItem>,
    pub message: String,
}

/// Replaces the session with a fresh list for the named pattern.
#[flutter_rust_bridge::frb(sync)]
pub fn list_reset(demo: String) -> ListRowsResponse {
    match demo.parse::<DemoList>() {
        Ok(demo) => match with_session(|session| {
            *session = ListSession::new(demo);
            Ok(session.rows())
        }) {
            Ok(rows) => rows,
            Err(message) => ListRowsResponse::failure(message),
        },
        Err(err) => ListRowsResponse::failure(format!("list_reset failed: {err}")),
    }
}

/// Returns the current rows in display order.
#[flutter_rust_bridge::frb(sync)]
pub fn list_rows() -> ListRowsResponse {
    with_session(|session| Ok(session.rows())).unwrap_or_else(ListRowsResponse::failure)
}

/// Toggles completion of one row.
#[flutter_rust_bridge::frb(sync)]
pub fn list_toggle_completed(id: String) -> ListActionResponse {
    action_response(with_session(|session| {
        session.apply(&id, RowAction::ToggleCompleted)
    }))
}

/// Toggles the pin flag of one row.
#[flutter_rust_bridge::frb(sync)]
pub fn list_toggle_pinned(id: String) -> ListActionResponse {
    action_response(with_session(|session| {
        session.apply(&id, RowAction::TogglePinned)
    }))
}

/// Runs a named row action (`delete|toggle_pinned|toggle_completed`).
#[flutter_rust_bridge::frb(sync)]
pub fn list_apply_row_action(id: String, action: String) -> ListActionResponse {
    let Some(action) = RowAction::parse(&action) else {
        return ListActionResponse::failure(format!("unknown row action `{action}`"));
    };
    action_response(with_session(|session| session.apply(&id, action)))
}

/// Lists the actions one row offers with their current labels.
#[flutter_rust_bridge::frb(sync)]
pub fn list_row_actions(id: String) -> RowActionsResponse {
    match with_session(|session| session.row_actions(&id)) {
        Ok(actions) => RowActionsResponse {
            ok: true,
            actions,
            message: String::new(),
        },
        Err(message) => RowActionsResponse {
            ok: false,
            actions: Vec::new(),
            message,
        },
    }
}

/// Deletes rows by their offsets in the current display order.
#[flutter_rust_bridge::frb(sync)]
pub fn list_delete_rows(offsets: Vec<u32>) -> ListActionResponse {
    action_response(with_session(|session| session.delete_rows(&offsets)))
}

/// Moves rows at `offsets` to `destination`.
#[flutter_rust_bridge::frb(sync)]
pub fn list_move_rows(offsets: Vec<u32>, destination: u32) -> ListActionResponse {
    action_response(with_session(|session| {
        session.move_rows(&offsets, destination)
    }))
}

/// Adds one row to the multi-select selection.
#[flutter_rust_bridge::frb(sync)]
pub fn list_select(id: String) -> ListActionResponse {
    action_response(with_session(|session| session.select(&id)))
}

/// Removes one row from the selection.
#[flutter_rust_bridge::frb(sync)]
pub fn list_deselect(id: String) -> ListActionResponse {
    action_response(with_session(|session| session.deselect(&id)))
}

/// Completes every selected row and clears the selection.
#[flutter_rust_bridge::frb(sync)]
pub fn list_complete_selected() -> ListActionResponse {
    action_response(with_session(|session| session.complete_selected()))
}

/// Deletes every selected row and clears the selection.
#[flutter_rust_bridge::frb(sync)]
pub fn list_delete_selected() -> ListActionResponse {
    action_response(with_session(|session| session.delete_selected()))
}

impl ListRowsResponse {
    fn failure(message: String) -> Self {
        Self {
            ok: false,
            demo: String::new(),
            title: String::new(),
            capabilities: Vec::new(),
            capability_descriptions: Vec::new(),
            rows: Vec::new(),
            message,
        }
    }
}

/// One presented list plus the pattern it was seeded from.
struct ListSession {
    demo: DemoList,
    list: TaskList,
}

impl ListSession {
    fn new(demo: DemoList) -> Self {
        Self {
            demo,
            list: demo.build(),
        }
    }

    fn rows(&self) -> ListRowsResponse {
        let rows = self
            .list
            .display_order()
            .into_iter()
            .map(|task| TaskRow {
                id: task.id.to_string(),
                title: task.title.clone(),
                is_completed: task.is_completed,
                is_pinned: task.is_pinned,
                is_selected: self.list.is_selected(task.id),
            })
            .collect::<Vec<_>>();
        let (capabilities, capability_descriptions): (Vec<_>, Vec<_>) = self
            .demo
            .capabilities()
            .iter()
            .map(|capability| {
                (
                    capability.as_str().to_string(),
                    capability.description().to_string(),
                )
            })
            .unzip();
        ListRowsResponse {
            ok: true,
            demo: self.demo.to_string(),
            title: self.demo.title().to_string(),
            capabilities,
            capability_descriptions,
            message: format!("{} row(s).", rows.len()),
            rows,
        }
    }

    fn apply(&mut self, id: &str, action: RowAction) -> Result<(usize, String), String> {
        self.ensure(required_capability(action))?;
        let id = parse_id(id)?;
        self.list
            .apply(id, action)
            .map_err(|err| format!("{} failed: {err}", action.as_str()))?;
        Ok((1, format!("{} applied.", action.as_str())))
    }

    fn row_actions(&self, id: &str) -> Result<Vec<RowActionItem>, String> {
        let id = parse_id(id)?;
        let task = self.list.task(id).map_err(|err| err.to_string())?;
        Ok(RowAction::ALL
            .into_iter()
            .filter(|action| self.demo.supports(required_capability(*action)))
            .map(|action| RowActionItem {
                action: action.as_str().to_string(),
                label: action.label(task).to_string(),
            })
            .collect())
    }

    fn delete_rows(&mut self, offsets: &[u32]) -> Result<(usize, String), String> {
        self.ensure(ListCapability::Delete)?;
        let offsets = offsets
            .iter()
            .map(|offset| *offset as usize)
            .collect::<BTreeSet<_>>();
        let removed = self
            .list
            .delete_at_display_offsets(&offsets)
            .map_err(|err| format!("delete failed: {err}"))?;
        Ok((removed, format!("Deleted {removed} row(s).")))
    }

    fn move_rows(&mut self, offsets: &[u32], destination: u32) -> Result<(usize, String), String> {
        self.ensure(ListCapability::Reorder)?;
        let offsets = offsets
            .iter()
            .map(|offset| *offset as usize)
            .collect::<BTreeSet<_>>();
        self.list
            .move_tasks(&offsets, destination as usize)
            .map_err(|err| format!("move failed: {err}"))?;
        Ok((offsets.len(), format!("Moved {} row(s).", offsets.len())))
    }

    fn select(&mut self, id: &str) -> Result<(usize, String), String> {
        self.ensure(ListCapability::MultiSelect)?;
        let id = parse_id(id)?;
        self.list
            .select(id)
            .map_err(|err| format!("select failed: {err}"))?;
        Ok((1, "Selected.".to_string()))
    }

    fn deselect(&mut self, id: &str) -> Result<(usize, String), String> {
        self.ensure(ListCapability::MultiSelect)?;
        let id = parse_id(id)?;
        let changed = usize::from(self.list.deselect(id));
        Ok((changed, "Deselected.".to_string()))
    }

    fn complete_selected(&mut self) -> Result<(usize, String), String> {
        self.ensure(ListCapability::MultiSelect)?;
        let touched = self.list.complete_selected();
        Ok((touched, format!("Completed {touched} row(s).")))
    }

    fn delete_selected(&mut self) -> Result<(usize, String), String> {
        self.ensure(ListCapability::MultiSelect)?;
        let removed = self.list.delete_selected();
        Ok((removed, format!("Deleted {removed} row(s).")))
    }

    fn ensure(&self, capability: ListCapability) -> Result<(), String> {
        if self.demo.supports(capability) {
            return Ok(());
        }
        Err(format!(
            "{} is not enabled for the {} list",
            capability.as_str(),
            self.demo
        ))
    }
}

fn required_capability(action: RowAction) -> ListCapability {
    match action {
        RowAction::Delete => ListCapability::Delete,
        RowAction::TogglePinned => ListCapability::Pin,
        RowAction::ToggleCompleted => ListCapability::ToggleCompleted,
    }
}

fn parse_id(value: &str) -> Result<TaskId, String> {
    TaskId::parse_str(value).map_err(|err| err.to_string())
}

fn initial_demo() -> DemoList {
    match std::env::var(DEMO_ENV) {
        Ok(raw) if !raw.trim().is_empty() => raw.parse::<DemoList>().unwrap_or_else(|err| {
            warn!("event=session_init module=ffi status=fallback reason={err}");
            DemoList::default()
        }),
        _ => DemoList::default(),
    }
}

fn with_session<T>(f: impl FnOnce(&mut ListSession) -> Result<T, String>) -> Result<T, String> {
    let mut session = SESSION
        .get_or_init(|| Mutex::new(ListSession::new(initial_demo())))
        .lock()
        .map_err(|_| "list session lock poisoned".to_string())?;
    f(&mut session)
}

fn action_response(result: Result<(usize, String), String>) -> ListActionResponse {
    match result {
        Ok((affected, message)) => ListActionResponse::success(affected, message),
        Err(message) => ListActionResponse::failure(message),
    }
}
