//! Core list model for the task list app.
//! This crate owns every invariant the list rows depend on.

pub mod demo;
pub mod logging;
pub mod model;
pub mod service;

pub use demo::capability::ListCapability;
pub use demo::preset::{DemoList, DemoParseError};
pub use logging::{default_log_level, init_logging, logging_status, LogConfig, LoggingError};
pub use model::display::{display_order, pinned_first, ListLayout};
pub use model::task::{Task, TaskId, TaskValidationError};
pub use service::row_action::RowAction;
pub use service::task_list::{TaskList, TaskListError, TaskListResult};

/// Minimal health-check API for binding smoke tests.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
