//! List commands over owned in-memory state.
//!
//! # Responsibility
//! - Expose explicit command methods instead of aliasing bindings into state.
//! - Keep the presentation layer free of index bookkeeping.

pub mod row_action;
pub mod task_list;
