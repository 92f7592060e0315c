//! Seeded list patterns used by the app shell and the smoke CLI.
//!
//! # Responsibility
//! - Describe each list pattern: seed rows, layout and enabled interactions.
//! - Build fresh `TaskList` values for a pattern on demand.

pub mod capability;
pub mod preset;
