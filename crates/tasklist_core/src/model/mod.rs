//! Domain model for list rows.
//!
//! # Responsibility
//! - Define the task record shared by every list pattern.
//! - Derive presentation order from stored order without caching it.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Display order is recomputed from base order on every read.

pub mod display;
pub mod task;
