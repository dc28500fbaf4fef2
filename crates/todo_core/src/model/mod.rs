//! Domain model for the task tracker.
//!
//! # Responsibility
//! - Define the task record and its field-level validation errors.
//!
//! # Invariants
//! - Every task is identified by a positive `TaskId`.
//! - A `Task` value can only exist in a validated state.

pub mod task;
