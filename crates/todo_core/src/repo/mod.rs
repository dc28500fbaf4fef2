//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define the task data access contract used by services.
//! - Keep collection details out of service orchestration.
//!
//! # Invariants
//! - Repository writes enforce `Task::validate()` before storing.
//! - Repository APIs return semantic errors (`NotFound`, `Duplicate`).

pub mod task_repo;
