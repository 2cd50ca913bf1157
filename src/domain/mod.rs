//! Shared data model layer (structs/enums only).
//!
//! ## Purpose
//! - Keep the test-vector/task/outcome types and report structs in one place.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — segments, vectors, tasks, outcomes, report/output structs.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem or encoder side effects.

pub mod models;
