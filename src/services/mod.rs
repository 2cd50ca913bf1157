//! Service layer containing the matrix logic and side-effect helpers.
//!
//! ## Service map
//! - `catalog.rs` — builtin test vectors + catalog file loading/validation.
//! - `matrix.rs` — cross-product expansion and the task naming scheme.
//! - `runner.rs` — per-task execution with failure isolation.
//! - `report.rs` — outcome lines, error channel, JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod catalog;
pub mod matrix;
pub mod report;
pub mod runner;
