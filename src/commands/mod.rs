//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `run.rs` — run/plan/vectors command handlers.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate matrix logic to `services/*` and encoding to `encoder`.
//! - Keep behavior and output schema stable.

pub mod run;

pub use run::{handle_plan, handle_run, handle_vectors};
