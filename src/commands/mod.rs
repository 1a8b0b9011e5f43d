//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `console.rs` — one-shot subcommands (validate/list/rules/options).
//! - `shell.rs` — interactive session loop.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate workflow logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod console;
pub mod shell;

pub use console::handle_command;
