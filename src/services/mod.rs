//! Service layer containing the workflow controllers and side-effect helpers.
//!
//! ## Service map
//! - `workflow.rs` — per-controller request lifecycle state machine.
//! - `upload.rs` — upload-and-validate workflow.
//! - `listing.rs` — persisted-record list/filter workflow.
//! - `audit.rs` — applicable-rules audit workflow.
//! - `options.rs` — best-effort selector options loader.
//! - `session.rs` — base URL + gateway + controllers for one console run.
//! - `render.rs` — stateless text presentation of controller results.
//! - `settings.rs` — optional config file (`~/.config/empre/config.toml`).
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Controllers catch their own failures; nothing escapes to a global handler.
//! - Prefer pure helpers where possible.
//! - Keep command handlers thin; delegate to services.

pub mod audit;
pub mod listing;
pub mod options;
pub mod output;
pub mod render;
pub mod session;
pub mod settings;
pub mod upload;
pub mod workflow;
