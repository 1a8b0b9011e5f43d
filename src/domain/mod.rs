//! Shared data model layer (structs and pure predicates only).
//!
//! ## Purpose
//! - Keep wire DTOs and output structs in one place.
//! - Avoid cyclic imports and duplicated type definitions.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — records, rule audit, options, output envelope.
//! - `status.rs` — pass/fail categorization of a backend status string.
//!
//! ## Rule of thumb
//! Domain types are data-only: no filesystem/network side effects.

pub mod models;
pub mod status;
