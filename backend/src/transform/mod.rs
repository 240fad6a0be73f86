//! Transformation module.
//!
//! Turns a loaded sheet into JSON-ready records:
//! - Rename: source headers to storage-friendly names
//! - Temporal: ISO-8601 text for `Fecha` / `Hora`
//! - Pipeline: load, validate, rename, normalize, serialize

pub mod pipeline;
pub mod rename;
pub mod temporal;

pub use pipeline::*;
pub use rename::{normalized_name, rename_headers, RENAMES};
pub use temporal::normalize_record;
