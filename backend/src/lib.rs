//! # ventas2json - sales spreadsheet to JSON records
//!
//! Reads a point-of-sale export, checks that every required column is
//! present, renames columns to storage-friendly names and emits the rows as
//! a JSON array of objects.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Excel File  │────▶│   Parser    │────▶│  Validate   │────▶│  Transform  │────▶ JSON
//! │ (xlsx/xls)  │     │ (calamine)  │     │  (columns)  │     │ (rename+ISO)│
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ventas2json::convert;
//!
//! let json = convert("ventas.xlsx");
//! // `[{"Fecha":"2024-01-15T00:00:00", ...}]` or `{"error":"..."}`
//! println!("{}", json);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types per pipeline stage
//! - [`models`] - Cell values and records
//! - [`parser`] - Workbook loading
//! - [`validation`] - Required columns
//! - [`transform`] - Renaming, date normalization and the pipeline
//! - [`logs`] - Progress logging

// Core modules
pub mod error;
pub mod logs;
pub mod models;

// Loading
pub mod parser;

// Validation
pub mod validation;

// Transformation
pub mod transform;

#[cfg(test)]
mod test_support;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{ConvertError, ConvertResult, LoadError, LoadResult, SchemaError, SerializationError};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{CellValue, Record};

// =============================================================================
// Re-exports - Loading & Validation
// =============================================================================

pub use parser::{cell_to_value, header_names, load_table, SheetSelector, Table};
pub use validation::{missing_columns, validate_columns, REQUIRED_COLUMNS};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use transform::pipeline::{
    convert,
    convert_file,
    convert_with_options,
    error_json,
    table_to_records,
    to_json,
    ConvertOptions,
};
pub use transform::{normalize_record, normalized_name, rename_headers, RENAMES};

/// Message printed when the program is not given exactly one path.
pub const USAGE_ERROR: &str = "Please provide the path to the Excel file as an argument";
