//! High-level conversion API: spreadsheet path in, JSON text out.
//!
//! Stages, in order:
//! 1. Load the worksheet into a [`Table`]
//! 2. Validate the required columns
//! 3. Rename headers
//! 4. Build one [`Record`] per row
//! 5. Render `Fecha` / `Hora` as ISO-8601 text
//! 6. Serialize the records as a JSON array
//!
//! # Example
//!
//! ```rust,ignore
//! use ventas2json::convert;
//!
//! // Always a JSON string: an array of records or {"error": "..."}
//! let json = convert("ventas.xlsx");
//! println!("{}", json);
//! ```

use std::path::Path;

use serde_json::json;

use crate::error::{ConvertError, ConvertResult, SerializationError};
use crate::logs::{log_error, log_info, log_success};
use crate::models::Record;
use crate::parser::{load_table, SheetSelector, Table};
use crate::validation::validate_columns;

use super::rename::rename_headers;
use super::temporal::normalize_record;

/// Options for the conversion pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Worksheet to read (first sheet by default)
    pub sheet: SheetSelector,
}

/// Convert the spreadsheet at `path` with default options.
///
/// Never fails: errors are returned as `{"error": "<message>"}`.
pub fn convert<P: AsRef<Path>>(path: P) -> String {
    convert_with_options(path, &ConvertOptions::default())
}

/// Same as [`convert`] with explicit options.
pub fn convert_with_options<P: AsRef<Path>>(path: P, options: &ConvertOptions) -> String {
    match convert_file(path.as_ref(), options).and_then(|records| to_json(&records)) {
        Ok(json) => json,
        Err(err) => {
            log_error(err.to_string());
            error_json(&err.to_string())
        }
    }
}

/// Load, validate and normalize a spreadsheet into records.
///
/// Temporal values outside `Fecha` / `Hora` are kept as they are and will
/// fail in [`to_json`].
pub fn convert_file(path: &Path, options: &ConvertOptions) -> ConvertResult<Vec<Record>> {
    log_info(format!("Reading {}", path.display()));
    let table = load_table(path, &options.sheet)?;

    validate_columns(&table.headers)?;
    log_success(format!("All required columns present in '{}'", table.sheet));

    let records = table_to_records(table);
    log_success(format!("Converted {} rows", records.len()));
    Ok(records)
}

/// Rename the headers and build normalized records, preserving row order.
pub fn table_to_records(table: Table) -> Vec<Record> {
    let headers = rename_headers(&table.headers);

    table
        .rows
        .into_iter()
        .map(|row| {
            let mut record = Record::with_capacity(headers.len());
            for (header, value) in headers.iter().zip(row) {
                record.insert(header.as_str(), value);
            }
            normalize_record(&mut record);
            record
        })
        .collect()
}

/// Serialize records as a JSON array.
pub fn to_json(records: &[Record]) -> ConvertResult<String> {
    serde_json::to_string(records).map_err(|err| match first_temporal(records) {
        Some((row, column, type_name)) => ConvertError::Serialization(SerializationError(
            serde::ser::Error::custom(format!(
                "Object of type {} is not JSON serializable (column '{}', row {})",
                type_name,
                column,
                row + 1
            )),
        )),
        None => err.into(),
    })
}

/// Position of the first value with no JSON form, 0-based row.
fn first_temporal(records: &[Record]) -> Option<(usize, &str, &'static str)> {
    records.iter().enumerate().find_map(|(row, record)| {
        record
            .iter()
            .find(|(_, value)| value.is_temporal())
            .map(|(column, value)| (row, column, value.type_name()))
    })
}

/// `{"error": "<message>"}` as JSON text.
pub fn error_json(message: &str) -> String {
    json!({ "error": message }).to_string()
}
