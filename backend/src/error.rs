//! Error types for the spreadsheet conversion pipeline.
//!
//! One error type per pipeline stage, wrapped by [`ConvertError`]:
//!
//! - [`LoadError`] - the workbook could not be opened or read
//! - [`SchemaError`] - required columns are absent
//! - [`SerializationError`] - a value could not be encoded as JSON
//!
//! The `Display` output of [`ConvertError`] is the exact message reported to
//! the caller inside `{"error": ...}`, so the wrapper adds no prefix.

use std::path::PathBuf;

use thiserror::Error;

// =============================================================================
// Load Errors
// =============================================================================

/// Errors while opening a workbook and reading a worksheet.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file is missing, unreadable, or not a supported spreadsheet.
    #[error("Failed to open Excel file '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// The workbook contains no worksheet at all.
    #[error("Excel file '{}' contains no worksheets", .path.display())]
    NoWorksheets { path: PathBuf },

    /// The requested worksheet does not exist.
    #[error("Worksheet '{sheet}' not found in Excel file '{}'", .path.display())]
    SheetNotFound { path: PathBuf, sheet: String },

    /// The worksheet exists but its cells could not be decoded.
    #[error("Failed to read worksheet '{sheet}': {source}")]
    Sheet {
        sheet: String,
        #[source]
        source: calamine::Error,
    },
}

// =============================================================================
// Schema Errors
// =============================================================================

/// One or more required columns are absent from the header row.
///
/// `missing` keeps the order of the required-column list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Missing required columns in Excel file: [{}]", quoted_list(.missing))]
pub struct SchemaError {
    pub missing: Vec<String>,
}

/// Render names the way a Python list of strings prints: `'a', 'b'`.
fn quoted_list(names: &[String]) -> String {
    names
        .iter()
        .map(|name| format!("'{}'", name))
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// Serialization Errors
// =============================================================================

/// A record value had no JSON representation.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct SerializationError(#[from] pub serde_json::Error);

// =============================================================================
// Convert Errors (top-level)
// =============================================================================

/// Top-level conversion error.
///
/// This is the error returned by [`crate::convert_file`]. Every variant
/// displays as the wrapped error's message.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Serialization(#[from] SerializationError),
}

impl From<serde_json::Error> for ConvertError {
    fn from(err: serde_json::Error) -> Self {
        ConvertError::Serialization(SerializationError(err))
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for workbook loading.
pub type LoadResult<T> = Result<T, LoadError>;

/// Result type for the conversion pipeline.
pub type ConvertResult<T> = Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_single_column() {
        let err = SchemaError {
            missing: vec!["TA".into()],
        };
        assert_eq!(
            err.to_string(),
            "Missing required columns in Excel file: ['TA']"
        );
    }

    #[test]
    fn test_schema_error_keeps_order() {
        let err = SchemaError {
            missing: vec!["Fecha".into(), "Hora".into(), "Tipo de Pago".into()],
        };
        assert_eq!(
            err.to_string(),
            "Missing required columns in Excel file: ['Fecha', 'Hora', 'Tipo de Pago']"
        );
    }

    #[test]
    fn test_error_conversion_chain() {
        // SchemaError -> ConvertError keeps the message untouched
        let schema_err = SchemaError {
            missing: vec!["Dto.".into()],
        };
        let convert_err: ConvertError = schema_err.clone().into();
        assert_eq!(convert_err.to_string(), schema_err.to_string());

        // LoadError -> ConvertError
        let load_err = LoadError::NoWorksheets {
            path: PathBuf::from("ventas.xlsx"),
        };
        let convert_err: ConvertError = load_err.into();
        assert!(convert_err.to_string().contains("ventas.xlsx"));
        assert!(convert_err.to_string().contains("no worksheets"));
    }

    #[test]
    fn test_sheet_not_found_format() {
        let err = LoadError::SheetNotFound {
            path: PathBuf::from("ventas.xlsx"),
            sheet: "Datos ventas".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'Datos ventas'"));
        assert!(msg.contains("'ventas.xlsx'"));
    }
}
