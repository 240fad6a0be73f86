//! Header validation for sales spreadsheets.
//!
//! A sheet is accepted only when every name in [`REQUIRED_COLUMNS`] appears
//! among its headers. Extra columns are allowed and column order is free.
//! Validation is all-or-nothing: a single missing column rejects the file.
//!
//! # Example
//!
//! ```rust,ignore
//! use ventas2json::validation::missing_columns;
//!
//! let headers = vec!["Fecha".to_string(), "Hora".to_string()];
//! let missing = missing_columns(&headers);
//! assert_eq!(missing[0], "Vendedor");
//! ```

use std::collections::HashSet;

use crate::error::SchemaError;

/// Columns every sales export must carry, in reporting order.
pub const REQUIRED_COLUMNS: [&str; 20] = [
    "Fecha",
    "Hora",
    "Vendedor",
    "Código",
    "Cliente / Descripción",
    "Tipo",
    "TA",
    "Uni.",
    "P.Ant.",
    "P.V.P.",
    "Imp. Bruto",
    "Dto.",
    "Imp. Neto",
    "Número Doc.",
    "R.P.",
    "Fact.",
    "A Cuenta",
    "Entrega",
    "Devoluc.",
    "Tipo de Pago",
];

/// Required columns absent from `headers`, in [`REQUIRED_COLUMNS`] order.
pub fn missing_columns<S: AsRef<str>>(headers: &[S]) -> Vec<String> {
    let present: HashSet<&str> = headers.iter().map(|h| h.as_ref()).collect();

    REQUIRED_COLUMNS
        .iter()
        .filter(|required| !present.contains(*required))
        .map(|required| required.to_string())
        .collect()
}

/// `Ok(())` when all required columns are present.
pub fn validate_columns<S: AsRef<str>>(headers: &[S]) -> Result<(), SchemaError> {
    let missing = missing_columns(headers);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(SchemaError { missing })
    }
}
