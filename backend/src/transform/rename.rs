//! Storage-friendly column names.
//!
//! Source headers with spaces, dots or slashes are mapped to identifiers the
//! sales table can store. Headers missing from [`RENAMES`] keep their name.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Source header → normalized column name.
pub const RENAMES: [(&str, &str); 13] = [
    ("Cliente / Descripción", "Cliente_Descripción"),
    ("Uni.", "Uni"),
    ("P.Ant.", "P_Ant"),
    ("P.V.P.", "P_V_P"),
    ("Imp. Bruto", "Imp_Bruto"),
    ("Dto.", "Dto"),
    ("Imp. Neto", "Imp_Neto"),
    ("Número Doc.", "Número_Doc"),
    ("R.P.", "R_P"),
    ("Fact.", "Fact"),
    ("A Cuenta", "A_Cuenta"),
    ("Devoluc.", "Devoluc"),
    ("Tipo de Pago", "Tipo_de_Pago"),
];

static RENAME_LOOKUP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| RENAMES.into_iter().collect());

/// Normalized name for one header.
pub fn normalized_name(header: &str) -> &str {
    RENAME_LOOKUP.get(header).copied().unwrap_or(header)
}

/// Apply [`normalized_name`] to every header, keeping order.
pub fn rename_headers<S: AsRef<str>>(headers: &[S]) -> Vec<String> {
    headers
        .iter()
        .map(|h| normalized_name(h.as_ref()).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::REQUIRED_COLUMNS;

    #[test]
    fn test_mapped_names() {
        assert_eq!(normalized_name("Cliente / Descripción"), "Cliente_Descripción");
        assert_eq!(normalized_name("Imp. Bruto"), "Imp_Bruto");
        assert_eq!(normalized_name("Número Doc."), "Número_Doc");
        assert_eq!(normalized_name("Tipo de Pago"), "Tipo_de_Pago");
    }

    #[test]
    fn test_unmapped_names_pass_through() {
        for name in ["Fecha", "Hora", "Vendedor", "Código", "Tipo", "TA", "Entrega", "Extra"] {
            assert_eq!(normalized_name(name), name);
        }
    }

    #[test]
    fn test_required_columns_rename() {
        let renamed = rename_headers(&REQUIRED_COLUMNS);
        assert_eq!(
            renamed,
            vec![
                "Fecha", "Hora", "Vendedor", "Código", "Cliente_Descripción", "Tipo", "TA",
                "Uni", "P_Ant", "P_V_P", "Imp_Bruto", "Dto", "Imp_Neto", "Número_Doc",
                "R_P", "Fact", "A_Cuenta", "Entrega", "Devoluc", "Tipo_de_Pago",
            ]
        );
    }

    #[test]
    fn test_every_source_is_required() {
        for (source, _) in RENAMES {
            assert!(REQUIRED_COLUMNS.contains(&source), "{} is not required", source);
        }
    }
}
