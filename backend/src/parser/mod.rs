//! Spreadsheet loading into a column-labelled [`Table`].
//!
//! Any format `calamine` can auto-detect from the extension is accepted
//! (xlsx, xlsm, xlsb, xls, ods). The first row of the used range is the
//! header row. No sales-specific logic here.

use std::collections::HashSet;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{LoadError, LoadResult};
use crate::logs::{log_info, log_warning};
use crate::models::CellValue;

/// Which worksheet of the workbook to read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetSelector {
    /// Zero-based position in the workbook.
    Index(usize),
    /// Exact worksheet name.
    Name(String),
}

impl Default for SheetSelector {
    fn default() -> Self {
        SheetSelector::Index(0)
    }
}

/// The in-memory sheet: header names plus typed rows.
///
/// Every row has exactly `headers.len()` cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    /// Name of the worksheet the table was read from
    pub sheet: String,
    /// Column headers, unique, in sheet order
    pub headers: Vec<String>,
    /// Data rows below the header row
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }
}

/// Read one worksheet of the workbook at `path`.
pub fn load_table<P: AsRef<Path>>(path: P, sheet: &SheetSelector) -> LoadResult<Table> {
    let path = path.as_ref();
    let mut workbook = open_workbook_auto(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let sheet_names: Vec<String> = workbook.sheet_names().to_vec();
    let sheet_name = match sheet {
        SheetSelector::Index(index) => match sheet_names.get(*index) {
            Some(name) => name.clone(),
            None if sheet_names.is_empty() => {
                return Err(LoadError::NoWorksheets {
                    path: path.to_path_buf(),
                })
            }
            None => {
                return Err(LoadError::SheetNotFound {
                    path: path.to_path_buf(),
                    sheet: format!("#{}", index),
                })
            }
        },
        SheetSelector::Name(name) => {
            if !sheet_names.iter().any(|n| n == name) {
                return Err(LoadError::SheetNotFound {
                    path: path.to_path_buf(),
                    sheet: name.clone(),
                });
            }
            name.clone()
        }
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|source| LoadError::Sheet {
            sheet: sheet_name.clone(),
            source,
        })?;

    // The used range starts at the first non-empty cell; blank leading
    // columns still count toward header positions.
    let lead = range.start().map_or(0, |(_, col)| col as usize);

    let mut rows = range.rows();
    let headers = match rows.next() {
        Some(header_row) => {
            let cells: Vec<Data> = std::iter::repeat(Data::Empty)
                .take(lead)
                .chain(header_row.iter().cloned())
                .collect();
            header_names(&cells)
        }
        None => {
            log_warning(format!("Worksheet '{}' is empty", sheet_name));
            Vec::new()
        }
    };

    let width = headers.len();
    let rows: Vec<Vec<CellValue>> = rows
        .map(|row| {
            let mut cells: Vec<CellValue> = std::iter::repeat(CellValue::Null)
                .take(lead)
                .chain(row.iter().map(cell_to_value))
                .take(width)
                .collect();
            cells.resize(width, CellValue::Null);
            cells
        })
        .collect();

    log_info(format!(
        "Read worksheet '{}': {} columns, {} rows",
        sheet_name,
        headers.len(),
        rows.len()
    ));

    Ok(Table {
        sheet: sheet_name,
        headers,
        rows,
    })
}

/// Turn the header row into unique column names.
///
/// Blank headers become `Unnamed: <index>`; repeats get `.1`, `.2`, ...
pub fn header_names(row: &[Data]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(row.len());
    let mut headers = Vec::with_capacity(row.len());

    for (index, cell) in row.iter().enumerate() {
        let base = match header_text(cell) {
            Some(text) => text,
            None => format!("Unnamed: {}", index),
        };

        let mut name = base.clone();
        let mut suffix = 1;
        while seen.contains(&name) {
            name = format!("{}.{}", base, suffix);
            suffix += 1;
        }

        seen.insert(name.clone());
        headers.push(name);
    }

    headers
}

fn header_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(s.clone()),
        Data::Float(f) if is_integral(*f) => Some((*f as i64).to_string()),
        other => Some(other.to_string()),
    }
}

/// Convert an Excel cell to a [`CellValue`].
pub fn cell_to_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Null,
        Data::String(s) if s.is_empty() => CellValue::Null,
        Data::String(s) => CellValue::String(s.clone()),
        Data::Int(i) => CellValue::Int(*i),
        // Whole numbers read back as integers
        Data::Float(f) if is_integral(*f) => CellValue::Int(*f as i64),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) if dt.is_duration() => match dt.as_duration() {
            Some(duration) => CellValue::Duration(duration),
            None => CellValue::Float(dt.as_f64()),
        },
        Data::DateTime(dt) => match dt.as_datetime() {
            // Serials below one day carry no calendar date
            Some(datetime) if dt.as_f64() >= 0.0 && dt.as_f64() < 1.0 => {
                CellValue::Time(datetime.time())
            }
            Some(datetime) => CellValue::DateTime(datetime),
            None => CellValue::Float(dt.as_f64()),
        },
        Data::DateTimeIso(s) => parse_iso_temporal(s),
        Data::DurationIso(s) => CellValue::String(s.clone()),
    }
}

fn is_integral(f: f64) -> bool {
    f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64
}

/// Parse ISO text stored by OpenDocument sheets; unparseable text stays a string.
fn parse_iso_temporal(s: &str) -> CellValue {
    if let Ok(datetime) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return CellValue::DateTime(datetime);
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return CellValue::DateTime(date.and_time(NaiveTime::MIN));
    }
    if let Ok(time) = NaiveTime::parse_from_str(s, "%H:%M:%S%.f") {
        return CellValue::Time(time);
    }
    CellValue::String(s.to_string())
}
