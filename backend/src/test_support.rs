//! Spreadsheet fixtures for unit tests.

use std::path::Path;

use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};

use crate::validation::REQUIRED_COLUMNS;

/// A cell to write into a fixture workbook.
#[derive(Debug, Clone)]
pub enum Cell {
    Blank,
    Text(&'static str),
    Number(f64),
    /// Year, month, day formatted as a date
    Date(u16, u8, u8),
    /// Date plus hour, minute, second
    DateTime(u16, u8, u8, u16, u8, u8),
    /// Hour, minute, second formatted as a time of day
    Time(u16, u8, u8),
    /// Hours, minutes, seconds formatted as elapsed time
    Elapsed(u32, u32, u32),
}

/// The twenty required headers in their usual order.
pub fn sales_header() -> Vec<Cell> {
    REQUIRED_COLUMNS.iter().map(|name| Cell::Text(*name)).collect()
}

/// A plausible sales line matching [`sales_header`].
pub fn sales_row() -> Vec<Cell> {
    vec![
        Cell::Date(2024, 1, 15),
        Cell::Time(10, 45, 0),
        Cell::Text("MARIA"),
        Cell::Text("P-0042"),
        Cell::Text("CLIENTE MOSTRADOR / Ibuprofeno 600mg"),
        Cell::Text("V"),
        Cell::Number(1.0),
        Cell::Number(2.0),
        Cell::Number(3.5),
        Cell::Number(4.25),
        Cell::Number(8.5),
        Cell::Number(0.0),
        Cell::Number(8.5),
        Cell::Text("T-1001"),
        Cell::Blank,
        Cell::Text("N"),
        Cell::Number(0.0),
        Cell::Number(10.0),
        Cell::Number(0.0),
        Cell::Text("EFECTIVO"),
    ]
}

/// Write a single-sheet workbook; panics on failure since this only runs in tests.
pub fn write_workbook(path: &Path, sheet: &str, rows: &[Vec<Cell>]) {
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");
    let datetime_format = Format::new().set_num_format("yyyy-mm-dd hh:mm:ss");
    let time_format = Format::new().set_num_format("hh:mm:ss");
    let elapsed_format = Format::new().set_num_format("[h]:mm:ss");

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet).unwrap();

    for (r, row) in rows.iter().enumerate() {
        let r = r as u32;
        for (c, cell) in row.iter().enumerate() {
            let c = c as u16;
            match cell {
                Cell::Blank => {}
                Cell::Text(s) => {
                    worksheet.write_string(r, c, *s).unwrap();
                }
                Cell::Number(n) => {
                    worksheet.write_number(r, c, *n).unwrap();
                }
                Cell::Date(y, m, d) => {
                    let date = ExcelDateTime::from_ymd(*y, *m, *d).unwrap();
                    worksheet
                        .write_datetime_with_format(r, c, &date, &date_format)
                        .unwrap();
                }
                Cell::DateTime(y, m, d, hh, mm, ss) => {
                    let datetime = ExcelDateTime::from_ymd(*y, *m, *d)
                        .unwrap()
                        .and_hms(*hh, *mm, *ss)
                        .unwrap();
                    worksheet
                        .write_datetime_with_format(r, c, &datetime, &datetime_format)
                        .unwrap();
                }
                Cell::Time(hh, mm, ss) => {
                    let time = ExcelDateTime::from_hms(*hh, *mm, *ss).unwrap();
                    worksheet
                        .write_datetime_with_format(r, c, &time, &time_format)
                        .unwrap();
                }
                Cell::Elapsed(hh, mm, ss) => {
                    let days = (*hh as f64 * 3600.0 + *mm as f64 * 60.0 + *ss as f64) / 86_400.0;
                    worksheet
                        .write_number_with_format(r, c, days, &elapsed_format)
                        .unwrap();
                }
            }
        }
    }

    workbook.save(path).unwrap();
}
