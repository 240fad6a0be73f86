//! ISO-8601 rendering of date and time cells.
//!
//! Only the `Fecha` and `Hora` fields are normalized, and only when the cell
//! itself holds a temporal value. Anything else is left untouched.

use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};

use crate::models::{CellValue, Record};

/// Fields rewritten by [`normalize_record`].
pub const TEMPORAL_FIELDS: [&str; 2] = ["Fecha", "Hora"];

/// `2024-01-15T10:45:00`, with `.ffffff` only when sub-second digits exist.
pub fn format_datetime(datetime: &NaiveDateTime) -> String {
    format!(
        "{}T{}",
        datetime.date().format("%Y-%m-%d"),
        format_time(&datetime.time())
    )
}

/// `10:45:00`, with `.ffffff` only when sub-second digits exist.
pub fn format_time(time: &NaiveTime) -> String {
    let micros = time.nanosecond() / 1_000;
    if micros == 0 {
        time.format("%H:%M:%S").to_string()
    } else {
        format!("{}.{:06}", time.format("%H:%M:%S"), micros)
    }
}

/// A duration under one day read as a time of day.
fn duration_as_time(duration: &Duration) -> Option<NaiveTime> {
    if *duration < Duration::zero() || *duration >= Duration::days(1) {
        return None;
    }
    let seconds = u32::try_from(duration.num_seconds()).ok()?;
    let nanos = u32::try_from(duration.num_nanoseconds()? % 1_000_000_000).ok()?;
    NaiveTime::from_num_seconds_from_midnight_opt(seconds, nanos)
}

/// ISO text for a temporal cell, or `None` when the cell stays as it is.
pub fn iso_string(value: &CellValue) -> Option<String> {
    match value {
        CellValue::DateTime(datetime) => Some(format_datetime(datetime)),
        CellValue::Time(time) => Some(format_time(time)),
        CellValue::Duration(duration) => duration_as_time(duration).map(|t| format_time(&t)),
        _ => None,
    }
}

/// Rewrite the temporal fields of one record in place.
pub fn normalize_record(record: &mut Record) {
    for field in TEMPORAL_FIELDS {
        if let Some(value) = record.get_mut(field) {
            if let Some(iso) = iso_string(value) {
                *value = CellValue::String(iso);
            }
        }
    }
}
