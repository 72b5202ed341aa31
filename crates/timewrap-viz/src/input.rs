// File: crates/timewrap-viz/src/input.rs
// Summary: Column-major search-result intake and validation for the host adapter.

use chrono::{DateTime, NaiveDateTime};
use thiserror::Error;

/// User-visible configuration problems surfaced before the engine runs. The
/// engine itself assumes valid instants and never re-validates.
#[derive(Debug, Error)]
pub enum VizError {
    #[error("invalid timestamp in time column: {0:?}")]
    InvalidTimestamp(String),
    #[error("the search must return at least one data column")]
    MissingDataField,
}

/// Column-major query results as delivered by the hosting platform.
#[derive(Clone, Debug, Default)]
pub struct SearchResults {
    pub fields: Vec<String>,
    pub columns: Vec<Vec<String>>,
}

/// Validated engine input extracted from raw results.
#[derive(Clone, Debug)]
pub struct FormattedData {
    pub time_series: Vec<NaiveDateTime>,
    pub data_fields: Vec<String>,
    pub data_series: Vec<Vec<f64>>,
    pub span_series: Option<Vec<f64>>,
}

/// Extract and validate engine input from raw results: column 0 is the time
/// column, `_`-prefixed fields are internal to the host (with `_span`, when
/// present, carrying explicit per-point durations), everything else is a data
/// column.
pub fn format_data(raw: &SearchResults) -> Result<FormattedData, VizError> {
    let time_series = raw
        .columns
        .first()
        .map(Vec::as_slice)
        .unwrap_or_default()
        .iter()
        .map(|value| {
            parse_timestamp(value).ok_or_else(|| VizError::InvalidTimestamp(value.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut data_fields = Vec::new();
    let mut data_series = Vec::new();
    for (i, field) in raw.fields.iter().enumerate().skip(1) {
        if field.starts_with('_') {
            continue;
        }
        data_fields.push(field.clone());
        data_series.push(parse_values(raw.columns.get(i)));
    }
    if data_fields.is_empty() {
        return Err(VizError::MissingDataField);
    }

    let span_series = raw
        .fields
        .iter()
        .position(|field| field == "_span")
        .map(|i| parse_values(raw.columns.get(i)));

    Ok(FormattedData {
        time_series,
        data_fields,
        data_series,
        span_series,
    })
}

fn parse_values(column: Option<&Vec<String>>) -> Vec<f64> {
    column
        .map(Vec::as_slice)
        .unwrap_or_default()
        .iter()
        .map(|value| value.trim().parse::<f64>().unwrap_or(f64::NAN))
        .collect()
}

/// Accepts RFC 3339, `T`- or space-separated date-times, and epoch seconds.
fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.naive_local());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, pattern) {
            return Some(parsed);
        }
    }
    value
        .parse::<f64>()
        .ok()
        .filter(|seconds| seconds.is_finite())
        .and_then(|seconds| DateTime::from_timestamp(seconds as i64, 0))
        .map(|parsed| parsed.naive_utc())
}
