// File: crates/timewrap-core/src/partition.rs
// Summary: Calendar bucketing of a timestamp series and positional value attachment.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;

use crate::granularity::Granularity;

/// One aligned position inside a partition. Positions synthesized by the gap
/// filler carry no field name or value; absence is the "no data" marker, never
/// a sentinel number.
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    pub date: NaiveDateTime,
    pub field_name: Option<String>,
    pub field_value: Option<f64>,
    pub label: Option<String>,
}

impl DataPoint {
    /// A measured point carrying a value for `field_name`.
    pub fn measured(date: NaiveDateTime, field_name: &str, field_value: Option<f64>) -> Self {
        Self {
            date,
            field_name: Some(field_name.to_string()),
            field_value,
            label: None,
        }
    }

    /// A synthesized position with no backing data.
    pub fn placeholder(date: NaiveDateTime) -> Self {
        Self {
            date,
            field_name: None,
            field_value: None,
            label: None,
        }
    }

    /// True when this position was synthesized by gap-filling.
    pub fn is_gap(&self) -> bool {
        self.field_name.is_none()
    }
}

/// Group a chronological series into calendar buckets, emitted in ascending
/// bucket-key order. Order within a bucket is input order. Empty input yields
/// empty output.
pub fn partition(series: &[NaiveDateTime], granularity: Granularity) -> Vec<Vec<NaiveDateTime>> {
    let mut groups: BTreeMap<String, Vec<NaiveDateTime>> = BTreeMap::new();
    for &date in series {
        groups.entry(granularity.group_key(date)).or_default().push(date);
    }
    groups.into_values().collect()
}

/// Zip partitioned timestamps with a flat value sequence, positionally. The
/// value series is aligned to the flattened partition order, which matches
/// the original series order because partitioning preserves it. A value
/// missing from a too-short series decorates as `None`.
pub fn decorate_with_data(
    partitions: Vec<Vec<NaiveDateTime>>,
    values: &[f64],
    field_name: &str,
) -> Vec<Vec<DataPoint>> {
    let mut offset = 0usize;
    partitions
        .into_iter()
        .map(|group| {
            let decorated = group
                .iter()
                .enumerate()
                .map(|(i, &date)| {
                    DataPoint::measured(date, field_name, values.get(offset + i).copied())
                })
                .collect::<Vec<_>>();
            offset += group.len();
            decorated
        })
        .collect()
}
