// File: crates/timewrap-core/src/pipeline.rs
// Summary: Full recompute pipeline: estimate, select, partition, decorate, fill, label.

use chrono::NaiveDateTime;

use crate::estimate::{point_span, total_span};
use crate::fill::fill_gaps;
use crate::granularity::Granularity;
use crate::label::decorate_with_labels;
use crate::partition::{decorate_with_data, partition, DataPoint};

/// Run the whole engine over one raw update: infer the sampling step, select
/// a granularity, bucket the series, attach values, fill gaps, label every
/// position. Pure: identical inputs produce identical output, and each call
/// rebuilds the partitions from scratch. An empty series yields no partitions.
pub fn process_data(
    time_series: &[NaiveDateTime],
    values: &[f64],
    field_name: &str,
    label_format: Option<&str>,
) -> Vec<Vec<DataPoint>> {
    if time_series.is_empty() {
        return Vec::new();
    }
    let step = point_span(time_series);
    let granularity = Granularity::from_total_span(total_span(time_series));
    let partitions = partition(time_series, granularity);
    let partitions = decorate_with_data(partitions, values, field_name);
    let partitions = fill_gaps(partitions, granularity, step);
    decorate_with_labels(partitions, granularity, label_format)
}
