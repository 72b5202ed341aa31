// File: crates/timewrap-core/src/fill.rs
// Summary: Gap-filling: rebuild each partition's full position grid so all partitions align.

use crate::granularity::Granularity;
use crate::partition::DataPoint;
use crate::span::{self, Span};

/// Fill every partition out to the full set of step positions in its bucket.
/// Afterwards all partitions have equal length, and position `i` in every
/// partition is the same offset from that partition's start.
pub fn fill_gaps(
    partitions: Vec<Vec<DataPoint>>,
    granularity: Granularity,
    point_span: Span,
) -> Vec<Vec<DataPoint>> {
    let step = granularity.fill_step(point_span);
    partitions
        .into_iter()
        .map(|partition| fill_partition(partition, granularity, step))
        .collect()
}

fn fill_partition(partition: Vec<DataPoint>, granularity: Granularity, step: Span) -> Vec<DataPoint> {
    let Some(first) = partition.first() else {
        return partition;
    };

    // Step back from the first real point until one more step would leave the
    // bucket; that last in-bucket instant is the aligned start.
    let mut start = first.date;
    loop {
        let previous = span::subtract(start, step.amount, step.unit);
        if granularity.group_key(previous) != granularity.group_key(start) {
            break;
        }
        start = previous;
    }

    let bucket_key = granularity.group_key(start);
    let mut filled = Vec::new();
    let mut current = start;
    while granularity.group_key(current) == bucket_key {
        match partition.iter().find(|point| point.date == current) {
            Some(point) => filled.push(point.clone()),
            None => filled.push(DataPoint::placeholder(current)),
        }
        current = span::add(current, step.amount, step.unit);
    }
    filled
}
