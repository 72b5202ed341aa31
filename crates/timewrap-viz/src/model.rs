// File: crates/timewrap-viz/src/model.rs
// Summary: Renderable chart model: partitions, series names, axis labels, tooltips.

use timewrap_core::label::{clock_time, format_date, month_day_ordinal};
use timewrap_core::{process_data, series_names, DataPoint};

use crate::config::FormatConfig;
use crate::input::FormattedData;

/// Everything the rendering collaborator needs for one update. Rebuilt in
/// full per update; an empty time series produces an empty model ("nothing
/// to draw", not an error).
#[derive(Clone, Debug, Default)]
pub struct ChartModel {
    pub partitions: Vec<Vec<DataPoint>>,
    pub series_names: Vec<String>,
    pub x_axis_labels: Vec<String>,
}

/// Run the engine over the first data field and package the result. The
/// x-axis labels come from the first partition; after gap-filling every
/// partition shares the same positions.
pub fn build_chart_model(data: &FormattedData, config: &FormatConfig) -> ChartModel {
    if data.time_series.is_empty() {
        return ChartModel::default();
    }
    let field_name = data.data_fields.first().map(String::as_str).unwrap_or("");
    let values = data.data_series.first().map(Vec::as_slice).unwrap_or(&[]);
    let partitions = process_data(
        &data.time_series,
        values,
        field_name,
        config.axis_label_format.as_deref(),
    );
    let names = series_names(&partitions, config.legend_format.as_deref());
    let x_axis_labels = partitions
        .first()
        .map(|partition| {
            partition
                .iter()
                .map(|point| point.label.clone().unwrap_or_default())
                .collect()
        })
        .unwrap_or_default();
    ChartModel {
        partitions,
        series_names: names,
        x_axis_labels,
    }
}

/// Hover text for a point, `None` for gap positions. Default shape is
/// "Aug 18th, 1981 11:15 PM" with the field name and value on a second line;
/// `tooltip_format` overrides the date portion.
pub fn tooltip_text(point: &DataPoint, config: &FormatConfig) -> Option<String> {
    if point.is_gap() {
        return None;
    }
    let date_line = config
        .tooltip_format
        .as_deref()
        .and_then(|pattern| format_date(point.date, pattern))
        .unwrap_or_else(|| {
            format!(
                "{}, {} {}",
                month_day_ordinal(point.date),
                point.date.format("%Y"),
                clock_time(point.date)
            )
        });
    let field = point.field_name.as_deref().unwrap_or("");
    let value = point
        .field_value
        .map(|v| v.to_string())
        .unwrap_or_default();
    Some(format!("{date_line}\n{field}: {value}"))
}
