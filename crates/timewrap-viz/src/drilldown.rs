// File: crates/timewrap-viz/src/drilldown.rs
// Summary: Point-selection payload and drill-down time range resolution.

use chrono::NaiveDateTime;
use timewrap_core::find_span_for_date;

use crate::input::FormattedData;

/// Payload describing a clicked point, as handed back by the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct PointSelection {
    pub date: NaiveDateTime,
    pub field_name: String,
    pub field_value: Option<f64>,
}

/// Epoch-second range for a drill-down search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Drilldown {
    pub earliest: f64,
    pub latest: f64,
}

/// Resolve the drill-down range for a clicked point: its own instant through
/// one resolved span later. The explicit span series wins when the original
/// results carried one.
pub fn select_point(data: &FormattedData, selection: &PointSelection) -> Drilldown {
    let span = find_span_for_date(
        selection.date,
        &data.time_series,
        data.span_series.as_deref(),
    );
    let earliest = selection.date.and_utc().timestamp() as f64;
    Drilldown {
        earliest,
        latest: earliest + span,
    }
}
