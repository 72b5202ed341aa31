// File: crates/timewrap-viz/src/lib.rs
// Summary: Host-facing adapter: search-result intake, configuration, chart model, drill-down.

pub mod input;
pub mod config;
pub mod model;
pub mod drilldown;

pub use input::{format_data, FormattedData, SearchResults, VizError};
pub use config::FormatConfig;
pub use model::{build_chart_model, tooltip_text, ChartModel};
pub use drilldown::{select_point, Drilldown, PointSelection};
