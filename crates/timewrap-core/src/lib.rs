// File: crates/timewrap-core/src/lib.rs
// Summary: Core library entry point; exports the time-wrapping engine API.

pub mod span;
pub mod estimate;
pub mod granularity;
pub mod partition;
pub mod fill;
pub mod label;
pub mod lookup;
pub mod pipeline;

pub use span::{Span, TimeUnit};
pub use estimate::{point_span, span_between, total_span};
pub use granularity::Granularity;
pub use partition::{decorate_with_data, partition, DataPoint};
pub use fill::fill_gaps;
pub use label::{decorate_with_labels, label_point, series_names};
pub use lookup::find_span_for_date;
pub use pipeline::process_data;
