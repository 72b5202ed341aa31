// File: crates/timewrap-viz/src/config.rs
// Summary: Display format options parsed from the host's property map.

use std::collections::HashMap;

/// Property prefix the host prepends to this visualization's settings.
pub const PROPERTY_NAMESPACE: &str = "display.visualizations.custom.timewrap.";

/// Optional strftime overrides for axis labels, legend names and tooltips.
/// `None` means the granularity default applies.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormatConfig {
    pub axis_label_format: Option<String>,
    pub legend_format: Option<String>,
    pub tooltip_format: Option<String>,
}

impl FormatConfig {
    /// Build from raw host properties, accepting keys with or without the
    /// namespace prefix. Empty values count as unset.
    pub fn from_properties(properties: &HashMap<String, String>) -> Self {
        let get = |key: &str| {
            properties
                .get(&format!("{PROPERTY_NAMESPACE}{key}"))
                .or_else(|| properties.get(key))
                .filter(|value| !value.is_empty())
                .cloned()
        };
        Self {
            axis_label_format: get("axisLabelFormat"),
            legend_format: get("legendFormat"),
            tooltip_format: get("tooltipFormat"),
        }
    }
}
