// File: crates/scatter-core/src/config.rs
// Summary: Chart configuration (data source, layout, marker and tooltip parameters).

use std::time::Duration;

use crate::loader::DATA_URL;
use crate::types::{Layout, MARKER_RADIUS};

/// Tooltip opacity while a marker is hovered.
pub const TOOLTIP_OPACITY: f32 = 0.9;
/// Fade-out duration after the pointer leaves a marker.
pub const FADE_DURATION: Duration = Duration::from_millis(200);

#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    pub data_url: String,
    pub layout: Layout,
    pub marker_radius: f32,
    pub tooltip_opacity: f32,
    pub fade_duration: Duration,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            data_url: DATA_URL.to_string(),
            layout: Layout::default(),
            marker_radius: MARKER_RADIUS,
            tooltip_opacity: TOOLTIP_OPACITY,
            fade_duration: FADE_DURATION,
        }
    }
}
