// File: crates/scatter-core/src/builder.rs
// Summary: Scale & axis builder; domains from one scan over the derived points.

use log::debug;
use skia_safe as skia;

use crate::axis::{format_time, format_year, Axis};
use crate::scale::{CategoryScale, LinearScale, TimeScale};
use crate::transform::{DerivedPoint, TimeOfDay};
use crate::types::Layout;

pub const X_AXIS_ID: &str = "x-axis";
pub const Y_AXIS_ID: &str = "y-axis";

/// Observed extents of the point set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Extents {
    pub year_min: i32,
    pub year_max: i32,
    pub time_min: TimeOfDay,
    pub time_max: TimeOfDay,
}

impl Extents {
    /// Single linear scan; `None` for an empty slice.
    pub fn scan(points: &[DerivedPoint]) -> Option<Self> {
        let first = points.first()?;
        let init = Self {
            year_min: first.year,
            year_max: first.year,
            time_min: first.time,
            time_max: first.time,
        };
        Some(points.iter().skip(1).fold(init, |mut e, p| {
            e.year_min = e.year_min.min(p.year);
            e.year_max = e.year_max.max(p.year);
            e.time_min = e.time_min.min(p.time);
            e.time_max = e.time_max.max(p.time);
            e
        }))
    }
}

#[derive(Clone, Debug)]
pub struct Scales {
    pub x: LinearScale,
    pub y: TimeScale,
    pub color: CategoryScale<bool, skia::Color>,
}

impl Scales {
    pub fn build(points: &[DerivedPoint], layout: &Layout, palette: &[skia::Color]) -> Self {
        // Empty input falls back to a unit x domain and a collapsed y domain.
        let (x_domain, y_domain) = match Extents::scan(points) {
            Some(e) => (
                (e.year_min as f64 - 1.0, e.year_max as f64 + 1.0),
                (e.time_min, e.time_max),
            ),
            None => ((0.0, 1.0), (TimeOfDay::EPOCH, TimeOfDay::EPOCH)),
        };
        debug!(
            "x domain [{}, {}], y domain [{}, {}]",
            x_domain.0, x_domain.1, y_domain.0, y_domain.1
        );
        Self {
            x: LinearScale::new(x_domain, layout.x_range()),
            y: TimeScale::new(y_domain, layout.y_range()),
            color: CategoryScale::new([false, true], palette.iter().copied()),
        }
    }

    /// Marker fill for a doping flag.
    pub fn fill(&self, is_doped: bool) -> skia::Color {
        self.color.peek(&is_doped).unwrap_or(skia::Color::GRAY)
    }

    /// Bottom year axis and left time axis, placed per `layout`.
    pub fn axes(&self, layout: &Layout) -> (Axis, Axis) {
        let x_axis = Axis::bottom(X_AXIS_ID, &self.x, layout.x_axis_offset(), format_year);
        let y_axis = Axis::left(Y_AXIS_ID, &self.y, layout.y_axis_offset(), format_time);
        (x_axis, y_axis)
    }
}
