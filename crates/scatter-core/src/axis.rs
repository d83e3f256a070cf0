// File: crates/scatter-core/src/axis.rs
// Summary: Axis model (guide placement, tick positions and labels) built from a scale.

use crate::scale::Scale;
use crate::transform::TimeOfDay;

/// Default number of ticks requested from a scale.
pub const TICK_COUNT: usize = 10;
/// Length of tick marks (and the domain path's outer ticks), in pixels.
pub const TICK_SIZE: f64 = 6.0;
/// Gap between a tick mark and its label.
pub const TICK_PADDING: f64 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrient {
    /// Horizontal guide, ticks and labels below.
    Bottom,
    /// Vertical guide, ticks and labels to the left.
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Pixel position along the axis.
    pub position: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    /// External name of the guide (`x-axis`, `y-axis`).
    pub id: &'static str,
    pub orient: AxisOrient,
    /// Translation of the guide group on the surface.
    pub translate: (f64, f64),
    /// Pixel extent of the domain path.
    pub range: (f64, f64),
    pub ticks: Vec<Tick>,
}

impl Axis {
    pub fn from_scale<S, F>(
        id: &'static str,
        orient: AxisOrient,
        scale: &S,
        translate: (f64, f64),
        format: F,
    ) -> Self
    where
        S: Scale,
        F: Fn(&S::Value) -> String,
    {
        let ticks = scale
            .ticks(TICK_COUNT)
            .into_iter()
            .map(|v| Tick { label: format(&v), position: scale.map(v) })
            .collect();
        Self { id, orient, translate, range: scale.range(), ticks }
    }

    /// Horizontal axis drawn at `y` (surface coordinates).
    pub fn bottom<S, F>(id: &'static str, scale: &S, y: f64, format: F) -> Self
    where
        S: Scale,
        F: Fn(&S::Value) -> String,
    {
        Self::from_scale(id, AxisOrient::Bottom, scale, (0.0, y), format)
    }

    /// Vertical axis drawn at `x` (surface coordinates).
    pub fn left<S, F>(id: &'static str, scale: &S, x: f64, format: F) -> Self
    where
        S: Scale,
        F: Fn(&S::Value) -> String,
    {
        Self::from_scale(id, AxisOrient::Left, scale, (x, 0.0), format)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.ticks.iter().map(|t| t.label.as_str()).collect()
    }
}

/// Integer format: no thousands separator, no decimals.
pub fn format_year(v: &f64) -> String {
    format!("{}", v.round() as i64)
}

pub fn format_time(v: &TimeOfDay) -> String {
    v.format()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_format_has_no_separator_or_decimals() {
        assert_eq!(format_year(&2016.0), "2016");
        assert_eq!(format_year(&1999.9999999), "2000");
    }
}
