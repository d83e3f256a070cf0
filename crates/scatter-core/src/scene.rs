// File: crates/scatter-core/src/scene.rs
// Summary: Scene renderer; lays out axes, markers, legend and tooltip, and owns hover interaction.

use std::time::{Duration, Instant};

use log::{debug, warn};
use skia_safe as skia;

use crate::axis::Axis;
use crate::builder::Scales;
use crate::config::ChartConfig;
use crate::geometry::Point;
use crate::record::Record;
use crate::scale::Scale;
use crate::theme::Theme;
use crate::tooltip::Tooltip;
use crate::transform::{Dataset, TimeOfDay};

/// CSS class carried by every marker.
pub const MARKER_CLASS: &str = "dot";
pub const LEGEND_ID: &str = "legend";

/// Visual element for one derived point.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    /// Position in the dataset; hover resolves records through it.
    pub index: usize,
    pub cx: f64,
    pub cy: f64,
    pub r: f32,
    pub fill: skia::Color,
    /// Raw year (`data-xvalue`).
    pub x_value: i32,
    /// Raw time of day (`data-yvalue`).
    pub y_value: TimeOfDay,
}

impl Marker {
    pub fn contains(&self, p: Point) -> bool {
        let r = self.r as f64;
        p.distance_sq(Point::new(self.cx, self.cy)) <= r * r
    }
}

/// Legend container. Created without entries; nothing is bound to it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Legend {
    pub entries: Vec<(String, skia::Color)>,
}

/// The rendered chart: surface, guides, markers and the shared tooltip.
///
/// A `Scene` only exists in the rendered state. Hover handlers take
/// `&mut self`, so pointer events are applied one at a time.
#[derive(Clone, Debug)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub markers: Vec<Marker>,
    pub legend: Legend,
    pub tooltip: Tooltip,
    scales: Scales,
    dataset: Dataset,
    hovered: Option<usize>,
    tooltip_opacity: f32,
    fade_duration: Duration,
}

impl Scene {
    /// Build scales and lay out every element for `dataset`.
    pub fn render(dataset: Dataset, config: &ChartConfig, theme: &Theme) -> Self {
        let layout = &config.layout;
        let (width, height) = layout.surface_size();
        let scales = Scales::build(dataset.points(), layout, &theme.palette);
        let (x_axis, y_axis) = scales.axes(layout);

        let markers: Vec<Marker> = dataset
            .points()
            .iter()
            .enumerate()
            .map(|(index, p)| Marker {
                index,
                cx: scales.x.map(p.year as f64),
                cy: scales.y.map(p.time),
                r: config.marker_radius,
                fill: scales.fill(p.is_doped),
                x_value: p.year,
                y_value: p.time,
            })
            .collect();
        debug!("scene {width}x{height} with {} markers", markers.len());

        Self {
            width,
            height,
            x_axis,
            y_axis,
            markers,
            legend: Legend::default(),
            tooltip: Tooltip::default(),
            scales,
            dataset,
            hovered: None,
            tooltip_opacity: config.tooltip_opacity,
            fade_duration: config.fade_duration,
        }
    }

    pub fn dataset(&self) -> &Dataset { &self.dataset }
    pub fn scales(&self) -> &Scales { &self.scales }
    pub fn hovered(&self) -> Option<usize> { self.hovered }
    pub fn tooltip_opacity(&self) -> f32 { self.tooltip_opacity }
    pub fn fade_duration(&self) -> Duration { self.fade_duration }

    /// Tooltip lines for the record at `index`: identity, time, year and,
    /// when present, the doping note.
    pub fn tooltip_lines(&self, index: usize) -> Option<Vec<String>> {
        let (record, point) = self.dataset.get(index)?;
        Some(tooltip_lines(record, &point.time))
    }

    /// Pointer entered marker `index` at page position `pointer`.
    /// Returns false when no such marker exists.
    pub fn pointer_enter(&mut self, index: usize, pointer: Point) -> bool {
        let Some(lines) = self.tooltip_lines(index) else {
            warn!("hover on unknown marker {index}");
            return false;
        };
        let year = self.markers[index].x_value;
        self.tooltip.show(pointer, year, lines, self.tooltip_opacity);
        self.hovered = Some(index);
        true
    }

    /// Pointer left the hovered marker; the tooltip starts fading.
    pub fn pointer_leave(&mut self, now: Instant) {
        self.hovered = None;
        self.tooltip.fade_out(now, self.fade_duration);
    }

    /// Topmost marker under `p` (later markers draw over earlier ones).
    pub fn marker_at(&self, p: Point) -> Option<usize> {
        self.markers.iter().rev().find(|m| m.contains(p)).map(|m| m.index)
    }

    /// Drive enter/leave from a raw pointer position.
    pub fn pointer_move(&mut self, p: Point, now: Instant) {
        let target = self.marker_at(p);
        if target == self.hovered {
            return;
        }
        if self.hovered.is_some() {
            self.pointer_leave(now);
        }
        if let Some(i) = target {
            self.pointer_enter(i, p);
        }
    }
}

pub fn tooltip_lines(record: &Record, time: &TimeOfDay) -> Vec<String> {
    let mut lines = vec![
        format!("{} ({})", record.name, record.nationality),
        format!("Time: {}", time.format()),
        format!("Year: {}", record.year),
    ];
    if record.has_allegation() {
        lines.push(record.doping.clone());
    }
    lines
}
