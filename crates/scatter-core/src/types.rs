// File: crates/scatter-core/src/types.rs
// Summary: Shared layout types and constants (plot size, margins, marker radius).

/// Plot width in pixels, excluding margins.
pub const WIDTH: u32 = 720;
/// Plot height in pixels, excluding margins.
pub const HEIGHT: u32 = 500;
/// Marker radius in pixels.
pub const MARKER_RADIUS: f32 = 5.0;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(40, 30, 30, 30)
    }
}

/// Fixed chart layout: plot size plus margins.
///
/// The plot ranges are computed the way the chart has always drawn them: the
/// x range runs `[left, width - right]` and the y range `[top, height - bottom]`,
/// both inside the surface that adds the margins around `width x height`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub margins: Insets,
}

impl Layout {
    pub const fn new(width: u32, height: u32, margins: Insets) -> Self {
        Self { width, height, margins }
    }

    /// Rendering surface size `(width + left + right, height + top + bottom)`.
    pub const fn surface_size(&self) -> (u32, u32) {
        (self.width + self.margins.hsum(), self.height + self.margins.vsum())
    }

    /// Horizontal pixel range of the x scale.
    pub fn x_range(&self) -> (f64, f64) {
        (self.margins.left as f64, self.width as f64 - self.margins.right as f64)
    }

    /// Vertical pixel range of the y scale (top to bottom, not inverted).
    pub fn y_range(&self) -> (f64, f64) {
        (self.margins.top as f64, self.height as f64 - self.margins.bottom as f64)
    }

    /// Vertical offset of the x-axis guide.
    pub fn x_axis_offset(&self) -> f64 { self.height as f64 - self.margins.bottom as f64 }

    /// Horizontal offset of the y-axis guide.
    pub fn y_axis_offset(&self) -> f64 { self.margins.left as f64 }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT, Insets::default())
    }
}
