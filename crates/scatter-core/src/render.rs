// File: crates/scatter-core/src/render.rs
// Summary: Headless PNG rendering of a scene using Skia CPU raster surfaces.

use std::time::Instant;

use anyhow::Result;
use skia_safe as skia;

use crate::axis::{Axis, AxisOrient, TICK_PADDING, TICK_SIZE};
use crate::scene::{Marker, Scene};
use crate::theme::Theme;
use crate::tooltip::Tooltip;

const LABEL_SIZE: f32 = 10.0;
const TOOLTIP_TEXT_SIZE: f32 = 12.0;
const TOOLTIP_PADDING: f32 = 6.0;
const TOOLTIP_LINE_HEIGHT: f32 = 15.0;

pub struct RenderOptions {
    pub theme: Theme,
    /// Tick labels and tooltip text; off for pixel-stable snapshots.
    pub draw_labels: bool,
    /// Instant used to sample the tooltip fade; `None` means now.
    pub at: Option<Instant>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { theme: Theme::light(), draw_labels: true, at: None }
    }
}

impl Scene {
    /// Render the current scene (tooltip included when visible) to PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((self.width as i32, self.height as i32))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        let theme = &opts.theme;

        canvas.clear(theme.background);

        draw_axis(canvas, &self.x_axis, theme, opts.draw_labels);
        draw_axis(canvas, &self.y_axis, theme, opts.draw_labels);
        draw_markers(canvas, &self.markers);

        let now = opts.at.unwrap_or_else(Instant::now);
        let opacity = self.tooltip.opacity_at(now);
        if opacity > 0.0 {
            draw_tooltip(canvas, &self.tooltip, opacity, theme, opts.draw_labels);
        }

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the scene to a PNG at `output_png_path`.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_axis(canvas: &skia::Canvas, axis: &Axis, theme: &Theme, draw_labels: bool) {
    let mut line = skia::Paint::default();
    line.set_color(theme.axis_line);
    line.set_anti_alias(true);
    line.set_style(skia::paint::Style::Stroke);
    line.set_stroke_width(1.0);

    let mut text = skia::Paint::default();
    text.set_color(theme.axis_label);
    text.set_anti_alias(true);
    let mut font = skia::Font::default();
    font.set_size(LABEL_SIZE);

    let (tx, ty) = (axis.translate.0 as f32, axis.translate.1 as f32);
    let (r0, r1) = (axis.range.0 as f32, axis.range.1 as f32);
    let tick = TICK_SIZE as f32;
    let gap = (TICK_SIZE + TICK_PADDING) as f32;

    canvas.save();
    canvas.translate((tx, ty));

    // domain path with outer ticks
    let mut path = skia::Path::new();
    match axis.orient {
        AxisOrient::Bottom => {
            path.move_to((r0, tick));
            path.line_to((r0, 0.0));
            path.line_to((r1, 0.0));
            path.line_to((r1, tick));
        }
        AxisOrient::Left => {
            path.move_to((-tick, r0));
            path.line_to((0.0, r0));
            path.line_to((0.0, r1));
            path.line_to((-tick, r1));
        }
    }
    canvas.draw_path(&path, &line);

    for t in &axis.ticks {
        let p = t.position as f32;
        let (width, _) = font.measure_str(&t.label, Some(&text));
        match axis.orient {
            AxisOrient::Bottom => {
                canvas.draw_line((p, 0.0), (p, tick), &line);
                if draw_labels {
                    canvas.draw_str(&t.label, (p - width * 0.5, gap + LABEL_SIZE * 0.8), &font, &text);
                }
            }
            AxisOrient::Left => {
                canvas.draw_line((-tick, p), (0.0, p), &line);
                if draw_labels {
                    canvas.draw_str(&t.label, (-gap - width, p + LABEL_SIZE * 0.35), &font, &text);
                }
            }
        }
    }
    canvas.restore();
}

fn draw_markers(canvas: &skia::Canvas, markers: &[Marker]) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    for m in markers {
        fill.set_color(m.fill);
        canvas.draw_circle((m.cx as f32, m.cy as f32), m.r, &fill);
    }
}

fn draw_tooltip(canvas: &skia::Canvas, tooltip: &Tooltip, opacity: f32, theme: &Theme, draw_labels: bool) {
    let mut font = skia::Font::default();
    font.set_size(TOOLTIP_TEXT_SIZE);

    let mut text = skia::Paint::default();
    text.set_anti_alias(true);
    text.set_color(theme.tooltip_text);
    text.set_alpha_f(opacity);

    let longest = tooltip
        .lines
        .iter()
        .map(|l| font.measure_str(l, Some(&text)).0)
        .fold(0.0f32, f32::max);
    let w = longest.max(40.0) + TOOLTIP_PADDING * 2.0;
    let h = tooltip.lines.len() as f32 * TOOLTIP_LINE_HEIGHT + TOOLTIP_PADDING * 2.0;
    let rect = skia::Rect::from_xywh(tooltip.position.x as f32, tooltip.position.y as f32, w, h);

    let mut body = skia::Paint::default();
    body.set_anti_alias(true);
    body.set_style(skia::paint::Style::Fill);
    body.set_color(theme.tooltip_background);
    body.set_alpha_f(opacity);
    canvas.draw_round_rect(rect, 4.0, 4.0, &body);

    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(1.0);
    border.set_color(theme.tooltip_border);
    border.set_alpha_f(opacity);
    canvas.draw_round_rect(rect, 4.0, 4.0, &border);

    if draw_labels {
        for (i, line) in tooltip.lines.iter().enumerate() {
            let baseline = rect.top + TOOLTIP_PADDING + (i as f32 + 1.0) * TOOLTIP_LINE_HEIGHT - 3.0;
            canvas.draw_str(line, (rect.left + TOOLTIP_PADDING, baseline), &font, &text);
        }
    }
}
