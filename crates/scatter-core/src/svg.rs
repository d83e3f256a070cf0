// File: crates/scatter-core/src/svg.rs
// Summary: SVG and HTML export of a scene, with queryable ids and data attributes.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::axis::{Axis, AxisOrient, TICK_PADDING, TICK_SIZE};
use crate::scene::{Scene, LEGEND_ID, MARKER_CLASS};
use crate::theme::{css_hex, Theme};
use crate::tooltip::{body_html, escape_text, TOOLTIP_ID};

/// Mount point id the page inserts the tooltip and surface into.
pub const MOUNT_ID: &str = "graph";

/// Per-marker tooltip payload used by the page script, keyed by marker index.
#[derive(Serialize)]
struct TooltipBody {
    year: i32,
    html: String,
}

impl Scene {
    /// Standalone SVG document of the scene.
    pub fn to_svg(&self, theme: &Theme) -> String {
        let mut s = String::new();
        // fmt::Write into a String cannot fail.
        let _ = self.write_svg(&mut s, theme);
        s
    }

    fn write_svg(&self, s: &mut String, theme: &Theme) -> std::fmt::Result {
        writeln!(
            s,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        )?;
        writeln!(
            s,
            r#"<rect width="100%" height="100%" fill="{}"/>"#,
            css_hex(theme.background)
        )?;
        write_axis(s, &self.x_axis, theme)?;
        write_axis(s, &self.y_axis, theme)?;

        writeln!(s, "<g>")?;
        for m in &self.markers {
            writeln!(
                s,
                r#"<circle class="{MARKER_CLASS}" data-xvalue="{}" data-yvalue="{}" cx="{:.3}" cy="{:.3}" r="{}" index="{}" style="fill: {};"/>"#,
                m.x_value,
                m.y_value.to_rfc3339(),
                m.cx,
                m.cy,
                m.r,
                m.index,
                css_hex(m.fill),
            )?;
        }
        writeln!(s, "</g>")?;

        writeln!(s, r#"<g id="{LEGEND_ID}">"#)?;
        for (label, color) in &self.legend.entries {
            writeln!(
                s,
                r#"<g class="legend-entry"><rect width="18" height="18" fill="{}"/><text x="24" y="9" dy="0.32em">{}</text></g>"#,
                css_hex(*color),
                escape_text(label)
            )?;
        }
        writeln!(s, "</g>")?;
        writeln!(s, "</svg>")
    }

    /// Full page: mount point, tooltip panel, surface and the hover script.
    pub fn to_html(&self, theme: &Theme) -> String {
        let bodies: Vec<TooltipBody> = (0..self.markers.len())
            .filter_map(|i| {
                let (record, _) = self.dataset().get(i)?;
                let lines = self.tooltip_lines(i)?;
                Some(TooltipBody { year: record.year, html: body_html(&lines) })
            })
            .collect();
        // `</` would close the script element early.
        let bodies_json = serde_json::to_string(&bodies)
            .unwrap_or_else(|_| "[]".to_string())
            .replace("</", "<\\/");

        let fade_ms = self.fade_duration().as_millis();
        let opacity = self.tooltip_opacity();
        let svg = self.to_svg(theme);

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Doping in Professional Bicycle Racing</title>
<style>
body{{background:{bg};color:{fg};font-family:sans-serif}}
#{tip}{{position:absolute;opacity:0;pointer-events:none;padding:6px 8px;font-size:12px;background:{tip_bg};color:{tip_fg};border:1px solid {tip_border};border-radius:4px}}
</style>
</head>
<body>
<div id="{mount}">
<div id="{tip}"></div>
{svg}</div>
<script>
const bodies = {bodies_json};
const tooltip = document.getElementById("{tip}");
document.querySelectorAll("#{mount} circle.{dot}").forEach((dot) => {{
  dot.addEventListener("mouseover", (event) => {{
    const i = Number(dot.getAttribute("index"));
    tooltip.style.transition = "none";
    tooltip.style.top = event.pageY + "px";
    tooltip.style.left = event.pageX + "px";
    tooltip.setAttribute("data-year", bodies[i].year);
    tooltip.innerHTML = bodies[i].html;
    tooltip.style.opacity = {opacity};
  }});
  dot.addEventListener("mouseout", () => {{
    tooltip.style.transition = "opacity {fade_ms}ms ease-in-out";
    tooltip.style.opacity = 0;
  }});
}});
</script>
</body>
</html>
"#,
            bg = css_hex(theme.background),
            fg = css_hex(theme.axis_label),
            tip = TOOLTIP_ID,
            tip_bg = css_hex(theme.tooltip_background),
            tip_fg = css_hex(theme.tooltip_text),
            tip_border = css_hex(theme.tooltip_border),
            mount = MOUNT_ID,
            dot = MARKER_CLASS,
        )
    }

    pub fn write_svg_file(&self, theme: &Theme, path: impl AsRef<Path>) -> Result<()> {
        write_text(path.as_ref(), &self.to_svg(theme))
    }

    pub fn write_html_file(&self, theme: &Theme, path: impl AsRef<Path>) -> Result<()> {
        write_text(path.as_ref(), &self.to_html(theme))
    }
}

fn write_text(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}

/// Guide group: domain path with outer ticks, then one group per tick.
fn write_axis(s: &mut String, axis: &Axis, theme: &Theme) -> std::fmt::Result {
    let stroke = css_hex(theme.axis_line);
    let label = css_hex(theme.axis_label);
    let (r0, r1) = axis.range;
    writeln!(
        s,
        r#"<g id="{}" class="axis" transform="translate({}, {})" fill="none" font-size="10" font-family="sans-serif" text-anchor="{}">"#,
        axis.id,
        axis.translate.0,
        axis.translate.1,
        match axis.orient { AxisOrient::Bottom => "middle", AxisOrient::Left => "end" },
    )?;
    match axis.orient {
        AxisOrient::Bottom => writeln!(
            s,
            r#"<path class="domain" stroke="{stroke}" d="M{:.1},{TICK_SIZE}V0.5H{:.1}V{TICK_SIZE}"/>"#,
            r0 + 0.5,
            r1 + 0.5
        )?,
        AxisOrient::Left => writeln!(
            s,
            r#"<path class="domain" stroke="{stroke}" d="M-{TICK_SIZE},{:.1}H0.5V{:.1}H-{TICK_SIZE}"/>"#,
            r0 + 0.5,
            r1 + 0.5
        )?,
    }
    let offset = TICK_SIZE + TICK_PADDING;
    for t in &axis.ticks {
        let text = escape_text(&t.label);
        match axis.orient {
            AxisOrient::Bottom => writeln!(
                s,
                r#"<g class="tick" transform="translate({:.3},0)"><line stroke="{stroke}" y2="{TICK_SIZE}"/><text fill="{label}" y="{offset}" dy="0.71em">{text}</text></g>"#,
                t.position
            )?,
            AxisOrient::Left => writeln!(
                s,
                r#"<g class="tick" transform="translate(0,{:.3})"><line stroke="{stroke}" x2="-{TICK_SIZE}"/><text fill="{label}" x="-{offset}" dy="0.32em">{text}</text></g>"#,
                t.position
            )?,
        }
    }
    writeln!(s, "</g>")
}
