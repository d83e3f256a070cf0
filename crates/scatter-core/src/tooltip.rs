// File: crates/scatter-core/src/tooltip.rs
// Summary: Floating tooltip panel state with a time-driven fade-out transition.

use std::time::{Duration, Instant};

use crate::geometry::{clamp, Point};

/// External name of the tooltip panel.
pub const TOOLTIP_ID: &str = "tooltip";

/// Cubic in-out easing over `t` in `[0, 1]`.
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = clamp(t, 0.0, 1.0) * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let u = t - 2.0;
        (u * u * u + 2.0) / 2.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Visibility {
    Hidden,
    Shown { opacity: f32 },
    FadingOut { from: f32, started: Instant, duration: Duration },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    /// Page position of the panel's top-left corner.
    pub position: Point,
    /// Raw year of the last hovered point.
    pub data_year: Option<i32>,
    /// Body lines, already formatted as displayed.
    pub lines: Vec<String>,
    visibility: Visibility,
}

impl Default for Tooltip {
    fn default() -> Self {
        Self { position: Point::default(), data_year: None, lines: Vec::new(), visibility: Visibility::Hidden }
    }
}

impl Tooltip {
    /// Show the panel at `position`, interrupting any running fade.
    pub fn show(&mut self, position: Point, data_year: i32, lines: Vec<String>, opacity: f32) {
        self.position = position;
        self.data_year = Some(data_year);
        self.lines = lines;
        self.visibility = Visibility::Shown { opacity };
    }

    /// Start fading from the opacity at `now` down to zero.
    pub fn fade_out(&mut self, now: Instant, duration: Duration) {
        let from = self.opacity_at(now);
        self.visibility = if from <= 0.0 || duration.is_zero() {
            Visibility::Hidden
        } else {
            Visibility::FadingOut { from, started: now, duration }
        };
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn opacity_at(&self, now: Instant) -> f32 {
        match self.visibility {
            Visibility::Hidden => 0.0,
            Visibility::Shown { opacity } => opacity,
            Visibility::FadingOut { from, started, duration } => {
                let elapsed = now.saturating_duration_since(started);
                let t = elapsed.as_secs_f64() / duration.as_secs_f64();
                (from as f64 * (1.0 - ease_cubic_in_out(t))) as f32
            }
        }
    }

    pub fn is_visible_at(&self, now: Instant) -> bool {
        self.opacity_at(now) > 0.0
    }

    /// Collapse a finished fade into `Hidden`.
    pub fn settle(&mut self, now: Instant) {
        if let Visibility::FadingOut { started, duration, .. } = self.visibility {
            if now.saturating_duration_since(started) >= duration {
                self.visibility = Visibility::Hidden;
            }
        }
    }

    /// Body as markup: lines joined with `<br>`, text escaped.
    pub fn html(&self) -> String {
        body_html(&self.lines)
    }
}

pub fn body_html(lines: &[String]) -> String {
    lines.iter().map(|l| escape_text(l)).collect::<Vec<_>>().join("<br>")
}

/// Escape text for HTML/SVG content and attribute values.
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
