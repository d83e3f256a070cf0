// File: crates/scatter-core/src/theme.rs
// Summary: Light/Dark theming for scatter rendering colors and the category palette.

use skia_safe as skia;

/// Ten-hue categorical palette; `false` takes the first entry, `true` the second.
pub const CATEGORY10: [skia::Color; 10] = [
    skia::Color::from_argb(255, 0x1f, 0x77, 0xb4),
    skia::Color::from_argb(255, 0xff, 0x7f, 0x0e),
    skia::Color::from_argb(255, 0x2c, 0xa0, 0x2c),
    skia::Color::from_argb(255, 0xd6, 0x27, 0x28),
    skia::Color::from_argb(255, 0x94, 0x67, 0xbd),
    skia::Color::from_argb(255, 0x8c, 0x56, 0x4b),
    skia::Color::from_argb(255, 0xe3, 0x77, 0xc2),
    skia::Color::from_argb(255, 0x7f, 0x7f, 0x7f),
    skia::Color::from_argb(255, 0xbc, 0xbd, 0x22),
    skia::Color::from_argb(255, 0x17, 0xbe, 0xcf),
];

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub tooltip_background: skia::Color,
    pub tooltip_border: skia::Color,
    pub tooltip_text: skia::Color,
    pub palette: [skia::Color; 10],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 0, 0, 0),
            tick: skia::Color::from_argb(255, 0, 0, 0),
            tooltip_background: skia::Color::from_argb(255, 176, 196, 222),
            tooltip_border: skia::Color::from_argb(255, 70, 90, 120),
            tooltip_text: skia::Color::from_argb(255, 20, 20, 30),
            palette: CATEGORY10,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            tooltip_background: skia::Color::from_argb(255, 40, 40, 48),
            tooltip_border: skia::Color::from_argb(255, 110, 110, 130),
            tooltip_text: skia::Color::from_argb(255, 235, 235, 245),
            palette: CATEGORY10,
        }
    }

    pub fn high_contrast_dark() -> Self {
        let mut palette = CATEGORY10;
        palette[0] = skia::Color::from_argb(255, 0x00, 0xff, 0xff);
        palette[1] = skia::Color::from_argb(255, 0xff, 0xff, 0x00);
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            axis_line: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            axis_label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            tick: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            tooltip_background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            tooltip_border: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            tooltip_text: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            palette,
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}

/// `#rrggbb` for SVG/CSS output (alpha dropped).
pub fn css_hex(c: skia::Color) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r(), c.g(), c.b())
}
