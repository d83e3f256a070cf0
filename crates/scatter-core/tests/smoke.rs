// File: crates/scatter-core/tests/smoke.rs
// Purpose: Basic end-to-end raster render writing a PNG, with and without the tooltip.

use std::time::{Duration, Instant};

use scatter_core::{build_scene, ChartConfig, Point, Record, RenderOptions, Theme};

fn records() -> Vec<Record> {
    vec![
        Record::new("Miguel Indurain", "ESP", 1994, "36:50", ""),
        Record::new("Lance Armstrong", "USA", 2015, "36:13", "Admitted doping 2012"),
        Record::new("Jan Ullrich", "GER", 1997, "37:15", "Confessed later in his career to doping"),
    ]
}

#[test]
fn render_smoke_png() {
    let scene = build_scene(records(), &ChartConfig::default(), &Theme::light()).expect("scene");

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    scene.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = scene.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (790, 560));
}

#[test]
fn marker_pixels_use_category_colors() {
    let scene = build_scene(records(), &ChartConfig::default(), &Theme::light()).expect("scene");
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    let bytes = scene.render_to_png_bytes(&opts).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();

    for m in &scene.markers {
        let px = img.get_pixel(m.cx.round() as u32, m.cy.round() as u32);
        assert_eq!([px[0], px[1], px[2]], [m.fill.r(), m.fill.g(), m.fill.b()], "marker {}", m.index);
    }
    // background corner
    assert_eq!(img.get_pixel(2, 2).0, [255, 255, 255, 255]);
}

#[test]
fn visible_tooltip_changes_the_raster() {
    let mut scene = build_scene(records(), &ChartConfig::default(), &Theme::light()).expect("scene");
    let t0 = Instant::now();
    let base = RenderOptions { draw_labels: false, at: Some(t0), ..RenderOptions::default() };
    let plain = scene.render_to_png_bytes(&base).expect("plain");

    scene.pointer_enter(1, Point::new(400.0, 200.0));
    let hovered = scene.render_to_png_bytes(&base).expect("hovered");
    assert_ne!(plain, hovered);

    scene.pointer_leave(t0);
    let faded = RenderOptions { at: Some(t0 + Duration::from_millis(250)), ..base };
    let after = scene.render_to_png_bytes(&faded).expect("faded");
    let a = image::load_from_memory(&plain).expect("decode").to_rgba8();
    let b = image::load_from_memory(&after).expect("decode").to_rgba8();
    assert_eq!(a.as_raw(), b.as_raw(), "fully faded tooltip leaves no trace");
}
