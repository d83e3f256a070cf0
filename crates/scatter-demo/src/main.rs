// File: crates/scatter-demo/src/main.rs
// Summary: Fetches the cyclist dataset once and writes the scatter plot as SVG, HTML and PNG.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use log::info;
use scatter_core::{load_scene, ChartConfig, Point, RenderOptions, Scene, Theme};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();

    // Source (URL or path), output directory and theme name from CLI, with defaults.
    let config = ChartConfig::default();
    let source = std::env::args().nth(1).unwrap_or_else(|| config.data_url.clone());
    let out_dir = std::env::args()
        .nth(2)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("target/out"));
    println!("Using source: {source}");

    let theme = std::env::args()
        .nth(3)
        .map(|name| scatter_core::theme::find(&name))
        .unwrap_or_else(Theme::light);
    let client = reqwest::Client::new();
    let mut scene = load_scene(&client, &source, &config, &theme).await?;
    println!("Loaded {} records", scene.dataset().len());

    let svg = out_dir.join("cyclist_scatter.svg");
    scene.write_svg_file(&theme, &svg)?;
    println!("Wrote {}", svg.display());

    let html = out_dir.join("cyclist_scatter.html");
    scene.write_html_file(&theme, &html)?;
    println!("Wrote {}", html.display());

    let opts = RenderOptions { theme, ..RenderOptions::default() };
    let png = out_dir.join("cyclist_scatter.png");
    scene.render_to_png(&opts, &png)?;
    println!("Wrote {}", png.display());

    if let Some(path) = render_hover(&mut scene, &opts, &out_dir)? {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

/// Hover the first rider with an allegation and capture the tooltip.
fn render_hover(scene: &mut Scene, opts: &RenderOptions, out_dir: &Path) -> Result<Option<PathBuf>> {
    let Some(marker) = scene.markers.iter().find(|m| {
        scene.dataset().get(m.index).is_some_and(|(r, _)| r.has_allegation())
    }) else {
        info!("no rider with an allegation; skipping hover capture");
        return Ok(None);
    };
    let (index, at) = (marker.index, Point::new(marker.cx + 8.0, marker.cy + 8.0));
    scene.pointer_enter(index, at);

    let path = out_dir.join("cyclist_scatter_hover.png");
    let opts = RenderOptions { at: Some(Instant::now()), ..*opts };
    scene.render_to_png(&opts, &path)?;
    Ok(Some(path))
}
