// File: crates/scatter-core/src/pipeline.rs
// Summary: Fetch-then-render pipeline; the fetch is the only suspension point.

use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;

use crate::config::ChartConfig;
use crate::loader;
use crate::record::Record;
use crate::scene::Scene;
use crate::theme::Theme;
use crate::transform::Dataset;

/// Transform, scale and lay out already loaded records.
pub fn build_scene(records: Vec<Record>, config: &ChartConfig, theme: &Theme) -> Result<Scene> {
    let dataset = Dataset::new(records).context("deriving plot values")?;
    debug!("derived {} points", dataset.len());
    Ok(Scene::render(dataset, config, theme))
}

/// Load `source` (URL or path) and render it. Nothing is built if loading fails.
pub async fn load_scene(client: &Client, source: &str, config: &ChartConfig, theme: &Theme) -> Result<Scene> {
    let records = loader::load(client, source)
        .await
        .with_context(|| format!("loading records from {source}"))?;
    build_scene(records, config, theme)
}
