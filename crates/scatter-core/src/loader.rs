// File: crates/scatter-core/src/loader.rs
// Summary: Data loader; one best-effort fetch (or file read) of the record array.

use std::path::Path;

use log::{debug, info};
use reqwest::Client;

use crate::error::LoadError;
use crate::record::Record;

/// Upstream location of the cyclist dataset.
pub const DATA_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/cyclist-data.json";

/// Parse a JSON payload into records, preserving array order.
pub fn parse_records(json: &str) -> Result<Vec<Record>, LoadError> {
    let records: Vec<Record> = serde_json::from_str(json)?;
    Ok(records)
}

/// Single GET of `url`. No retries, no caching, no timeout.
pub async fn fetch_records(client: &Client, url: &str) -> Result<Vec<Record>, LoadError> {
    debug!("fetching {url}");
    let fetch_err = |source| LoadError::Fetch { url: url.to_string(), source };

    let body = client
        .get(url)
        .send()
        .await
        .and_then(|resp| resp.error_for_status())
        .map_err(fetch_err)?
        .text()
        .await
        .map_err(fetch_err)?;

    let records = parse_records(&body)?;
    info!("loaded {} records from {url}", records.len());
    Ok(records)
}

/// Read records from a local JSON file.
pub fn load_file(path: &Path) -> Result<Vec<Record>, LoadError> {
    let text = std::fs::read_to_string(path)
        .map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;
    let records = parse_records(&text)?;
    info!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Load from an `http(s)://` URL or, for anything else, a file path.
pub async fn load(client: &Client, source: &str) -> Result<Vec<Record>, LoadError> {
    if is_remote(source) {
        fetch_records(client, source).await
    } else {
        load_file(Path::new(source))
    }
}

fn is_remote(source: &str) -> bool {
    let lower = source.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
