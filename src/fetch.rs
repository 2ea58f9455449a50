use crate::config::PresetConfig;
use crate::filter::select_presets;
use crate::preset::save_presets;
use crate::radio_browser::RadioBrowserClient;
use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSummary {
    pub fetched: usize,
    pub filtered: usize,
    pub saved: usize,
    pub path: PathBuf,
}

/// Fetch candidates, keep the music stations, and overwrite the preset file.
///
/// Nothing is written unless the search itself succeeds.
pub async fn fetch_presets(config: &PresetConfig) -> Result<FetchSummary> {
    let client = RadioBrowserClient::new(config)?;
    let stations = client.search(&config.query).await?;
    let fetched = stations.len();
    info!(count = fetched, "fetched candidates");

    let (presets, filtered_count) =
        select_presets(stations, config.keywords.as_slice(), config.max_presets);
    info!(count = filtered_count, "filtered to music stations");

    for st in &presets {
        debug!(name = st.name().unwrap_or("?"), tags = %st.tags_lowercase(), "preset");
    }

    save_presets(&config.output_path, &presets)?;
    info!(
        count = presets.len(),
        path = %config.output_path.display(),
        "saved presets"
    );

    Ok(FetchSummary {
        fetched,
        filtered: filtered_count,
        saved: presets.len(),
        path: config.output_path.clone(),
    })
}
