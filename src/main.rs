mod config;
mod fetch;
mod filter;
mod models;
mod preset;
mod radio_browser;

use config::PresetConfig;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // Failures are reported, never turned into a non-zero exit.
    match fetch::fetch_presets(&PresetConfig::default()).await {
        Ok(summary) => debug!(
            fetched = summary.fetched,
            filtered = summary.filtered,
            saved = summary.saved,
            path = %summary.path.display(),
            "preset fetch finished"
        ),
        Err(e) => error!("Error fetching stations: {e:#}"),
    }
}
