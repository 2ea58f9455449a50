use crate::models::StationRecord;
use anyhow::{Context, Result};
use rand::{distributions::Alphanumeric, Rng};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Write the preset list as pretty JSON, replacing `path` atomically.
///
/// Parent directories are created as needed. Non-ASCII text is written
/// as-is; serde_json only escapes control characters.
pub fn save_presets(path: &Path, stations: &[StationRecord]) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).with_context(|| format!("Create preset dir: {parent:?}"))?;

    let data = serde_json::to_vec_pretty(stations).context("Failed to serialize presets")?;

    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(10)
        .map(char::from)
        .collect();
    let tmp = parent.join(format!(
        ".{}.tmp.{suffix}",
        path.file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("preset_stations.json")
    ));

    replace_file(path, &tmp, &data)
}

/// Stage `data` in `tmp` and rename it over `path`; `path` is untouched on error.
fn replace_file(path: &Path, tmp: &Path, data: &[u8]) -> Result<()> {
    let written = (|| -> Result<()> {
        let mut file = fs::File::create(tmp).with_context(|| format!("Create temp file: {tmp:?}"))?;
        file.write_all(data)
            .with_context(|| format!("Write temp file: {tmp:?}"))?;
        file.sync_all()
            .with_context(|| format!("Sync temp file: {tmp:?}"))?;
        fs::rename(tmp, path).with_context(|| format!("Atomic rename to: {path:?}"))
    })();
    if written.is_err() {
        let _ = fs::remove_file(tmp);
    }
    written
}
