use std::{fs, path::Path};

use anyhow::Context;
use path_layout::LayoutOptions;
use path_schema::{Opening, OpeningStat};

mod error;
mod prefs;

pub use error::CatalogError;
pub use prefs::{PreferenceStore, TrainingMode, TrainingPreferences};

pub fn load_catalog_from_path(path: impl AsRef<Path>) -> anyhow::Result<Vec<Opening>> {
    let path = path.as_ref();
    let bytes = fs::read(path).with_context(|| format!("failed to read catalog: {}", path.display()))?;
    let openings: Vec<Opening> = serde_json::from_slice(&bytes)
        .with_context(|| format!("failed to parse catalog json: {}", path.display()))?;
    check_catalog(&openings).with_context(|| format!("invalid catalog: {}", path.display()))?;
    Ok(openings)
}

pub fn load_catalog_from_str(json: &str) -> anyhow::Result<Vec<Opening>> {
    let openings: Vec<Opening> = serde_json::from_str(json).context("failed to parse catalog json")?;
    check_catalog(&openings).context("invalid catalog")?;
    Ok(openings)
}

pub fn load_stats_from_path(path: impl AsRef<Path>) -> anyhow::Result<Vec<OpeningStat>> {
    let path = path.as_ref();
    let bytes = fs::read(path).with_context(|| format!("failed to read stats: {}", path.display()))?;
    let stats: Vec<OpeningStat> = serde_json::from_slice(&bytes)
        .with_context(|| format!("failed to parse stats json: {}", path.display()))?;
    Ok(stats)
}

pub fn load_stats_from_str(json: &str) -> anyhow::Result<Vec<OpeningStat>> {
    let stats: Vec<OpeningStat> = serde_json::from_str(json).context("failed to parse stats json")?;
    Ok(stats)
}

pub fn load_layout_options_from_path(path: impl AsRef<Path>) -> anyhow::Result<LayoutOptions> {
    let path = path.as_ref();
    let bytes =
        fs::read(path).with_context(|| format!("failed to read layout options: {}", path.display()))?;
    let options: LayoutOptions = serde_json::from_slice(&bytes)
        .with_context(|| format!("failed to parse layout options json: {}", path.display()))?;
    options
        .validate()
        .with_context(|| format!("invalid layout options: {}", path.display()))?;
    Ok(options)
}

/// Stats are correlated by opening name, so names must be present and unique.
pub fn check_catalog(openings: &[Opening]) -> Result<(), CatalogError> {
    let mut seen = std::collections::HashSet::with_capacity(openings.len());
    for (index, opening) in openings.iter().enumerate() {
        if opening.name.trim().is_empty() {
            return Err(CatalogError::new("E2002", "opening name must be non-empty", index));
        }
        if !seen.insert(opening.name.as_str()) {
            return Err(
                CatalogError::new("E2001", format!("duplicate opening name: {}", opening.name), index)
                    .with_opening(opening.name.clone()),
            );
        }
    }
    Ok(())
}
