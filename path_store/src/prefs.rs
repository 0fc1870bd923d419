use std::{
    collections::BTreeMap,
    fmt, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingMode {
    /// Moves are shown before they are asked for.
    #[default]
    Learn,
    Practice,
    Drill,
}

impl TrainingMode {
    pub const ALL: [TrainingMode; 3] = [Self::Learn, Self::Practice, Self::Drill];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Learn => "learn",
            Self::Practice => "practice",
            Self::Drill => "drill",
        }
    }
}

impl fmt::Display for TrainingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrainingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown training mode: {s} (expected learn, practice or drill)"))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrainingPreferences {
    pub default_mode: Option<TrainingMode>,
    pub per_opening: BTreeMap<String, TrainingMode>,
}

impl TrainingPreferences {
    /// Per-opening choice, then the user's default, then [`TrainingMode::default`].
    pub fn resolve(&self, opening: &str) -> TrainingMode {
        self.per_opening
            .get(opening)
            .copied()
            .or(self.default_mode)
            .unwrap_or_default()
    }

    pub fn set(&mut self, opening: impl Into<String>, mode: TrainingMode) {
        self.per_opening.insert(opening.into(), mode);
    }

    pub fn clear(&mut self, opening: &str) -> Option<TrainingMode> {
        self.per_opening.remove(opening)
    }
}

/// JSON file holding [`TrainingPreferences`].
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Never fails: a missing file means no preferences yet, and an unreadable
    /// or corrupt one is logged and treated the same way.
    pub fn load(&self) -> TrainingPreferences {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no stored training preferences");
                return TrainingPreferences::default();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to read training preferences; using defaults");
                return TrainingPreferences::default();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(prefs) => prefs,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "corrupt training preferences; using defaults");
                TrainingPreferences::default()
            }
        }
    }

    pub fn save(&self, prefs: &TrainingPreferences) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory: {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(prefs).context("failed to serialize preferences")?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed to write: {}", self.path.display()))?;
        Ok(())
    }

    /// Loads, applies `f`, and writes the result back.
    pub fn update<F>(&self, f: F) -> anyhow::Result<TrainingPreferences>
    where
        F: FnOnce(&mut TrainingPreferences),
    {
        let mut prefs = self.load();
        f(&mut prefs);
        self.save(&prefs)?;
        Ok(prefs)
    }
}
