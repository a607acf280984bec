//! Watermark store: the JSON file listing hubs and their last relayed match.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::models::Hub;

pub struct HubStore {
    path: PathBuf,
}

impl HubStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every hub, in file order.
    pub fn load(&self) -> Result<Vec<Hub>> {
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read hub file {}", self.path.display()))?;
        let hubs: Vec<Hub> = serde_json::from_str(&raw)
            .with_context(|| format!("Hub file {} is not a list of hubs", self.path.display()))?;

        tracing::debug!(path = %self.path.display(), count = hubs.len(), "Loaded hubs");
        Ok(hubs)
    }

    /// Overwrite the file with `hubs`.
    ///
    /// Writes a sibling temp file first and renames it into place, so a
    /// crash mid-write leaves the previous contents intact.
    pub fn save(&self, hubs: &[Hub]) -> Result<()> {
        let json = serde_json::to_string_pretty(hubs).context("Failed to serialize hubs")?;

        let tmp = self.temp_path();
        fs::write(&tmp, json).with_context(|| format!("Failed to write {}", tmp.display()))?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e).with_context(|| {
                format!("Failed to move {} over {}", tmp.display(), self.path.display())
            });
        }

        tracing::debug!(path = %self.path.display(), count = hubs.len(), "Saved hubs");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "hubs".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
