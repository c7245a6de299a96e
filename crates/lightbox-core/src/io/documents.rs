use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::config::IndexConfig;
use crate::error::{LightboxError, Result};
use crate::index::{normalize_with, CategoryIndex};
use crate::jobs::JobRegistry;

/// Read a static JSON document from the site root.
///
/// Read errors become [`LightboxError::FetchFailure`], unparsable text
/// becomes [`LightboxError::MalformedIndex`].
pub fn load_json(root: &Path, relative: &Path) -> Result<Value> {
    let path = root.join(relative);
    let location = path.display().to_string();

    let text = std::fs::read_to_string(&path).map_err(|e| LightboxError::FetchFailure {
        location: location.clone(),
        reason: e.to_string(),
    })?;
    debug!(%location, bytes = text.len(), "Document read");

    serde_json::from_str(&text)
        .map_err(|e| LightboxError::MalformedIndex(format!("{location}: {e}")))
}

/// Read and normalize an index document.
pub fn load_index(root: &Path, relative: &Path, config: &IndexConfig) -> Result<CategoryIndex> {
    let raw = load_json(root, relative)?;
    normalize_with(&raw, config)
}

/// Read the job registry. A registry that does not exist is empty, so
/// every code resolves by convention.
pub fn load_registry(root: &Path, relative: &Path) -> Result<JobRegistry> {
    let path = root.join(relative);
    if !path.exists() {
        debug!(path = %path.display(), "No job registry");
        return Ok(JobRegistry::default());
    }
    let raw = load_json(root, relative)?;
    Ok(serde_json::from_value(raw)?)
}
