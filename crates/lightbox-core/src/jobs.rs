//! Access-code resolution against the optional job registry document.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LightboxError, Result};

/// `{ "jobs": [ { "id": ..., "label"?, "index"?, "imagesDir"?, "thumbsDir"? } ] }`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRegistry {
    #[serde(default)]
    pub jobs: Vec<JobEntry>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobEntry {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbs_dir: Option<String>,
}

/// Where a job's documents and assets live, relative to the site root.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct JobLocation {
    pub code: String,
    pub label: String,
    pub index: String,
    pub images_dir: String,
    pub thumbs_dir: String,
    /// False when every location came from the naming convention.
    pub registered: bool,
}

impl JobLocation {
    /// Locations for a job that has no registry entry.
    pub fn by_convention(code: &str) -> Self {
        Self {
            code: code.to_string(),
            label: code.to_string(),
            index: format!("jobs/{code}/index/assets-index.json"),
            images_dir: format!("jobs/{code}/images"),
            thumbs_dir: format!("jobs/{code}/thumbs"),
            registered: false,
        }
    }
}

impl JobRegistry {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Registry entry for `code`, compared case-insensitively.
    pub fn find(&self, code: &str) -> Option<&JobEntry> {
        let code = code.trim();
        self.jobs.iter().find(|job| job.id.trim().eq_ignore_ascii_case(code))
    }

    /// Resolve an access code. Fields the registry leaves out, or the whole
    /// entry if the code is not registered, follow the `jobs/<code>/...`
    /// convention.
    pub fn resolve(&self, code: &str) -> Result<JobLocation> {
        let code = validate_code(code)?;
        let fallback = JobLocation::by_convention(code);

        let Some(entry) = self.find(code) else {
            debug!(code, "Job not registered, using convention paths");
            return Ok(fallback);
        };

        Ok(JobLocation {
            code: code.to_string(),
            label: entry.label.clone().unwrap_or(fallback.label),
            index: entry.index.clone().unwrap_or(fallback.index),
            images_dir: entry.images_dir.clone().unwrap_or(fallback.images_dir),
            thumbs_dir: entry.thumbs_dir.clone().unwrap_or(fallback.thumbs_dir),
            registered: true,
        })
    }
}

/// Access codes become path components, so only `[A-Za-z0-9_-]` is allowed.
fn validate_code(code: &str) -> Result<&str> {
    let code = code.trim();
    if code.is_empty() {
        return Err(LightboxError::UnknownJob("empty access code".into()));
    }
    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(LightboxError::UnknownJob(format!(
            "invalid access code {code:?}"
        )));
    }
    Ok(code)
}
