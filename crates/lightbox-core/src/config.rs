use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_COLLAPSE_RATIO, DEFAULT_DOUBLE_TAP_MS, DEFAULT_INDEX_FILE, DEFAULT_MAX_SCALE,
    DEFAULT_MIN_SCALE, DEFAULT_PAN_SCALE_THRESHOLD, DEFAULT_PAN_SLACK, DEFAULT_PATH_MARKERS,
    DEFAULT_REGISTRY_FILE, DEFAULT_SWIPE_MAX_DURATION_MS, DEFAULT_SWIPE_MAX_DY,
    DEFAULT_SWIPE_MIN_DX, DEFAULT_SWIPE_SCALE_TOLERANCE,
};
use crate::error::{LightboxError, Result};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LightboxConfig {
    /// Directory the static documents and images are served from.
    #[serde(default = "default_site_root")]
    pub site_root: PathBuf,
    /// Index document, relative to `site_root`.
    #[serde(default = "default_index")]
    pub index: PathBuf,
    /// Job registry document, relative to `site_root`.
    #[serde(default = "default_registry")]
    pub registry: PathBuf,
    #[serde(default)]
    pub grouping: IndexConfig,
    #[serde(default)]
    pub gesture: GestureConfig,
}

fn default_site_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_index() -> PathBuf {
    PathBuf::from(DEFAULT_INDEX_FILE)
}

fn default_registry() -> PathBuf {
    PathBuf::from(DEFAULT_REGISTRY_FILE)
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            site_root: default_site_root(),
            index: default_index(),
            registry: default_registry(),
            grouping: IndexConfig::default(),
            gesture: GestureConfig::default(),
        }
    }
}

impl LightboxConfig {
    /// Read a TOML config file. Missing sections fall back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(contents).map_err(|e| LightboxError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| LightboxError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        self.grouping.validate()?;
        self.gesture.validate()
    }
}

/// Settings for grouping raw index entries into categories.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Folder names after which the next directory names the category.
    /// Matched case-insensitively.
    pub markers: Vec<String>,
    /// Singleton-category ratio at which grouping collapses to `All`.
    pub collapse_ratio: f64,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            markers: DEFAULT_PATH_MARKERS.iter().map(|m| m.to_string()).collect(),
            collapse_ratio: DEFAULT_COLLAPSE_RATIO,
        }
    }
}

impl IndexConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.collapse_ratio) {
            return Err(LightboxError::Config(format!(
                "collapse_ratio must be within 0..=1, got {}",
                self.collapse_ratio
            )));
        }
        Ok(())
    }
}

/// Thresholds of the touch gesture state machine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    pub min_scale: f64,
    pub max_scale: f64,
    pub pan_slack: f64,
    pub pan_scale_threshold: f64,
    pub swipe_scale_tolerance: f64,
    pub swipe_max_duration_ms: u64,
    pub swipe_min_dx: f64,
    pub swipe_max_dy: f64,
    pub double_tap_ms: u64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            pan_slack: DEFAULT_PAN_SLACK,
            pan_scale_threshold: DEFAULT_PAN_SCALE_THRESHOLD,
            swipe_scale_tolerance: DEFAULT_SWIPE_SCALE_TOLERANCE,
            swipe_max_duration_ms: DEFAULT_SWIPE_MAX_DURATION_MS,
            swipe_min_dx: DEFAULT_SWIPE_MIN_DX,
            swipe_max_dy: DEFAULT_SWIPE_MAX_DY,
            double_tap_ms: DEFAULT_DOUBLE_TAP_MS,
        }
    }
}

impl GestureConfig {
    pub fn validate(&self) -> Result<()> {
        if self.min_scale <= 0.0 || self.max_scale < self.min_scale {
            return Err(LightboxError::Config(format!(
                "scale bounds must satisfy 0 < min <= max, got {}..{}",
                self.min_scale, self.max_scale
            )));
        }
        if self.pan_slack < 0.0 {
            return Err(LightboxError::Config("pan_slack must be >= 0".into()));
        }
        Ok(())
    }
}
