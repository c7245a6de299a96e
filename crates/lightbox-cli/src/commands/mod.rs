pub mod categories;
pub mod config;
pub mod list;
pub mod replay;
pub mod resolve;
pub mod verify;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use lightbox_core::config::LightboxConfig;
use lightbox_core::index::CategoryIndex;
use lightbox_core::io::{load_index, load_registry};
use tracing::debug;

/// Where to read the index from, shared by the index commands.
#[derive(Args)]
pub struct IndexArgs {
    /// Index document (defaults to the configured index under the site root)
    pub index: Option<PathBuf>,

    /// Load the index of this job access code instead
    #[arg(long, conflicts_with = "index")]
    pub job: Option<String>,
}

/// A loaded index and where it came from.
pub struct LoadedIndex {
    pub index: CategoryIndex,
    pub source: PathBuf,
}

impl IndexArgs {
    pub fn location(&self, config: &LightboxConfig) -> Result<(PathBuf, PathBuf)> {
        if let Some(ref path) = self.index {
            return Ok((PathBuf::from("."), path.clone()));
        }
        if let Some(ref code) = self.job {
            let registry = load_registry(&config.site_root, &config.registry)
                .context("Failed to read job registry")?;
            let job = registry.resolve(code)?;
            return Ok((config.site_root.clone(), PathBuf::from(job.index)));
        }
        Ok((config.site_root.clone(), config.index.clone()))
    }

    pub fn load(&self, config: &LightboxConfig) -> Result<LoadedIndex> {
        let (root, relative) = self.location(config)?;
        let source = root.join(&relative);
        debug!(source = %source.display(), "Loading index");
        let index = load_index(&root, &relative, &config.grouping)
            .with_context(|| format!("Failed to load index {}", source.display()))?;
        Ok(LoadedIndex { index, source })
    }
}

/// Parse `WIDTHxHEIGHT`, e.g. `1920x1080`.
pub fn parse_size(s: &str) -> Result<(f64, f64), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {s:?}"))?;
    let w: f64 = w.trim().parse().map_err(|_| format!("invalid width {w:?}"))?;
    let h: f64 = h.trim().parse().map_err(|_| format!("invalid height {h:?}"))?;
    if w < 0.0 || h < 0.0 {
        return Err(format!("size must not be negative, got {s:?}"));
    }
    Ok((w, h))
}
