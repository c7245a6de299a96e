use std::path::{Component, Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;

use crate::error::Result;
use crate::index::ImageRecord;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProbeStatus {
    Ok { width: u32, height: u32 },
    Missing,
    Unreadable(String),
}

/// Outcome of checking one record's image on disk.
#[derive(Clone, Debug)]
pub struct ProbeResult {
    pub record: ImageRecord,
    pub resolved: PathBuf,
    pub status: ProbeStatus,
}

impl ProbeResult {
    pub fn is_ok(&self) -> bool {
        matches!(self.status, ProbeStatus::Ok { .. })
    }
}

/// Map an index path onto the site root. Only plain segments are kept:
/// `.`, `..` and any root or prefix are dropped, so the result never leaves
/// `root`.
pub fn resolve_asset_path(root: &Path, asset: &str) -> PathBuf {
    let mut resolved = root.to_path_buf();
    for component in Path::new(asset).components() {
        if let Component::Normal(segment) = component {
            resolved.push(segment);
        }
    }
    resolved
}

/// Pixel dimensions of an image file, read from its header.
pub fn image_size(path: &Path) -> Result<(u32, u32)> {
    Ok(image::image_dimensions(path)?)
}

pub fn probe_record(root: &Path, record: &ImageRecord) -> ProbeResult {
    let resolved = resolve_asset_path(root, &record.path);
    let status = if !resolved.is_file() {
        ProbeStatus::Missing
    } else {
        match image_size(&resolved) {
            Ok((width, height)) => ProbeStatus::Ok { width, height },
            Err(e) => ProbeStatus::Unreadable(e.to_string()),
        }
    };
    ProbeResult {
        record: record.clone(),
        resolved,
        status,
    }
}

/// Probe every record in parallel. Results keep the input order.
///
/// `progress` is called with `(records_done, total_records)`.
pub fn probe_records(
    root: &Path,
    records: &[ImageRecord],
    progress: impl Fn(usize, usize) + Sync,
) -> Vec<ProbeResult> {
    let total = records.len();
    let done = AtomicUsize::new(0);
    records
        .par_iter()
        .map(|record| {
            let result = probe_record(root, record);
            progress(done.fetch_add(1, Ordering::Relaxed) + 1, total);
            result
        })
        .collect()
}
