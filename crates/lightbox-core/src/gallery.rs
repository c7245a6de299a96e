//! Browsing state of the gallery: loaded index, selected category, filter
//! query, and the position within the filtered list.

use serde_json::Value;
use tracing::{info, warn};

use crate::config::IndexConfig;
use crate::error::{LightboxError, Result};
use crate::index::{filter_records, normalize_with, CategoryIndex, ImageRecord};

/// Identifies one index load. Only the most recent ticket is applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    source: String,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied { records: usize, categories: usize },
    /// A newer load started after this one; nothing changed.
    Stale,
    Failed,
}

#[derive(Clone, Debug, Default)]
pub struct Gallery {
    config: IndexConfig,
    index: CategoryIndex,
    category: Option<String>,
    query: String,
    visible: Vec<ImageRecord>,
    position: usize,
    status: String,
    generation: u64,
    view_epoch: u64,
}

impl Gallery {
    pub fn new(config: IndexConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Start loading an index from `source`. Any load still in flight
    /// becomes stale.
    pub fn begin_load(&mut self, source: impl Into<String>) -> LoadTicket {
        self.generation += 1;
        let source = source.into();
        self.status = format!("Loading {source}...");
        info!(generation = self.generation, %source, "Loading index");
        LoadTicket {
            generation: self.generation,
            source,
        }
    }

    /// Apply the result of a load started with [`begin_load`](Self::begin_load).
    ///
    /// A fetch failure keeps the current index; a malformed document clears
    /// the gallery. Either way the status line reports it.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Value>) -> LoadOutcome {
        if ticket.generation != self.generation {
            warn!(
                stale = ticket.generation,
                current = self.generation,
                source = %ticket.source,
                "Ignoring stale index load"
            );
            return LoadOutcome::Stale;
        }

        let index = result.and_then(|raw| normalize_with(&raw, &self.config));
        match index {
            Ok(index) => {
                let outcome = LoadOutcome::Applied {
                    records: index.len(),
                    categories: index.category_names().len(),
                };
                self.set_index(index);
                self.status = if self.index.is_empty() {
                    format!("No images in {}", ticket.source)
                } else {
                    "Ready.".to_string()
                };
                info!(source = %ticket.source, ?outcome, "Index loaded");
                outcome
            }
            Err(err) => {
                warn!(source = %ticket.source, error = %err, "Index load failed");
                if matches!(err, LightboxError::MalformedIndex(_)) {
                    self.set_index(CategoryIndex::default());
                }
                self.status = format!("Failed to load {}", ticket.source);
                LoadOutcome::Failed
            }
        }
    }

    /// Replace the index and select its first category.
    pub fn set_index(&mut self, index: CategoryIndex) {
        self.category = index.category_names().first().map(|c| c.to_string());
        self.index = index;
        self.refresh();
    }

    pub fn index(&self) -> &CategoryIndex {
        &self.index
    }

    pub fn categories(&self) -> Vec<&str> {
        self.index.category_names()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn select_category(&mut self, category: &str) -> Option<&ImageRecord> {
        self.category = Some(category.to_string());
        self.refresh();
        self.current()
    }

    pub fn set_filter(&mut self, query: &str) -> Option<&ImageRecord> {
        self.query = query.to_string();
        self.refresh();
        self.current()
    }

    /// Records of the selected category that pass the filter.
    pub fn visible(&self) -> &[ImageRecord] {
        &self.visible
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn current(&self) -> Option<&ImageRecord> {
        self.visible.get(self.position)
    }

    pub fn next(&mut self) -> Option<&ImageRecord> {
        if self.visible.is_empty() {
            return None;
        }
        self.position = (self.position + 1) % self.visible.len();
        self.show()
    }

    pub fn prev(&mut self) -> Option<&ImageRecord> {
        if self.visible.is_empty() {
            return None;
        }
        self.position = (self.position + self.visible.len() - 1) % self.visible.len();
        self.show()
    }

    /// Jump to `position` in the visible list. Out of range is ignored.
    pub fn select(&mut self, position: usize) -> Option<&ImageRecord> {
        if position >= self.visible.len() {
            return None;
        }
        self.position = position;
        self.show()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Bumped every time the displayed image changes or goes away.
    pub fn view_epoch(&self) -> u64 {
        self.view_epoch
    }

    fn refresh(&mut self) {
        let records = self
            .category
            .as_deref()
            .and_then(|c| self.index.get(c))
            .unwrap_or_default();
        self.visible = filter_records(records, &self.query);
        self.position = 0;

        if self.visible.is_empty() {
            self.view_epoch += 1;
            self.status = "No matches.".to_string();
        } else {
            self.show();
        }
    }

    fn show(&mut self) -> Option<&ImageRecord> {
        self.view_epoch += 1;
        let total = self.visible.len();
        let item = self.visible.get(self.position)?;
        self.status = format!("{} ({}/{})", item.name, self.position + 1, total);
        Some(item)
    }
}
