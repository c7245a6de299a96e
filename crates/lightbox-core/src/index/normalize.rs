use std::collections::{BTreeMap, HashSet};

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use tracing::debug;

use crate::config::IndexConfig;
use crate::consts::ALL_CATEGORY;
use crate::error::{LightboxError, Result};

use super::category::derive_category;
use super::natural::natural_cmp;
use super::record::{ImageRecord, RawEntry};

/// Records grouped by category, plus the reserved `All` bucket.
///
/// Every bucket is naturally sorted by label. Serializes as a mapping in
/// [`category_names`](Self::category_names) order, which is itself a valid
/// index document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryIndex {
    categories: BTreeMap<String, Vec<ImageRecord>>,
    all: Vec<ImageRecord>,
}

impl CategoryIndex {
    /// Records of one category. `All` is always present.
    pub fn get(&self, category: &str) -> Option<&[ImageRecord]> {
        if category == ALL_CATEGORY {
            Some(&self.all)
        } else {
            self.categories.get(category).map(Vec::as_slice)
        }
    }

    pub fn all(&self) -> &[ImageRecord] {
        &self.all
    }

    /// Category names in display order: alphabetical, `All` last.
    pub fn category_names(&self) -> Vec<&str> {
        self.categories
            .keys()
            .map(String::as_str)
            .chain(std::iter::once(ALL_CATEGORY))
            .collect()
    }

    /// `(category, records)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ImageRecord])> {
        self.categories
            .iter()
            .map(|(name, records)| (name.as_str(), records.as_slice()))
            .chain(std::iter::once((ALL_CATEGORY, self.all.as_slice())))
    }

    /// Total number of records.
    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// True when only the `All` bucket exists.
    pub fn is_collapsed(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Serialize for CategoryIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len() + 1))?;
        for (name, records) in self.iter() {
            map.serialize_entry(name, records)?;
        }
        map.end()
    }
}

/// Normalize a raw index document with the default grouping settings.
pub fn normalize(raw: &Value) -> Result<CategoryIndex> {
    normalize_with(raw, &IndexConfig::default())
}

/// Parse index JSON text and normalize it.
pub fn parse_index(text: &str, config: &IndexConfig) -> Result<CategoryIndex> {
    let raw: Value =
        serde_json::from_str(text).map_err(|e| LightboxError::MalformedIndex(e.to_string()))?;
    normalize_with(&raw, config)
}

/// Normalize a raw index document into a [`CategoryIndex`].
///
/// Grouping is always re-derived from each entry's path and name; keys of a
/// mapping document are ignored and every value is flattened. Records that
/// are identical in every field are kept once. Fails only if `raw` is
/// neither a sequence nor a mapping.
pub fn normalize_with(raw: &Value, config: &IndexConfig) -> Result<CategoryIndex> {
    let entries = flatten_document(raw)?;

    let mut categories: BTreeMap<String, Vec<ImageRecord>> = BTreeMap::new();
    let mut all = Vec::with_capacity(entries.len());

    // A normalized document lists every record twice, once in its category
    // and once under `All`. Identical records are kept once, first seen wins.
    // Entries without any location are placeholders and are all kept.
    let mut seen = HashSet::with_capacity(entries.len());

    for entry in &entries {
        let record = entry.to_record();
        let raw_path = entry.raw_path();
        if raw_path.is_some() && !seen.insert(record.clone()) {
            continue;
        }
        let category = derive_category(raw_path.as_deref(), &record.name, &config.markers);
        if category != ALL_CATEGORY {
            categories.entry(category).or_default().push(record.clone());
        }
        all.push(record);
    }

    if should_collapse(&categories, config.collapse_ratio) {
        debug!(
            categories = categories.len(),
            records = all.len(),
            "Grouping is mostly singletons, collapsing to a single bucket"
        );
        categories.clear();
    }

    for bucket in categories.values_mut() {
        sort_by_label(bucket);
    }
    sort_by_label(&mut all);

    debug!(
        records = all.len(),
        categories = categories.len(),
        "Index normalized"
    );

    Ok(CategoryIndex { categories, all })
}

fn sort_by_label(records: &mut [ImageRecord]) {
    records.sort_by(|a, b| natural_cmp(&a.label, &b.label));
}

fn should_collapse(categories: &BTreeMap<String, Vec<ImageRecord>>, ratio: f64) -> bool {
    let total: usize = categories.values().map(Vec::len).sum();
    if total == 0 {
        return false;
    }
    let singletons = categories.values().filter(|r| r.len() == 1).count();
    singletons as f64 / total as f64 >= ratio
}

/// Turn the top-level document into a flat list of entries.
fn flatten_document(raw: &Value) -> Result<Vec<RawEntry<'_>>> {
    match raw {
        Value::Array(items) => Ok(items.iter().map(RawEntry::from_value).collect()),
        Value::Object(map) => {
            let mut entries = Vec::new();
            for value in map.values() {
                flatten_value(value, &mut entries);
            }
            Ok(entries)
        }
        other => Err(LightboxError::MalformedIndex(format!(
            "expected a sequence or mapping, found {}",
            json_kind(other)
        ))),
    }
}

fn flatten_value<'a>(value: &'a Value, entries: &mut Vec<RawEntry<'a>>) {
    match value {
        Value::Array(items) => entries.extend(items.iter().map(RawEntry::from_value)),
        Value::Object(map) if RawEntry::has_path_field(map) => entries.push(RawEntry::Object(map)),
        Value::Object(map) => {
            for nested in map.values() {
                flatten_value(nested, entries);
            }
        }
        Value::Null => {}
        other => entries.push(RawEntry::from_value(other)),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
