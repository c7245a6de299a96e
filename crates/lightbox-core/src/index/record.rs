use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::consts::PLACEHOLDER_NAME;

/// Fields consulted for each attribute, in priority order.
const NAME_FIELDS: &[&str] = &["name", "label"];
const LABEL_FIELDS: &[&str] = &["label", "name"];
const IMAGE_FIELDS: &[&str] = &["image", "path", "file"];
const RAW_PATH_FIELDS: &[&str] = &["path", "image", "file"];
const THUMB_FIELDS: &[&str] = &["thumb", "thumbnail", "thumbPath"];

/// One browsable image.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageRecord {
    pub name: String,
    pub label: String,
    /// Location of the full-resolution image. Never empty.
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb: Option<String>,
}

/// A raw index entry, classified once at the boundary.
#[derive(Clone, Copy, Debug)]
pub enum RawEntry<'a> {
    /// A mapping with any subset of the known fields.
    Object(&'a Map<String, Value>),
    /// A bare string, taken as the image path.
    Path(&'a str),
    /// Anything else. Every attribute falls back to its default.
    Other,
}

impl<'a> RawEntry<'a> {
    pub fn from_value(value: &'a Value) -> Self {
        match value {
            Value::Object(map) => Self::Object(map),
            Value::String(s) => Self::Path(s),
            _ => Self::Other,
        }
    }

    /// True if this mapping names an image location rather than a group.
    pub fn has_path_field(map: &Map<String, Value>) -> bool {
        RAW_PATH_FIELDS.iter().any(|key| map.contains_key(*key))
    }

    /// First non-empty value among `candidates`. Numbers are accepted and
    /// rendered as text; other JSON types are skipped.
    fn field(&self, candidates: &[&str]) -> Option<String> {
        let map = match self {
            Self::Object(map) => map,
            _ => return None,
        };
        candidates.iter().find_map(|key| match map.get(*key)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
    }

    /// The path the category is derived from.
    pub fn raw_path(&self) -> Option<String> {
        match self {
            Self::Path(s) if !s.is_empty() => Some(s.to_string()),
            Self::Path(_) | Self::Other => None,
            Self::Object(_) => self.field(RAW_PATH_FIELDS),
        }
    }

    pub fn to_record(&self) -> ImageRecord {
        let raw_path = self.raw_path();

        let name = self
            .field(NAME_FIELDS)
            .or_else(|| raw_path.as_deref().and_then(last_segment))
            .unwrap_or_else(|| PLACEHOLDER_NAME.to_string());
        let label = self
            .field(LABEL_FIELDS)
            .or_else(|| raw_path.clone())
            .unwrap_or_else(|| name.clone());
        let path = self
            .field(IMAGE_FIELDS)
            .or_else(|| raw_path.clone())
            .unwrap_or_else(|| PLACEHOLDER_NAME.to_string());
        let thumb = self.field(THUMB_FIELDS);

        ImageRecord {
            name,
            label,
            path,
            thumb,
        }
    }
}

fn last_segment(path: &str) -> Option<String> {
    path.rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
