//! CDR document model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One record from a CDR stream: an opaque JSON object.
///
/// Two structural variants exist. Crawl documents carry `raw_content` and
/// `url` plus arbitrary metadata; media documents lack `raw_content` and
/// are passed through deduplication untouched. All fields a document
/// arrives with are preserved on output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(Map<String, Value>);

impl Document {
    /// Decode a document from one NDJSON line.
    pub fn from_line(line: &str) -> serde_json::Result<Self> {
        serde_json::from_str(line)
    }

    /// A document without a `raw_content` field is a media record.
    pub fn is_media(&self) -> bool {
        !self.0.contains_key("raw_content")
    }

    /// Raw fetched content, when present and textual.
    pub fn raw_content(&self) -> Option<&str> {
        self.0.get("raw_content").and_then(Value::as_str)
    }

    /// Source URL, when present and textual.
    pub fn url(&self) -> Option<&str> {
        self.0.get("url").and_then(Value::as_str)
    }

    /// Look up an arbitrary field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Attach a text field, replacing any previous value under that name.
    pub fn set_text(&mut self, field: &str, value: impl Into<String>) {
        self.0.insert(field.to_string(), Value::String(value.into()));
    }
}
