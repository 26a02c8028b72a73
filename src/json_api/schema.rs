//! JSON schema types for print jobs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

fn default_true() -> bool {
    true
}

/// Top-level JSON job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonJob {
    /// Elements for the `<parameter>` block.
    #[serde(default)]
    pub parameters: Vec<JsonElement>,
    /// Print commands, in order.
    #[serde(default)]
    pub body: Vec<JsonElement>,
    /// Whether to cut paper after printing (default: true).
    #[serde(default = "default_true")]
    pub autocut: bool,
}

/// A single element. Every key other than `element`, `text` and `tail` is
/// an attribute, assigned by its wire name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonElement {
    /// Element kind, e.g. `"text"` or `"barcode"`.
    pub element: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub tail: String,
    #[serde(flatten)]
    pub attrs: BTreeMap<String, Value>,
}

impl JsonElement {
    pub fn new(element: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            text: String::new(),
            tail: String::new(),
            attrs: BTreeMap::new(),
        }
    }
}
