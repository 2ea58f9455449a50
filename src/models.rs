use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One station object from the directory, kept verbatim.
///
/// Only `tags` is ever inspected; every other field passes through to the
/// preset file untouched and in its original key order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationRecord(Map<String, Value>);

impl StationRecord {
    pub fn tags_lowercase(&self) -> String {
        self.0
            .get("tags")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_lowercase()
    }

    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    pub countrycode: String,
    pub order: String,
    pub reverse: bool,
    pub limit: u32,
    pub hidebroken: bool,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            countrycode: "CN".to_string(),
            order: "clickcount".to_string(),
            reverse: true,
            limit: 100,
            hidebroken: true,
        }
    }
}
