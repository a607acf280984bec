use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A FACEIT hub whose finished matches get relayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hub {
    pub id: String,
    pub name: String,
    /// Watermark: id of the most recent match uploaded for this hub.
    #[serde(default)]
    pub last: Option<String>,
    /// Keys we don't know about, kept so hand-edited files survive a save.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Hub {
    pub fn new(id: impl Into<String>, name: impl Into<String>, last: Option<&str>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            last: last.map(str::to_string),
            extra: Map::new(),
        }
    }
}
