use serde::Deserialize;
use serde_json::{Map, Value};

/// One EPE sentence record exactly as the annotator serialized it.
#[derive(Debug, Deserialize)]
pub(crate) struct RawSentence {
    pub id: u64,
    pub nodes: Vec<RawNode>,
}

/// Mandatory node fields stay optional here so that a missing one can be
/// reported against its node id instead of as a bare JSON error.
#[derive(Debug, Deserialize)]
pub(crate) struct RawNode {
    pub id: u32,
    pub form: Option<String>,
    #[serde(default)]
    pub start: Option<usize>,
    #[serde(default)]
    pub end: Option<usize>,
    #[serde(default)]
    pub top: Option<bool>,
    pub properties: Option<Map<String, Value>>,
    #[serde(default)]
    pub edges: Vec<RawEdge>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawEdge {
    pub label: String,
    pub target: u32,
}
