use serde::Deserialize;

use crate::parsers::deserializers::deserialize_null_default;

/// Record kind that carries a search hit. Every other kind is skipped.
pub const KIND_MATCH: &str = "match";

/// One line of the search tool's JSON output, as emitted on the wire
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "type", default, deserialize_with = "deserialize_null_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub data: RawData,
}

impl RawRecord {
    pub fn is_match(&self) -> bool {
        self.kind == KIND_MATCH
    }
}

/// Payload of a record. Only read for `match` records; other kinds leave
/// most of these fields absent and they fall back to their zero value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawData {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub path: RawText,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub lines: RawText,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub line_number: u64,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub submatches: Vec<RawSubmatch>,
}

/// `{ "text": ... }` wrapper used for paths, lines and submatch text
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawText {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub text: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSubmatch {
    #[serde(rename = "match", default, deserialize_with = "deserialize_null_default")]
    pub matched: RawText,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub start: usize,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub end: usize,
}
