//! Suggestion payload parsing
//!
//! The endpoint answers `{"results": [[id, label], ...]}`. Ids are row ids,
//! so they arrive as integers from the reference server, but string ids are
//! accepted too.

use serde::Deserialize;

use super::types::{SuggestError, Suggestion};

#[derive(Deserialize)]
struct SuggestionPayload {
    results: Vec<(RawId, String)>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Integer(i64),
    Text(String),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Integer(n) => n.to_string(),
            RawId::Text(s) => s,
        }
    }
}

/// Parse a response body into suggestions, preserving server order
pub fn parse_results(body: &str) -> Result<Vec<Suggestion>, SuggestError> {
    let payload: SuggestionPayload =
        serde_json::from_str(body).map_err(|e| SuggestError::Parse(e.to_string()))?;

    Ok(payload
        .results
        .into_iter()
        .map(|(id, label)| Suggestion {
            id: id.into_string(),
            label,
        })
        .collect())
}

#[cfg(test)]
#[path = "payload_tests.rs"]
mod payload_tests;
