//! Response-body sniffing for the publish check.
//!
//! The endpoint is loosely specified: the body may be a bare JSON
//! boolean, a JSON object carrying a boolean somewhere in its values,
//! or plain text "true"/"false". Instead of inspecting types ad hoc,
//! the strategies form an ordered chain of parsers, each returning an
//! optional boolean, composed first-success-wins.

use serde_json::Value;

type BodyParser = fn(&str) -> Option<bool>;

/// Parsers in attempt order. Earlier entries win.
const PARSER_CHAIN: &[BodyParser] = &[json_boolean, json_object_scan, plain_text];

/// Extract a publish verdict from a raw response body.
///
/// Returns `None` when no strategy yields a boolean (the
/// "indeterminate" outcome).
pub fn sniff(body: &str) -> Option<bool> {
    PARSER_CHAIN.iter().find_map(|parse| parse(body))
}

/// A bare JSON boolean literal: `true` / `false`.
fn json_boolean(body: &str) -> Option<bool> {
    serde_json::from_str::<bool>(body).ok()
}

/// A JSON object containing at least one boolean-typed value.
///
/// `serde_json::Map` is a BTreeMap, so "first boolean found" means the
/// boolean under the lexicographically smallest key. Deterministic,
/// and pinned by a test.
fn json_object_scan(body: &str) -> Option<bool> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => map.values().find_map(Value::as_bool),
        _ => None,
    }
}

/// Plain-text `"true"` / `"false"`, case-insensitive, surrounding
/// whitespace tolerated.
fn plain_text(body: &str) -> Option<bool> {
    let text = body.trim();
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
