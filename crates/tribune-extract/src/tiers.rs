//! The ordered extraction tiers.
//!
//! Each tier is a pure `fn(&str) -> Option<Vec<String>>` over already
//! de-fenced text. A tier returns `None` when it cannot produce at least
//! one sanitized item, which hands control to the next tier.

use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

use crate::models::ExtractionTier;
use crate::sanitize::{sanitize_all, sanitize_value};

/// Signature shared by all tiers.
pub type TierFn = fn(&str) -> Option<Vec<String>>;

/// A named extraction tier.
#[derive(Clone, Copy)]
pub struct Tier {
    /// Which tier this is.
    pub kind: ExtractionTier,
    /// The parsing function.
    pub parse: TierFn,
}

/// All tiers in the order they are attempted.
pub const TIERS: [Tier; 4] = [
    Tier { kind: ExtractionTier::Strict, parse: strict_json },
    Tier { kind: ExtractionTier::Substring, parse: embedded_json },
    Tier { kind: ExtractionTier::Lines, parse: line_items },
    Tier { kind: ExtractionTier::Semicolons, parse: semicolon_items },
];

fn non_empty(points: Vec<String>) -> Option<Vec<String>> {
    if points.is_empty() {
        None
    } else {
        Some(points)
    }
}

fn json_array_points(text: &str) -> Option<Vec<String>> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(values)) => non_empty(values.iter().filter_map(sanitize_value).collect()),
        _ => None,
    }
}

/// Tier 1: the whole text is a JSON array.
pub fn strict_json(text: &str) -> Option<Vec<String>> {
    json_array_points(text)
}

/// Tier 2: a JSON array between the first `[` and the last `]`.
pub fn embedded_json(text: &str) -> Option<Vec<String>> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    if end <= start {
        return None;
    }
    json_array_points(&text[start..=end])
}

fn bullet_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[-•\d).]+\s*").expect("valid bullet prefix pattern"))
}

/// Tier 3: one candidate per non-blank line, list markers removed.
///
/// Strips leading runs of `-`, `•`, digits, `)` and `.` so that
/// `1. Good`, `2) Good`, `- Good` and `• Good` all become `Good`.
pub fn line_items(text: &str) -> Option<Vec<String>> {
    let prefix = bullet_prefix();
    let candidates: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| prefix.replace(line, "").into_owned())
        .collect();
    non_empty(sanitize_all(candidates.iter().map(String::as_str)))
}

/// Tier 4: semicolon-separated pieces.
pub fn semicolon_items(text: &str) -> Option<Vec<String>> {
    if !text.contains(';') {
        return None;
    }
    non_empty(sanitize_all(text.split(';')))
}
