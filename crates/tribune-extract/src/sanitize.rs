//! Per-item sanitization shared by every extraction tier.
//!
//! A candidate survives sanitization only if something meaningful is left
//! after trimming, comma removal and quote unwrapping.

use serde_json::Value;

/// Bracket tokens that never count as points on their own.
fn is_bare_bracket(s: &str) -> bool {
    s == "[" || s == "]"
}

/// Sanitize a single candidate string.
///
/// - Trims surrounding whitespace and one trailing comma
/// - Unwraps one layer of matching `"…"` or `'…'`
/// - Rejects bare `[` / `]` and empty results
///
/// # Example
///
/// ```rust
/// use tribune_extract::sanitize::sanitize_item;
///
/// assert_eq!(sanitize_item("  \"Cozy ambience\",  "), Some("Cozy ambience".to_string()));
/// assert_eq!(sanitize_item("]"), None);
/// ```
pub fn sanitize_item(raw: &str) -> Option<String> {
    let mut s = raw.trim();
    if is_bare_bracket(s) {
        return None;
    }

    if let Some(stripped) = s.strip_suffix(',') {
        s = stripped.trim_end();
    }

    let quoted = (s.starts_with('"') && s.ends_with('"'))
        || (s.starts_with('\'') && s.ends_with('\''));
    if quoted {
        // Quote characters are ASCII, so byte slicing stays on char boundaries.
        s = if s.len() >= 2 { s[1..s.len() - 1].trim() } else { "" };
    }

    if s.is_empty() || is_bare_bracket(s) {
        None
    } else {
        Some(s.to_string())
    }
}

/// Sanitize a JSON array element.
///
/// `null` is discarded, strings are used as-is, and any other value is
/// stringified in compact JSON form before sanitization.
pub fn sanitize_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => sanitize_item(s),
        other => sanitize_item(&other.to_string()),
    }
}

/// Sanitize every candidate, keeping order and dropping rejects.
pub fn sanitize_all<'a, I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    items.into_iter().filter_map(sanitize_item).collect()
}
