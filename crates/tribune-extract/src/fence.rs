//! Markdown code-fence removal.
//!
//! Strips one leading ```` ``` ```` (optionally tagged `json`) and one
//! trailing ```` ``` ```` from model output. Inner fences are left alone.

use regex::Regex;
use std::sync::OnceLock;

fn leading_fence() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\A\s*```(?:json)?\s*").expect("valid leading fence pattern"))
}

fn trailing_fence() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s*```\s*\z").expect("valid trailing fence pattern"))
}

/// Remove a single surrounding code fence and trim the result.
///
/// # Example
///
/// ```rust
/// use tribune_extract::fence::strip_code_fences;
///
/// assert_eq!(strip_code_fences("```json\n[1]\n```"), "[1]");
/// assert_eq!(strip_code_fences("  plain  "), "plain");
/// ```
pub fn strip_code_fences(text: &str) -> String {
    let without_lead = leading_fence().replace(text, "");
    let without_trail = trailing_fence().replace(&without_lead, "");
    without_trail.trim().to_string()
}
