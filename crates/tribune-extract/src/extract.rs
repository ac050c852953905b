//! Extraction entry points.

use tracing::debug;

use crate::fence::strip_code_fences;
use crate::models::{Extraction, PointList};
use crate::tiers::TIERS;

/// Extract points and report which tier produced them.
///
/// Never fails. Empty or unparseable input yields [`Extraction::empty`].
pub fn extract_with_tier(raw: &str, max_items: usize) -> Extraction {
    if raw.trim().is_empty() {
        return Extraction::empty();
    }

    let text = strip_code_fences(raw);

    for tier in TIERS.iter() {
        if let Some(mut points) = (tier.parse)(&text) {
            points.truncate(max_items);
            debug!(tier = %tier.kind, points = points.len(), "points extracted");
            return Extraction {
                points,
                tier: Some(tier.kind),
            };
        }
    }

    debug!(chars = raw.len(), "no points extracted");
    Extraction::empty()
}

/// Extract at most `max_items` points from raw model output.
///
/// # Example
///
/// ```rust
/// use tribune_extract::extract_points;
///
/// let raw = r#"["a", "b", "c", "d"]"#;
/// assert_eq!(extract_points(raw, 2), vec!["a", "b"]);
/// ```
pub fn extract_points(raw: &str, max_items: usize) -> PointList {
    extract_with_tier(raw, max_items).points
}
