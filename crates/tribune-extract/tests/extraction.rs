//! # Extraction Integration Tests
//!
//! Realistic model outputs, including the malformed shapes seen in the wild.

use proptest::prelude::*;
use tribune_extract::{extract_points, extract_with_tier, ExtractionTier};

fn to_json_array(items: &[String]) -> String {
    serde_json::to_string(items).unwrap()
}

// =============================================================================
// DOCUMENTED BEHAVIOR
// =============================================================================

#[test]
fn test_fence_tolerance() {
    assert_eq!(extract_points("```json\n[\"a\",\"b\"]\n```", 5), vec!["a", "b"]);
}

#[test]
fn test_substring_tolerance() {
    assert_eq!(
        extract_points("Here is the result: [\"a\", \"b\"] — done.", 5),
        vec!["a", "b"]
    );
}

#[test]
fn test_line_fallback() {
    assert_eq!(
        extract_points("1. First point\n2. Second point", 5),
        vec!["First point", "Second point"]
    );
}

#[test]
fn test_bracket_noise_rejected() {
    assert!(extract_points("[\n]", 5).is_empty());
}

#[test]
fn test_truncation() {
    let raw = to_json_array(&["a", "b", "c", "d"].map(String::from));
    assert_eq!(extract_points(&raw, 2), vec!["a", "b"]);
}

// =============================================================================
// MODEL OUTPUT SHAPES
// =============================================================================

#[test]
fn test_judge_style_multiline_array() {
    let raw = r#"[
  "Leans positive overall: strong food with minor service hiccups.",
  "Best for friends' dinners or dates.",
  "Go earlier on weekends."
]"#;
    let e = extract_with_tier(raw, 4);
    assert_eq!(e.tier, Some(ExtractionTier::Strict));
    assert_eq!(e.points.len(), 3);
    assert_eq!(e.points[1], "Best for friends' dinners or dates.");
}

#[test]
fn test_broken_json_falls_back_to_lines() {
    // Missing comma makes the array invalid JSON
    let raw = "[\n\"Great pasta\"\n\"Warm service\",\n]";
    let e = extract_with_tier(raw, 6);
    assert_eq!(e.tier, Some(ExtractionTier::Lines));
    assert_eq!(e.points, vec!["Great pasta", "Warm service"]);
}

#[test]
fn test_fenced_prose_with_array() {
    let raw = "```json\nSure! Here are the points:\n[\"Long waits\", \"Noisy\"]\n```";
    assert_eq!(extract_points(raw, 6), vec!["Long waits", "Noisy"]);
}

#[test]
fn test_markdown_bullets() {
    let raw = "- Long waits\n- Inconsistent dishes\n- Noisy dining room";
    assert_eq!(
        extract_points(raw, 6),
        vec!["Long waits", "Inconsistent dishes", "Noisy dining room"]
    );
}

#[test]
fn test_non_string_elements_stringified() {
    assert_eq!(
        extract_points(r#"["Open late", 24, null, true]"#, 6),
        vec!["Open late", "24", "true"]
    );
}

#[test]
fn test_unicode_preserved() {
    assert_eq!(
        extract_points(r#"["Crème brûlée is excellent", "Friends’ favorite"]"#, 6),
        vec!["Crème brûlée is excellent", "Friends’ favorite"]
    );
}

#[test]
fn test_garbage_never_panics() {
    for raw in ["```", "]]][[[", "\"", ";", "{", "\u{0}", "```json", "- \n- "] {
        let _ = extract_points(raw, 6);
    }
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn prop_json_round_trip(items in prop::collection::vec("[a-zA-Z0-9][a-zA-Z0-9 ]{0,20}[a-zA-Z0-9]", 1..8)) {
        let raw = to_json_array(&items);
        prop_assert_eq!(extract_points(&raw, items.len()), items);
    }

    #[test]
    fn prop_never_exceeds_max(raw in ".{0,200}", max in 0usize..8) {
        prop_assert!(extract_points(&raw, max).len() <= max);
    }
}
