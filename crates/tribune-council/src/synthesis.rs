//! Judge input assembly.
//!
//! The Judge sees the original context followed by both advocates' point
//! lists, serialized as JSON, and their sizes:
//!
//! ```text
//! {context}
//!
//! Optimistic analysis (points JSON):
//! ["...", "..."]
//!
//! Critical analysis (points JSON):
//! ["..."]
//!
//! Counts:
//! positives=2 negatives=1
//! ```
//!
//! The assembled text is trimmed at both ends. Empty lists render as `[]`.

use std::fmt;

/// Everything the Judge is shown.
#[derive(Debug, Clone, Copy)]
pub struct SynthesisInput<'a> {
    context: &'a str,
    positives: &'a [String],
    negatives: &'a [String],
}

impl<'a> SynthesisInput<'a> {
    /// Bundles the context with the Optimist's and Critic's points.
    pub fn new(context: &'a str, positives: &'a [String], negatives: &'a [String]) -> Self {
        Self {
            context,
            positives,
            negatives,
        }
    }

    /// Number of Optimist points.
    pub fn positive_count(&self) -> usize {
        self.positives.len()
    }

    /// Number of Critic points.
    pub fn negative_count(&self) -> usize {
        self.negatives.len()
    }

    /// Renders the Judge's context text.
    pub fn render(&self) -> String {
        let text = format!(
            "{}\n\nOptimistic analysis (points JSON):\n{}\n\nCritical analysis (points JSON):\n{}\n\nCounts:\npositives={} negatives={}",
            self.context,
            points_json(self.positives),
            points_json(self.negatives),
            self.positive_count(),
            self.negative_count(),
        );
        text.trim().to_string()
    }
}

impl fmt::Display for SynthesisInput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// JSON array with `", "` between items.
fn points_json(points: &[String]) -> String {
    let items: Vec<String> = points
        .iter()
        // Serializing a string cannot fail
        .map(|p| serde_json::to_string(p).unwrap_or_default())
        .collect();
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exact_layout() {
        let pos = points(&["Great food", "Friendly staff"]);
        let neg = points(&["Slow service"]);
        let input = SynthesisInput::new("Venue: Cafe X", &pos, &neg);
        assert_eq!(
            input.render(),
            "Venue: Cafe X\n\n\
             Optimistic analysis (points JSON):\n[\"Great food\", \"Friendly staff\"]\n\n\
             Critical analysis (points JSON):\n[\"Slow service\"]\n\n\
             Counts:\npositives=2 negatives=1"
        );
    }

    #[test]
    fn test_empty_lists() {
        let input = SynthesisInput::new("ctx", &[], &[]);
        let text = input.render();
        assert!(text.contains("(points JSON):\n[]\n\nCritical"));
        assert!(text.ends_with("positives=0 negatives=0"));
    }

    #[test]
    fn test_context_whitespace_trimmed() {
        let input = SynthesisInput::new("\n\n  ctx", &[], &[]);
        assert!(input.render().starts_with("ctx\n\n"));
    }

    #[test]
    fn test_quotes_are_escaped() {
        let pos = points(&["Says \"wow\""]);
        let input = SynthesisInput::new("ctx", &pos, &[]);
        assert!(input.to_string().contains(r#"["Says \"wow\""]"#));
    }
}
