//! Core types for point-list extraction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered list of short statements extracted from one agent's output.
pub type PointList = Vec<String>;

/// The parsing tier that produced a point list.
///
/// Variants are listed in the order they are attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionTier {
    /// The whole (de-fenced) text parsed as a JSON array.
    Strict,
    /// A JSON array found between the first `[` and the last `]`.
    Substring,
    /// One point per line, bullet and numbering prefixes removed.
    Lines,
    /// Semicolon-separated pieces.
    Semicolons,
}

impl fmt::Display for ExtractionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Substring => write!(f, "substring"),
            Self::Lines => write!(f, "lines"),
            Self::Semicolons => write!(f, "semicolons"),
        }
    }
}

/// Extraction result with the tier that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Extraction {
    /// Sanitized points, already truncated to the requested maximum.
    pub points: PointList,
    /// Winning tier, `None` when nothing could be extracted.
    pub tier: Option<ExtractionTier>,
}

impl Extraction {
    /// An extraction that found nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if no points were extracted.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
