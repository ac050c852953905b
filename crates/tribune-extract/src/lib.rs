//! # Tribune Extract - Point-List Extraction
//!
//! Turns raw, frequently malformed model output into an ordered list of
//! short statements. Extraction never fails: the worst outcome is an
//! empty list.
//!
//! ## Tiers
//!
//! Models asked for "ONLY a JSON array" still wrap answers in markdown
//! fences, prepend chatter, fall back to numbered lists, or emit a single
//! semicolon-separated sentence. Each of those shapes has a dedicated tier,
//! and tiers are tried in a fixed order:
//!
//! | Tier | Input shape | Example |
//! |------|-------------|---------|
//! | `strict` | Whole text is a JSON array | `["a", "b"]` |
//! | `substring` | JSON array embedded in prose | `Sure: ["a", "b"] done.` |
//! | `lines` | Bulleted or numbered lines | `1. a` / `- b` |
//! | `semicolons` | One line, `;`-separated | `a; b` |
//!
//! A tier "wins" only when it yields at least one sanitized item.
//!
//! ## Architecture
//!
//! ```text
//! raw text ──► strip fences ──► strict ─► substring ─► lines ─► semicolons
//!                                  │          │          │          │
//!                                  └──────────┴────┬─────┴──────────┘
//!                                                  ▼
//!                                     sanitize ──► truncate(max_items)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use tribune_extract::extract_points;
//!
//! let raw = "```json\n[\"Great pasta\", \"Warm service\"]\n```";
//! assert_eq!(extract_points(raw, 6), vec!["Great pasta", "Warm service"]);
//!
//! // Malformed output degrades instead of failing
//! assert_eq!(extract_points("1. Long waits\n2. Noisy room", 6), vec!["Long waits", "Noisy room"]);
//! assert!(extract_points("[\n]", 6).is_empty());
//! ```

pub mod extract;
pub mod fence;
pub mod models;
pub mod sanitize;
pub mod tiers;

pub use extract::{extract_points, extract_with_tier};
pub use models::{Extraction, ExtractionTier, PointList};
