//! Context detection and ranking module
//!
//! Classifies captured text (URL, encoded, identifier, prose) and ranks
//! palette commands by usage and context.

pub mod detection;
pub mod ranking;
pub mod category;

pub use detection::{detect_identifier_style, IdentifierStyle, LetterCase};
pub use ranking::{UsageMetrics, rank_commands};
pub use category::{ContextCategory, detect_content_category, get_action_category, get_widget_category};
