//! Clipboard module
//!
//! - `history`: bounded history with deduplication and capacity limits
//! - `filter`: sensitive-content detection applied before storing

pub mod filter;
pub mod history;

pub use filter::is_sensitive;
pub use history::{AddOutcome, ClipboardHistory};
