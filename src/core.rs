//! Domain logic with no I/O surface: the transformer, context detection,
//! clipboard history and the feature registry.

pub mod clipboard;
pub mod context;
pub mod features;
pub mod transform;
