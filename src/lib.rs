//! Clipboard text transformation core.
//!
//! The menu-bar host links this library and drives it through `api`;
//! the `clipshelf` binary uses the same entry points from a terminal.

pub mod api;
pub mod core;
pub mod logging;
pub mod shared;

pub use crate::core::transform::{apply, display_name, icon, TransformationKind};
pub use shared::error::{AppError, AppResult};
