//! Host-facing entry points. Each function takes the state it needs
//! explicitly so any shell (CLI, IPC bridge, tests) can drive it.

pub mod commands;
