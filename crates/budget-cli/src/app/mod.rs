//! Application-level utilities for the Budget CLI.
//!
//! This module provides:
//! - The application context (CLI flags + lazily loaded config)
//! - Resolved export settings for the menu session
//! - Logging setup

mod context;
mod logging;
mod settings;

pub use context::AppContext;
pub use logging::init_logging;
pub use settings::ExportSettings;
