//! Utility modules for file discovery and identifier computation.
//!
//! # Modules
//!
//! - [`files`]: Async file discovery and reading utilities
//! - [`ids`]: Slug and anchor id computation

pub mod files;
pub mod ids;
