//! Command-line interface for Folio content collections.
//!
//! - [`cli`]: Argument parsing
//! - [`config`]: Layered configuration ([`FolioConfig`])
//! - [`app`]: Command execution ([`FolioApp`])

pub mod app;
pub mod cli;
pub mod config;

pub use app::FolioApp;
pub use cli::{CliArgs, Command, ConfigAction};
pub use config::FolioConfig;
