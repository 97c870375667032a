//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand};

// ============================================================================
// CLI argument types
// ============================================================================

/// Inspect and render a Folio content collection.
#[derive(Parser, Debug)]
#[command(name = "folio", author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to configuration file.
    #[arg(short, long, env = "FOLIO_CONFIG")]
    pub config: Option<String>,

    /// Content directory, overriding the configured one.
    #[arg(long, value_name = "DIR")]
    pub content: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Folio commands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// List published documents, newest first.
    List {
        /// Only documents with this tag.
        #[arg(long)]
        tag: Option<String>,

        /// Only documents in this category.
        #[arg(long)]
        category: Option<String>,
    },

    /// Show a document's metadata and body as JSON.
    Show {
        /// Document slug.
        slug: String,
    },

    /// Render a document's body to HTML.
    Render {
        /// Document slug.
        slug: String,
    },

    /// Print a document's table of contents.
    Toc {
        /// Document slug.
        slug: String,
    },

    /// List featured documents, padded with the newest others.
    Featured {
        /// Number of documents (defaults to `index.featured_limit`).
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List documents to show next to the given one.
    Related {
        /// Slug of the document being viewed.
        slug: String,

        /// Number of documents (defaults to `index.related_limit`).
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Load the collection and print the load report.
    Check,

    /// Configuration operations.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Available config subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigAction {
    /// Show the resolved config file path.
    Path,

    /// Print the effective configuration as TOML.
    Show,
}

// ============================================================================
// Tests
// ============================================================================
