//! Configuration for the Folio CLI.
//!
//! Provides the [`FolioConfig`] struct that loads from TOML files,
//! environment variables, and defaults using the `confyg` crate.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `FOLIO_CONFIG` environment variable
//! 3. XDG default: `~/.config/folio/config.toml`
//! 4. Built-in defaults
//!
//! `FOLIO_<SECTION>_<KEY>` environment variables overlay the file.

use std::path::PathBuf;

use confyg::{Confygery, env};
use folio_content::RenderOptions;
use folio_core::{Error, Result};
use folio_index::{DEFAULT_WORDS_PER_MINUTE, IndexOptions};
use serde::{Deserialize, Serialize};

// ============================================================================
// Configuration structs
// ============================================================================

/// Main configuration for the Folio CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Where documents are read from.
    pub content: ContentConfig,

    /// Index build and query defaults.
    pub index: IndexConfig,

    /// Rendering options.
    pub render: RenderConfig,
}

/// Content source configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Path to the content directory. Defaults to `./content`.
    pub path: Option<String>,

    /// File extension of documents.
    pub extension: String,

    /// Identifiers containing any of these are skipped.
    pub exclude_markers: Vec<String>,
}

/// Index configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Reading speed used for read time estimates.
    pub words_per_minute: u32,

    /// Default `featured` limit.
    pub featured_limit: usize,

    /// Default `related` limit.
    pub related_limit: usize,
}

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Label shown on callouts.
    pub callout_label: String,

    /// Heading levels listed by `toc`.
    pub toc_levels: Vec<u8>,
}

// ============================================================================
// Default implementations
// ============================================================================

impl Default for ContentConfig {
    fn default() -> Self {
        let index = IndexOptions::default();
        Self {
            path: None,
            extension: "md".to_string(),
            exclude_markers: index.exclude_markers,
        }
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            featured_limit: 3,
            related_limit: 3,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            callout_label: RenderOptions::default().callout_label,
            toc_levels: folio_content::render::DEFAULT_TOC_LEVELS.to_vec(),
        }
    }
}

// ============================================================================
// Config loading
// ============================================================================

impl FolioConfig {
    /// Load configuration from file, environment, and defaults.
    ///
    /// A config path that does not exist is not an error; defaults apply.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path) {
            if path.exists() {
                log::debug!("Loading config from {}", path.display());
                builder
                    .add_file(&path.to_string_lossy())
                    .map_err(|e| Error::config(format!("config file: {e}")))?;
            }
        }

        let mut env_opts = env::Options::with_top_level("FOLIO");
        env_opts.add_section("content");
        env_opts.add_section("index");
        env_opts.add_section("render");
        builder
            .add_env(env_opts)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        let config: Self = builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))?;

        Ok(config)
    }

    /// Resolve the config file path from explicit flag, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }

        if let Ok(path) = std::env::var("FOLIO_CONFIG") {
            return Some(PathBuf::from(path));
        }

        Self::default_config_path()
    }

    /// Return the XDG default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("folio").join("config.toml"))
    }

    /// Serialize this config to a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// The content directory: the configured path, else `./content`.
    pub fn content_root(&self) -> Result<PathBuf> {
        match &self.content.path {
            Some(p) => Ok(PathBuf::from(p)),
            None => std::env::current_dir()
                .map(|d| d.join("content"))
                .map_err(|e| Error::config(format!("Could not determine content path: {e}"))),
        }
    }

    pub fn index_options(&self) -> IndexOptions {
        IndexOptions::default()
            .with_exclude_markers(self.content.exclude_markers.iter().cloned())
            .with_words_per_minute(self.index.words_per_minute)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::default().with_callout_label(self.render.callout_label.clone())
    }
}

// ============================================================================
// Tests
// ============================================================================
