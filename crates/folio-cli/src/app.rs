//! The Folio CLI application.
//!
//! [`FolioApp`] owns the effective configuration, builds the document index
//! over the content directory and turns each [`Command`] into output text.

use std::sync::Arc;

use anyhow::{Context, Result};
use folio_content::{render_with, table_of_contents};
use folio_core::FsSource;
use folio_index::{Document, DocumentIndex};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::cli::{CliArgs, Command, ConfigAction};
use crate::config::FolioConfig;

/// One line of a listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Summary<'a> {
    slug: &'a str,
    title: &'a str,
    date: &'a str,
    read_time: String,
    category: &'a str,
    tags: &'a [String],
    featured: bool,
}

impl<'a> From<&'a Document> for Summary<'a> {
    fn from(doc: &'a Document) -> Self {
        Self {
            slug: &doc.slug,
            title: &doc.metadata.title,
            date: &doc.metadata.date,
            read_time: doc.read_time.to_string(),
            category: &doc.metadata.category,
            tags: &doc.metadata.tags,
            featured: doc.metadata.featured,
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("serializing output")
}

fn listing(docs: &[Arc<Document>]) -> Result<String> {
    let summaries: Vec<Summary<'_>> = docs.iter().map(|d| Summary::from(d.as_ref())).collect();
    to_json(&summaries)
}

/// The CLI application.
pub struct FolioApp {
    name: String,
    config: FolioConfig,
    config_path: Option<String>,
}

impl FolioApp {
    /// Create from CLI args, loading config from file/env.
    pub fn from_args(args: &CliArgs) -> Result<Self> {
        let mut config = FolioConfig::load(args.config.as_deref())?;
        if let Some(content) = &args.content {
            config.content.path = Some(content.clone());
        }
        Ok(Self::new(config).with_config_path(args.config.clone()))
    }

    pub fn new(config: FolioConfig) -> Self {
        Self {
            name: "folio".to_string(),
            config,
            config_path: None,
        }
    }

    pub fn with_config_path(mut self, path: Option<String>) -> Self {
        self.config_path = path;
        self
    }

    pub fn config(&self) -> &FolioConfig {
        &self.config
    }

    /// Initialise tracing-based logging.
    ///
    /// Uses `RUST_LOG` env var if set, otherwise defaults based on verbosity flags.
    pub fn init_logging(verbose: bool, quiet: bool) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if quiet {
            EnvFilter::new("warn")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        };

        // Ignore error if a subscriber is already set (e.g. in tests).
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// Build an (unloaded) index over the configured content directory.
    pub fn index(&self) -> Result<DocumentIndex<FsSource>> {
        let root = self.config.content_root()?;
        tracing::debug!(root = %root.display(), "Opening content directory");
        let source = FsSource::new(root).with_extension(self.config.content.extension.clone());
        Ok(DocumentIndex::with_options(source, self.config.index_options()))
    }

    /// Run the CLI with the given arguments, printing the output.
    pub async fn run(&self, args: CliArgs) -> Result<()> {
        Self::init_logging(args.verbose, args.quiet);

        match args.command {
            Some(command) => {
                let output = self.execute(command).await?;
                println!("{output}");
            }
            None => println!(
                "{} {} - use --help for usage",
                self.name,
                env!("CARGO_PKG_VERSION")
            ),
        }
        Ok(())
    }

    /// Execute one command and return what it prints.
    pub async fn execute(&self, command: Command) -> Result<String> {
        match command {
            Command::Config { action } => self.handle_config(action),
            command => {
                let index = self.index()?;
                self.handle_content(&index, command).await
            }
        }
    }

    fn handle_config(&self, action: ConfigAction) -> Result<String> {
        match action {
            ConfigAction::Path => {
                let path = FolioConfig::resolve_config_path(self.config_path.as_deref())
                    .context("could not determine config directory for this platform")?;
                if !path.exists() {
                    tracing::info!("{} does not exist; built-in defaults apply", path.display());
                }
                Ok(path.display().to_string())
            }
            ConfigAction::Show => Ok(self.config.to_toml_string()?),
        }
    }

    async fn handle_content(
        &self,
        index: &DocumentIndex<FsSource>,
        command: Command,
    ) -> Result<String> {
        match command {
            Command::List { tag, category } => {
                let mut docs = index.all().await?;
                if let Some(tag) = tag {
                    docs.retain(|d| d.metadata.has_tag(&tag));
                }
                if let Some(category) = category {
                    docs.retain(|d| d.metadata.matches_category(&category));
                }
                listing(&docs)
            }
            Command::Show { slug } => {
                let doc = index.get_by_slug(&slug).await?;
                to_json(doc.as_ref())
            }
            Command::Render { slug } => {
                let doc = index.get_by_slug(&slug).await?;
                Ok(render_with(&doc.body, &self.config.render_options()))
            }
            Command::Toc { slug } => {
                let doc = index.get_by_slug(&slug).await?;
                to_json(&table_of_contents(&doc.body, &self.config.render.toc_levels))
            }
            Command::Featured { limit } => {
                let limit = limit.unwrap_or(self.config.index.featured_limit);
                listing(&index.featured(limit).await?)
            }
            Command::Related { slug, limit } => {
                let limit = limit.unwrap_or(self.config.index.related_limit);
                listing(&index.related(&slug, limit).await?)
            }
            Command::Check => {
                let snapshot = index.load_all().await?;
                to_json(snapshot.report())
            }
            Command::Config { action } => self.handle_config(action),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
