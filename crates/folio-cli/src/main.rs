//! Folio CLI
//!
//! Inspect, query and render a directory of Folio documents.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use folio_cli::{CliArgs, FolioApp};

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    let app = FolioApp::from_args(&args)?;
    app.run(args).await
}
