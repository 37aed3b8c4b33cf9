//! CLI command definitions and dispatch.

pub mod breadcrumbs;
pub mod path;
pub mod resolve;
pub mod tree;

use clap::{Parser, Subcommand};

use storefront_core::config::AppConfig;
use storefront_core::error::AppError;
use storefront_service::source::SnapshotCatalog;

use crate::output::OutputFormat;

/// Storefront catalog inspection tool
#[derive(Debug, Parser)]
#[command(name = "storefront-cli", version, about, long_about = None)]
pub struct Cli {
    /// Directory holding `default.toml` and environment overlays
    #[arg(short, long, default_value = "config")]
    pub config: String,

    /// Configuration environment overlay
    #[arg(short, long, env = "STOREFRONT_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the category tree with each node's nested path
    Tree(tree::TreeArgs),
    /// Resolve a nested path the way the category page does
    Resolve(resolve::ResolveArgs),
    /// Show the breadcrumb of a category id
    Breadcrumbs(breadcrumbs::BreadcrumbsArgs),
    /// Print the nested path of a category id
    Path(path::PathArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = AppConfig::load_from(&self.config, &self.env)?;
        tracing::debug!(
            config_dir = %self.config,
            env = %self.env,
            snapshot = %config.catalog.snapshot_path,
            "Loading catalog snapshot"
        );
        let catalog = SnapshotCatalog::load(&config.catalog.snapshot_path).await?;

        match &self.command {
            Commands::Tree(args) => tree::execute(args, &catalog, self.format),
            Commands::Resolve(args) => resolve::execute(args, catalog, &config, self.format).await,
            Commands::Breadcrumbs(args) => breadcrumbs::execute(args, &catalog, self.format),
            Commands::Path(args) => path::execute(args, &catalog),
        }
    }
}
