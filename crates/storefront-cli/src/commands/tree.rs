//! Category tree listing.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use storefront_core::error::AppError;
use storefront_service::category::index;
use storefront_service::source::SnapshotCatalog;

use crate::output::{self, OutputFormat};

/// Arguments for the tree command
#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Only show nodes up to this depth (0 = roots only)
    #[arg(short, long)]
    pub max_depth: Option<u32>,
}

/// Tree display row
#[derive(Debug, Serialize, Tabled)]
struct TreeRow {
    id: i64,
    /// Name indented by depth
    name: String,
    level: u32,
    leaf: bool,
    path: String,
}

/// Execute the tree command
pub fn execute(
    args: &TreeArgs,
    catalog: &SnapshotCatalog,
    format: OutputFormat,
) -> Result<(), AppError> {
    let rows: Vec<TreeRow> = index::walk(catalog.forest())
        .filter(|(node, _)| args.max_depth.is_none_or(|max| node.level <= max))
        .map(|(node, path)| TreeRow {
            id: node.id.get(),
            name: format!("{}{}", "  ".repeat(node.level as usize), node.name),
            level: node.level,
            leaf: node.is_leaf(),
            path,
        })
        .collect();

    output::print_list(&rows, format);
    Ok(())
}
