//! Nested path lookup by category id.

use clap::Args;

use storefront_core::error::AppError;
use storefront_core::types::CategoryId;
use storefront_service::category::index;
use storefront_service::source::SnapshotCatalog;

/// Arguments for the path command
#[derive(Debug, Args)]
pub struct PathArgs {
    /// Category ID
    pub id: CategoryId,
}

/// Execute the path command
pub fn execute(args: &PathArgs, catalog: &SnapshotCatalog) -> Result<(), AppError> {
    let path = index::path_of(catalog.forest(), args.id)
        .ok_or_else(|| AppError::not_found(format!("Category {} not found", args.id)))?;
    println!("{path}");
    Ok(())
}
