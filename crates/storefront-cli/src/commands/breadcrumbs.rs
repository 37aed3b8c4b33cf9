//! Breadcrumb lookup by category id.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use storefront_core::error::AppError;
use storefront_core::types::CategoryId;
use storefront_entity::category::BreadcrumbItem;
use storefront_service::category::breadcrumb;
use storefront_service::source::SnapshotCatalog;

use crate::output::{self, OutputFormat};

/// Arguments for the breadcrumbs command
#[derive(Debug, Args)]
pub struct BreadcrumbsArgs {
    /// Category ID
    pub id: CategoryId,
}

/// Breadcrumb display row
#[derive(Debug, Serialize, Tabled)]
pub(crate) struct CrumbRow {
    id: i64,
    name: String,
    path: String,
    linkable: bool,
}

impl From<&BreadcrumbItem> for CrumbRow {
    fn from(item: &BreadcrumbItem) -> Self {
        Self {
            id: item.id.get(),
            name: item.name.clone(),
            path: item.path.clone(),
            linkable: item.linkable,
        }
    }
}

/// Execute the breadcrumbs command
pub fn execute(
    args: &BreadcrumbsArgs,
    catalog: &SnapshotCatalog,
    format: OutputFormat,
) -> Result<(), AppError> {
    let crumbs = breadcrumb::from_category_id(catalog.forest(), args.id);
    if crumbs.is_empty() {
        return Err(AppError::not_found(format!("Category {} not found", args.id)));
    }

    let rows: Vec<CrumbRow> = crumbs.iter().map(CrumbRow::from).collect();
    output::print_list(&rows, format);
    Ok(())
}
