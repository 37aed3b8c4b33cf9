//! Nested path resolution through the category page controller.

use std::sync::Arc;

use clap::Args;

use storefront_core::config::AppConfig;
use storefront_core::error::AppError;
use storefront_service::page::{CategoryPage, PageSettings, RouteState};
use storefront_service::source::SnapshotCatalog;

use super::breadcrumbs::CrumbRow;
use crate::output::{self, OutputFormat};

/// Arguments for the resolve command
#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Nested path, e.g. `electronics/phones`; empty browses the roots
    #[arg(default_value = "")]
    pub path: String,
}

/// Execute the resolve command
pub async fn execute(
    args: &ResolveArgs,
    catalog: SnapshotCatalog,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let mut page = CategoryPage::new(Arc::new(catalog), PageSettings::from(&config.catalog));
    page.navigate(&args.path).await;
    let view = page.view();

    if format == OutputFormat::Json {
        output::print_json(&view);
        return Ok(());
    }

    output::print_kv("Lookup", view.route.lookup);
    output::print_kv("Path", &view.route.path);
    match &view.route.state {
        RouteState::Resolved { category_id } => {
            output::print_kv("State", "resolved");
            output::print_kv("Category", &category_id.to_string());
            if let Some(canonical) = &view.route.canonical_path {
                output::print_kv("Canonical path", canonical);
            }
            if let Some(products) = &view.products {
                output::print_kv("Products", &products.total.to_string());
            }
            println!();
            let rows: Vec<CrumbRow> = view.breadcrumbs.iter().map(CrumbRow::from).collect();
            output::print_list(&rows, format);
        }
        RouteState::RootBrowse => {
            output::print_kv("State", "root browse");
            output::print_kv("Roots", &view.forest.roots.len().to_string());
        }
        RouteState::NotFound => output::print_warning("Category not found"),
        RouteState::Unavailable { message } => {
            return Err(AppError::service_unavailable(message.clone()));
        }
        RouteState::Failed { message } => return Err(AppError::internal(message.clone())),
        RouteState::Loading => {}
    }
    Ok(())
}
