//! Category page controller and its view model.

pub mod controller;
pub mod view;

pub use controller::{CategoryFetch, CategoryPage, PageSettings};
pub use view::{CategoryPageView, RouteState, RouteView};
