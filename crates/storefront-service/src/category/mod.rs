//! Category tree navigation.

pub mod breadcrumb;
pub mod expansion;
pub mod index;
pub mod path;
pub mod router;
pub mod sequencer;

#[cfg(test)]
mod property_tests;

pub use breadcrumb::BreadcrumbService;
pub use expansion::ExpansionSet;
pub use router::RoutePlan;
pub use sequencer::{RouteSequencer, RouteTicket};
