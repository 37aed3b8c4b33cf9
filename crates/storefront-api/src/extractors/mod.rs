//! Query and path parameter helpers.

pub mod pagination;
pub mod path;

pub use pagination::PaginationParams;
pub use path::{parse_category_id, parse_id_list, parse_product_id};
