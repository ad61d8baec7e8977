pub mod aggregate;
mod mock_data;

pub use aggregate::{Product, ProductDto, ProductField, LOW_STOCK_THRESHOLD, PRODUCT_CATEGORIES};
pub use mock_data::mock_products;
