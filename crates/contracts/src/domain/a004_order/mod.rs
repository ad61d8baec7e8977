pub mod aggregate;
mod mock_data;

pub use aggregate::{Order, OrderField, OrderStatus};
pub use mock_data::mock_orders;
