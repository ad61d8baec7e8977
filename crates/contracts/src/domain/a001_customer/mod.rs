pub mod aggregate;
mod mock_data;

pub use aggregate::{Customer, CustomerDto, CustomerField};
pub use mock_data::mock_customers;
