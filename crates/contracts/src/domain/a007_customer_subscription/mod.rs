pub mod aggregate;
mod mock_data;

pub use aggregate::{CustomerSubscription, CustomerSubscriptionField, CustomerSubscriptionStatus, EXPIRING_SOON_DAYS};
pub use mock_data::mock_customer_subscriptions;
