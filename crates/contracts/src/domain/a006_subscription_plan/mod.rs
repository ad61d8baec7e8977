pub mod aggregate;
mod mock_data;

pub use aggregate::{SubscriptionPlan, SubscriptionPlanField};
pub use mock_data::mock_subscription_plans;
