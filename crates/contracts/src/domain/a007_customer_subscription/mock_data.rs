use super::aggregate::{CustomerSubscription, CustomerSubscriptionStatus};
use crate::domain::common::ymd;

fn subscription(
    id: &str,
    customer: &str,
    plan: &str,
    start: (i32, u32, u32),
    end: (i32, u32, u32),
    status: CustomerSubscriptionStatus,
) -> CustomerSubscription {
    CustomerSubscription {
        id: id.into(),
        customer: customer.into(),
        plan: plan.into(),
        start_date: ymd(start.0, start.1, start.2),
        end_date: ymd(end.0, end.1, end.2),
        status,
    }
}

/// Стартовый набор подписок клиентов
pub fn mock_customer_subscriptions() -> Vec<CustomerSubscription> {
    use CustomerSubscriptionStatus::{Active, Expired, ExpiringSoon};

    vec![
        subscription("CSUB001", "Rahul Sharma", "Daily Essentials", (2023, 10, 15), (2023, 11, 14), Active),
        subscription("CSUB002", "Priya Patel", "Family Pack", (2023, 10, 10), (2023, 11, 9), Active),
        subscription("CSUB003", "Amit Singh", "Premium Dairy", (2023, 9, 25), (2023, 10, 24), ExpiringSoon),
        subscription("CSUB004", "Neha Gupta", "Daily Essentials", (2023, 10, 5), (2023, 11, 4), Active),
        subscription("CSUB005", "Vikram Joshi", "Office Pack", (2023, 10, 1), (2023, 10, 15), Expired),
    ]
}
