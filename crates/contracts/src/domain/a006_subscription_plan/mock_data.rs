use super::aggregate::SubscriptionPlan;
use crate::domain::common::ActivityStatus;

fn plan(
    id: &str,
    name: &str,
    duration: &str,
    price: f64,
    products: &[&str],
    status: ActivityStatus,
    subscribers: u32,
) -> SubscriptionPlan {
    SubscriptionPlan {
        id: id.into(),
        name: name.into(),
        duration: duration.into(),
        price,
        products: products.iter().map(|p| p.to_string()).collect(),
        status,
        subscribers,
    }
}

/// Стартовый набор тарифных планов
pub fn mock_subscription_plans() -> Vec<SubscriptionPlan> {
    use ActivityStatus::{Active, Inactive};

    vec![
        plan("SUB001", "Daily Essentials", "30 days", 899.0, &["Milk (500ml)", "Curd (200g)"], Active, 45),
        plan("SUB002", "Family Pack", "30 days", 1499.0, &["Milk (1L)", "Curd (400g)", "Paneer (200g)"], Active, 32),
        plan("SUB003", "Premium Dairy", "30 days", 2199.0, &["Milk (1L)", "Curd (400g)", "Paneer (200g)", "Ghee (200ml)"], Active, 18),
        plan("SUB004", "Weekend Special", "90 days", 1299.0, &["Flavored Yogurt (100g)", "Cheese Slices (10pcs)"], Inactive, 0),
        plan("SUB005", "Office Pack", "15 days", 699.0, &["Milk (500ml)", "Buttermilk (200ml)"], Active, 12),
    ]
}
