use super::aggregate::{DiscountType, Offer, OfferStatus};
use crate::domain::common::ymd;

struct Seed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    discount_type: DiscountType,
    discount_value: f64,
    min_order_value: f64,
    start: (i32, u32, u32),
    end: (i32, u32, u32),
    status: OfferStatus,
    usage_limit: u32,
    usage_count: u32,
    applicable_products: &'static [&'static str],
}

impl From<Seed> for Offer {
    fn from(s: Seed) -> Self {
        Self {
            id: s.id.into(),
            title: s.title.into(),
            description: s.description.into(),
            discount_type: s.discount_type,
            discount_value: s.discount_value,
            min_order_value: s.min_order_value,
            start_date: ymd(s.start.0, s.start.1, s.start.2),
            end_date: ymd(s.end.0, s.end.1, s.end.2),
            status: s.status,
            usage_limit: s.usage_limit,
            usage_count: s.usage_count,
            applicable_products: s.applicable_products.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// Стартовый набор акций
pub fn mock_offers() -> Vec<Offer> {
    use DiscountType::{Fixed, Percentage};
    use OfferStatus::{Active, Expired};

    let seeds = vec![
        Seed {
            id: "OFF001",
            title: "Welcome Discount",
            description: "Get 10% off on your first order",
            discount_type: Percentage,
            discount_value: 10.0,
            min_order_value: 200.0,
            start: (2023, 10, 1),
            end: (2023, 12, 31),
            status: Active,
            usage_limit: 1,
            usage_count: 45,
            applicable_products: &["All Products"],
        },
        Seed {
            id: "OFF002",
            title: "Festival Special",
            description: "Flat ₹50 off on orders above ₹500",
            discount_type: Fixed,
            discount_value: 50.0,
            min_order_value: 500.0,
            start: (2023, 10, 15),
            end: (2023, 11, 15),
            status: Active,
            usage_limit: 0,
            usage_count: 78,
            applicable_products: &["Ghee", "Paneer", "Cheese"],
        },
        Seed {
            id: "OFF003",
            title: "Weekend Offer",
            description: "15% off on all dairy products",
            discount_type: Percentage,
            discount_value: 15.0,
            min_order_value: 0.0,
            start: (2023, 10, 7),
            end: (2023, 12, 31),
            status: Active,
            usage_limit: 0,
            usage_count: 120,
            applicable_products: &["All Products"],
        },
        Seed {
            id: "OFF004",
            title: "Bulk Purchase Discount",
            description: "20% off on orders above ₹1000",
            discount_type: Percentage,
            discount_value: 20.0,
            min_order_value: 1000.0,
            start: (2023, 9, 1),
            end: (2023, 10, 31),
            status: Expired,
            usage_limit: 0,
            usage_count: 65,
            applicable_products: &["All Products"],
        },
        Seed {
            id: "OFF005",
            title: "Subscription Discount",
            description: "Get ₹100 off on any subscription plan",
            discount_type: Fixed,
            discount_value: 100.0,
            min_order_value: 0.0,
            start: (2023, 10, 1),
            end: (2023, 12, 31),
            status: Active,
            usage_limit: 1,
            usage_count: 32,
            applicable_products: &["Subscription Plans"],
        },
    ];

    seeds.into_iter().map(Offer::from).collect()
}
