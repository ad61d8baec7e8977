use super::aggregate::{Order, OrderStatus};
use crate::domain::common::ymd;

fn order(id: &str, customer: &str, day: u32, amount: f64, status: OrderStatus, items: u32) -> Order {
    Order {
        id: id.into(),
        customer: customer.into(),
        date: ymd(2023, 6, day),
        amount,
        status,
        items,
    }
}

/// Стартовый набор заказов (июнь 2023)
pub fn mock_orders() -> Vec<Order> {
    use OrderStatus::{Cancelled, Delivered, Pending, Processing};

    vec![
        order("ORD001", "Rahul Sharma", 15, 2500.0, Delivered, 5),
        order("ORD002", "Priya Patel", 16, 1800.0, Processing, 3),
        order("ORD003", "Amit Singh", 17, 3200.0, Delivered, 7),
        order("ORD004", "Neha Gupta", 18, 1250.0, Cancelled, 2),
        order("ORD005", "Vikram Mehta", 19, 4500.0, Delivered, 10),
        order("ORD006", "Ananya Desai", 20, 950.0, Processing, 2),
        order("ORD007", "Rajesh Kumar", 21, 1750.0, Pending, 4),
        order("ORD008", "Sunita Verma", 22, 2100.0, Delivered, 5),
        order("ORD009", "Kiran Joshi", 23, 3600.0, Processing, 8),
        order("ORD010", "Deepak Sharma", 24, 1900.0, Pending, 4),
    ]
}
