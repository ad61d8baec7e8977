//! Сводка главной страницы: карточки по текущим коллекциям

use crate::domain::a001_customer::{Customer, CustomerField};
use crate::domain::a002_delivery_boy::{DeliveryBoy, DeliveryBoyField};
use crate::domain::a003_product::Product;
use crate::domain::a004_order::{Order, OrderField};
use crate::domain::common::ActivityStatus;
use crate::shared::aggregate::{count_by, count_where};
use crate::shared::list_query::{select, SortConfig, ViewQuery};
use serde::{Deserialize, Serialize};

/// Сколько последних заказов показывает главная страница
pub const RECENT_ORDERS_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewSummary {
    pub total_products: usize,
    pub total_orders: usize,
    /// Сумма заказов без отмененных, ₹
    pub revenue: f64,
    pub total_customers: usize,
    pub active_customers: usize,
    pub active_delivery_boys: usize,
    /// Стоимость остатков на складе, ₹
    pub inventory_value: f64,
    /// Ключи товаров с низким остатком, в порядке каталога
    pub low_stock_products: Vec<String>,
    pub orders_by_status: Vec<(String, usize)>,
}

impl OverviewSummary {
    pub fn compute(
        customers: &[Customer],
        delivery_boys: &[DeliveryBoy],
        products: &[Product],
        orders: &[Order],
    ) -> Self {
        let active = ActivityStatus::Active.as_str();
        Self {
            total_products: products.len(),
            total_orders: orders.len(),
            revenue: orders
                .iter()
                .filter(|o| o.status.counts_as_revenue())
                .map(|o| o.amount)
                .sum(),
            total_customers: customers.len(),
            active_customers: count_where(customers, CustomerField::Status, active),
            active_delivery_boys: count_where(delivery_boys, DeliveryBoyField::Status, active),
            inventory_value: products.iter().map(Product::stock_value).sum(),
            low_stock_products: products
                .iter()
                .filter(|p| p.is_low_stock())
                .map(|p| p.id.clone())
                .collect(),
            orders_by_status: count_by(orders, OrderField::Status),
        }
    }

    /// Последние заказы: по дате, новые сверху; при равной дате порядок коллекции
    pub fn recent_orders(orders: &[Order], limit: usize) -> Vec<Order> {
        let query = ViewQuery::new(SortConfig::descending(OrderField::Date));
        select(orders, &query)
            .into_iter()
            .take(limit)
            .cloned()
            .collect()
    }

    /// Доля активных клиентов, %
    pub fn active_customer_share(&self) -> f64 {
        if self.total_customers == 0 {
            return 0.0;
        }
        self.active_customers as f64 * 100.0 / self.total_customers as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_customer::mock_customers;
    use crate::domain::a002_delivery_boy::mock_delivery_boys;
    use crate::domain::a003_product::mock_products;
    use crate::domain::a004_order::mock_orders;

    #[test]
    fn test_overview_from_mock_data() {
        let s = OverviewSummary::compute(
            &mock_customers(),
            &mock_delivery_boys(),
            &mock_products(),
            &mock_orders(),
        );
        assert_eq!(s.total_products, 10);
        assert_eq!(s.total_orders, 10);
        // 23550 минус отмененный ORD004 (1250)
        assert_eq!(s.revenue, 22300.0);
        assert_eq!(s.total_customers, 10);
        assert_eq!(s.active_customers, 7);
        assert_eq!(s.active_delivery_boys, 6);
        assert_eq!(s.low_stock_products, vec!["PRD007", "PRD010"]);
        assert_eq!(s.active_customer_share(), 70.0);
    }

    #[test]
    fn test_recent_orders_newest_first() {
        let recent = OverviewSummary::recent_orders(&mock_orders(), RECENT_ORDERS_LIMIT);
        let ids: Vec<&str> = recent.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["ORD010", "ORD009", "ORD008", "ORD007", "ORD006"]);

        assert!(OverviewSummary::recent_orders(&[], RECENT_ORDERS_LIMIT).is_empty());
        assert_eq!(OverviewSummary::recent_orders(&mock_orders(), 20).len(), 10);
    }

    #[test]
    fn test_overview_empty() {
        let s = OverviewSummary::compute(&[], &[], &[], &[]);
        assert_eq!(s.revenue, 0.0);
        assert_eq!(s.active_customer_share(), 0.0);
        assert!(s.orders_by_status.is_empty());
    }
}
