//! Данные страницы отчетов и производные показатели.
//!
//! Ряды статические (как в демо-версии), графики не строятся: фронтенд выводит таблицы.

pub mod dto;
mod mock_data;

pub use dto::{
    InventoryStatus, MonthlySales, ProductPerformance, ReportKind, SalesSummary, ShareSlice,
};
pub use mock_data::{
    customer_segment_data, delivery_performance_data, inventory_status_data, monthly_sales_data,
    product_performance_data,
};

/// Итоги по помесячным продажам
pub fn summarize_sales(months: &[MonthlySales]) -> SalesSummary {
    let total_sales: f64 = months.iter().map(|m| m.sales).sum();
    let total_orders: u32 = months.iter().map(|m| m.orders).sum();
    let total_returns: u32 = months.iter().map(|m| m.returns).sum();

    let average_monthly_sales = if months.is_empty() {
        0.0
    } else {
        total_sales / months.len() as f64
    };
    let return_rate = if total_orders == 0 {
        0.0
    } else {
        f64::from(total_returns) * 100.0 / f64::from(total_orders)
    };
    // при равенстве берется более ранний месяц
    let best_month = months
        .iter()
        .fold(None::<&MonthlySales>, |best, m| match best {
            Some(b) if b.sales >= m.sales => Some(b),
            _ => Some(m),
        })
        .map(|m| m.month.clone());

    SalesSummary {
        total_sales,
        total_orders,
        total_returns,
        average_monthly_sales,
        return_rate,
        best_month,
    }
}

/// Рост продаж месяц к месяцу, %. Для первого месяца и нулевой базы `None`.
pub fn month_over_month_growth(months: &[MonthlySales]) -> Vec<(String, Option<f64>)> {
    months
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let growth = i
                .checked_sub(1)
                .map(|prev| months[prev].sales)
                .filter(|prev| *prev != 0.0)
                .map(|prev| (m.sales - prev) * 100.0 / prev);
            (m.month.clone(), growth)
        })
        .collect()
}

/// Доли сегментов в процентах от суммы
pub fn share_percentages(slices: &[ShareSlice]) -> Vec<(String, f64)> {
    let total: f64 = slices.iter().map(|s| s.value).sum();
    slices
        .iter()
        .map(|s| {
            let pct = if total == 0.0 { 0.0 } else { s.value * 100.0 / total };
            (s.name.clone(), pct)
        })
        .collect()
}

/// Позиции, где спрос выше остатка, с величиной дефицита
pub fn inventory_shortfall(items: &[InventoryStatus]) -> Vec<(String, f64)> {
    items
        .iter()
        .filter(|i| i.demand > i.stock)
        .map(|i| (i.name.clone(), i.demand - i.stock))
        .collect()
}

/// Товары по убыванию роста
pub fn fastest_growing(items: &[ProductPerformance]) -> Vec<ProductPerformance> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| {
        b.growth
            .partial_cmp(&a.growth)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_sales() {
        let s = summarize_sales(&monthly_sales_data());
        assert_eq!(s.total_sales, 797000.0);
        assert_eq!(s.total_orders, 2060);
        assert_eq!(s.total_returns, 128);
        assert!((s.average_monthly_sales - 66416.666).abs() < 0.01);
        assert!((s.return_rate - 6.2136).abs() < 0.001);
        assert_eq!(s.best_month.as_deref(), Some("Dec"));
    }

    #[test]
    fn test_summarize_empty() {
        let s = summarize_sales(&[]);
        assert_eq!(s.total_sales, 0.0);
        assert_eq!(s.return_rate, 0.0);
        assert_eq!(s.best_month, None);
    }

    #[test]
    fn test_month_over_month_growth() {
        let growth = month_over_month_growth(&monthly_sales_data());
        assert_eq!(growth[0], ("Jan".to_string(), None));
        let (month, feb) = &growth[1];
        assert_eq!(month, "Feb");
        assert!((feb.unwrap() - 15.5555).abs() < 0.001);
        // Mar fell from 52000 to 48000
        assert!(growth[2].1.unwrap() < 0.0);
    }

    #[test]
    fn test_share_percentages() {
        let shares = share_percentages(&delivery_performance_data());
        assert_eq!(shares[0], ("On Time".to_string(), 78.0));
        let total: f64 = shares.iter().map(|(_, p)| p).sum();
        assert!((total - 100.0).abs() < 1e-9);
        assert!(share_percentages(&[]).is_empty());
    }

    #[test]
    fn test_inventory_shortfall() {
        let shortfall = inventory_shortfall(&inventory_status_data());
        assert_eq!(
            shortfall,
            vec![
                ("Milk".to_string(), 5.0),
                ("Curd".to_string(), 15.0),
                ("Cheese".to_string(), 10.0),
            ]
        );
    }

    #[test]
    fn test_fastest_growing() {
        let sorted = fastest_growing(&product_performance_data());
        assert_eq!(sorted[0].name, "Flavored Milk");
        assert_eq!(sorted.last().map(|p| p.name.as_str()), Some("Butter"));
    }
}
