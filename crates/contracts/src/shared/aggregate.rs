//! Простые агрегаты по коллекциям: количество по значению поля и сумма

use crate::shared::list_query::ListEntity;

/// Количество записей по каждому значению поля, в порядке первого появления
pub fn count_by<E: ListEntity>(items: &[E], field: E::Field) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for item in items {
        let Some(value) = item.field_value(field) else {
            continue;
        };
        let key = value.as_text();
        match counts.iter_mut().find(|(k, _)| *k == key) {
            Some((_, n)) => *n += 1,
            None => counts.push((key, 1)),
        }
    }
    counts
}

/// Количество записей с заданным значением поля
pub fn count_where<E: ListEntity>(items: &[E], field: E::Field, value: &str) -> usize {
    items
        .iter()
        .filter(|item| {
            item.field_value(field)
                .map(|v| v.as_text() == value)
                .unwrap_or(false)
        })
        .count()
}

/// Сумма числового поля; нечисловые и отсутствующие значения пропускаются
pub fn sum_by<E: ListEntity>(items: &[E], field: E::Field) -> f64 {
    items
        .iter()
        .filter_map(|item| item.field_value(field).and_then(|v| v.as_number()))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_order::{mock_orders, OrderField};

    #[test]
    fn test_count_by_status() {
        let orders = mock_orders();
        let counts = count_by(&orders, OrderField::Status);
        assert_eq!(
            counts,
            vec![
                ("Delivered".to_string(), 4),
                ("Processing".to_string(), 3),
                ("Cancelled".to_string(), 1),
                ("Pending".to_string(), 2),
            ]
        );
        assert_eq!(count_where(&orders, OrderField::Status, "Pending"), 2);
    }

    #[test]
    fn test_sum_by() {
        let orders = mock_orders();
        assert_eq!(sum_by(&orders, OrderField::Amount), 23550.0);
        assert_eq!(sum_by(&orders, OrderField::Items), 50.0);
        // text field contributes nothing
        assert_eq!(sum_by(&orders, OrderField::Customer), 0.0);
    }
}
