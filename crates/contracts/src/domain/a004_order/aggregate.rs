use crate::domain::common::validation::{require_non_empty, require_non_negative};
use crate::domain::common::Record;
use crate::shared::list_query::{FieldValue, ListEntity, ListField, SearchField, SortConfig};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        Self::Pending,
        Self::Processing,
        Self::Delivered,
        Self::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Учитывается ли заказ в выручке
    pub fn counts_as_revenue(&self) -> bool {
        !matches!(self, Self::Cancelled)
    }
}

// ============================================================================
// Record
// ============================================================================

/// Заказ. Клиент указан по имени, связь со справочником клиентов не проверяется.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer: String,
    pub date: NaiveDate,
    /// Сумма заказа, ₹
    pub amount: f64,
    pub status: OrderStatus,
    /// Количество позиций
    pub items: u32,
}

impl Order {
    /// Копия с новым статусом
    pub fn with_status(&self, status: OrderStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

impl Record for Order {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), String> {
        require_non_empty(&self.id, "ID")?;
        require_non_empty(&self.customer, "Customer")?;
        require_non_negative(self.amount, "Amount")?;
        if self.items == 0 {
            return Err("Order must contain at least one item".into());
        }
        Ok(())
    }

    fn entity_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "order"
    }

    fn element_name() -> &'static str {
        "Order"
    }

    fn list_name() -> &'static str {
        "Orders"
    }

    fn id_prefix() -> &'static str {
        "ORD"
    }
}

// ============================================================================
// List configuration
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderField {
    Id,
    Customer,
    Date,
    Amount,
    Items,
    Status,
}

impl ListField for OrderField {
    const ALL: &'static [Self] = &[
        Self::Id,
        Self::Customer,
        Self::Date,
        Self::Amount,
        Self::Items,
        Self::Status,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Customer => "customer",
            Self::Date => "date",
            Self::Amount => "amount",
            Self::Items => "items",
            Self::Status => "status",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Id => "Order ID",
            Self::Customer => "Customer",
            Self::Date => "Date",
            Self::Amount => "Amount",
            Self::Items => "Items",
            Self::Status => "Status",
        }
    }
}

impl ListEntity for Order {
    type Field = OrderField;

    const SEARCH_FIELDS: &'static [SearchField<OrderField>] = &[
        SearchField::text(OrderField::Customer),
        SearchField::text(OrderField::Id),
    ];

    const FILTER_FIELDS: &'static [OrderField] = &[OrderField::Status];

    const DEFAULT_SORT: SortConfig<OrderField> = SortConfig::ascending(OrderField::Id);

    fn field_value(&self, field: OrderField) -> Option<FieldValue> {
        let value = match field {
            OrderField::Id => FieldValue::from(self.id.as_str()),
            OrderField::Customer => FieldValue::from(self.customer.as_str()),
            OrderField::Date => FieldValue::from(self.date),
            OrderField::Amount => FieldValue::from(self.amount),
            OrderField::Items => FieldValue::from(self.items),
            OrderField::Status => FieldValue::from(self.status.as_str()),
        };
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::ymd;

    fn order() -> Order {
        Order {
            id: "ORD011".into(),
            customer: "Kavya Nair".into(),
            date: ymd(2023, 6, 25),
            amount: 640.0,
            status: OrderStatus::Pending,
            items: 3,
        }
    }

    #[test]
    fn test_with_status() {
        let o = order().with_status(OrderStatus::Delivered);
        assert_eq!(o.status, OrderStatus::Delivered);
        assert_eq!(o.id, "ORD011");
    }

    #[test]
    fn test_validate_items() {
        let mut o = order();
        assert!(o.validate().is_ok());
        o.items = 0;
        assert!(o.validate().is_err());
    }

    #[test]
    fn test_revenue_statuses() {
        assert!(OrderStatus::Pending.counts_as_revenue());
        assert!(!OrderStatus::Cancelled.counts_as_revenue());
    }
}
