use crate::domain::common::validation::{require_non_empty, require_non_negative};
use crate::domain::common::{ActivityStatus, Record};
use crate::shared::list_query::{FieldValue, ListEntity, ListField, SearchField, SortConfig};
use serde::{Deserialize, Serialize};

// ============================================================================
// Record
// ============================================================================

/// Тарифный план подписки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionPlan {
    pub id: String,
    pub name: String,
    /// Срок в свободной форме: "30 days"
    pub duration: String,
    /// Цена за период, ₹
    pub price: f64,
    /// Состав набора ("Milk (500ml)")
    pub products: Vec<String>,
    pub status: ActivityStatus,
    pub subscribers: u32,
}

impl SubscriptionPlan {
    /// Срок в днях из строки вида "30 days"
    pub fn duration_days(&self) -> Option<u32> {
        let (number, unit) = self.duration.trim().split_once(' ')?;
        let number: u32 = number.parse().ok()?;
        match unit.trim() {
            "day" | "days" => Some(number),
            "week" | "weeks" => Some(number * 7),
            _ => None,
        }
    }

    /// Выручка за один период со всех подписчиков, ₹
    pub fn period_revenue(&self) -> f64 {
        self.price * f64::from(self.subscribers)
    }
}

impl Record for SubscriptionPlan {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn validate(&self) -> Result<(), String> {
        require_non_empty(&self.id, "ID")?;
        require_non_empty(&self.name, "Plan name")?;
        require_non_negative(self.price, "Price")?;
        if self.duration_days().is_none() {
            return Err(format!("Invalid duration: {}", self.duration));
        }
        if self.products.is_empty() {
            return Err("Plan must contain at least one product".into());
        }
        Ok(())
    }

    fn entity_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "subscription_plan"
    }

    fn element_name() -> &'static str {
        "Subscription Plan"
    }

    fn list_name() -> &'static str {
        "Subscription Plans"
    }

    fn id_prefix() -> &'static str {
        "SUB"
    }
}

// ============================================================================
// List configuration
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubscriptionPlanField {
    Id,
    Name,
    Duration,
    Price,
    Status,
    Subscribers,
}

impl ListField for SubscriptionPlanField {
    const ALL: &'static [Self] = &[
        Self::Id,
        Self::Name,
        Self::Duration,
        Self::Price,
        Self::Status,
        Self::Subscribers,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Duration => "duration",
            Self::Price => "price",
            Self::Status => "status",
            Self::Subscribers => "subscribers",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "Plan Name",
            Self::Duration => "Duration",
            Self::Price => "Price",
            Self::Status => "Status",
            Self::Subscribers => "Subscribers",
        }
    }
}

impl ListEntity for SubscriptionPlan {
    type Field = SubscriptionPlanField;

    const SEARCH_FIELDS: &'static [SearchField<SubscriptionPlanField>] = &[
        SearchField::text(SubscriptionPlanField::Name),
        SearchField::text(SubscriptionPlanField::Id),
    ];

    const FILTER_FIELDS: &'static [SubscriptionPlanField] = &[SubscriptionPlanField::Status];

    const DEFAULT_SORT: SortConfig<SubscriptionPlanField> =
        SortConfig::ascending(SubscriptionPlanField::Id);

    fn field_value(&self, field: SubscriptionPlanField) -> Option<FieldValue> {
        let value = match field {
            SubscriptionPlanField::Id => FieldValue::from(self.id.as_str()),
            SubscriptionPlanField::Name => FieldValue::from(self.name.as_str()),
            SubscriptionPlanField::Duration => FieldValue::from(self.duration.as_str()),
            SubscriptionPlanField::Price => FieldValue::from(self.price),
            SubscriptionPlanField::Status => FieldValue::from(self.status.as_str()),
            SubscriptionPlanField::Subscribers => FieldValue::from(self.subscribers),
        };
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(duration: &str) -> SubscriptionPlan {
        SubscriptionPlan {
            id: "SUB006".into(),
            name: "Trial".into(),
            duration: duration.into(),
            price: 299.0,
            products: vec!["Milk (500ml)".into()],
            status: ActivityStatus::Active,
            subscribers: 4,
        }
    }

    #[test]
    fn test_duration_days() {
        assert_eq!(plan("30 days").duration_days(), Some(30));
        assert_eq!(plan("2 weeks").duration_days(), Some(14));
        assert_eq!(plan("monthly").duration_days(), None);
        assert!(plan("monthly").validate().is_err());
    }

    #[test]
    fn test_period_revenue() {
        assert_eq!(plan("30 days").period_revenue(), 1196.0);
    }
}
