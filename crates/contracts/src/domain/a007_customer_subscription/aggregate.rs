use crate::domain::common::validation::require_non_empty;
use crate::domain::common::Record;
use crate::shared::list_query::{FieldValue, ListEntity, ListField, SearchField, SortConfig};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// За сколько дней до окончания подписка считается истекающей
pub const EXPIRING_SOON_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CustomerSubscriptionStatus {
    #[default]
    Active,
    #[serde(rename = "Expiring Soon")]
    ExpiringSoon,
    Expired,
}

impl CustomerSubscriptionStatus {
    pub const ALL: [CustomerSubscriptionStatus; 3] =
        [Self::Active, Self::ExpiringSoon, Self::Expired];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::ExpiringSoon => "Expiring Soon",
            Self::Expired => "Expired",
        }
    }
}

// ============================================================================
// Record
// ============================================================================

/// Подписка клиента на план. Клиент и план указаны по имени.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerSubscription {
    pub id: String,
    pub customer: String,
    pub plan: String,

    #[serde(rename = "startDate")]
    pub start_date: NaiveDate,

    #[serde(rename = "endDate")]
    pub end_date: NaiveDate,

    pub status: CustomerSubscriptionStatus,
}

impl CustomerSubscription {
    /// Статус на указанный день по дате окончания
    pub fn status_on(&self, day: NaiveDate) -> CustomerSubscriptionStatus {
        let days_left = (self.end_date - day).num_days();
        if days_left < 0 {
            CustomerSubscriptionStatus::Expired
        } else if days_left <= EXPIRING_SOON_DAYS {
            CustomerSubscriptionStatus::ExpiringSoon
        } else {
            CustomerSubscriptionStatus::Active
        }
    }

    /// Копия со статусом, пересчитанным на указанный день
    pub fn refreshed(&self, day: NaiveDate) -> Self {
        Self {
            status: self.status_on(day),
            ..self.clone()
        }
    }
}

impl Record for CustomerSubscription {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.plan
    }

    fn validate(&self) -> Result<(), String> {
        require_non_empty(&self.id, "ID")?;
        require_non_empty(&self.customer, "Customer")?;
        require_non_empty(&self.plan, "Plan")?;
        if self.end_date < self.start_date {
            return Err("End date is before start date".into());
        }
        Ok(())
    }

    fn entity_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "customer_subscription"
    }

    fn element_name() -> &'static str {
        "Customer Subscription"
    }

    fn list_name() -> &'static str {
        "Customer Subscriptions"
    }

    fn id_prefix() -> &'static str {
        "CSUB"
    }
}

// ============================================================================
// List configuration
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomerSubscriptionField {
    Id,
    Customer,
    Plan,
    StartDate,
    EndDate,
    Status,
}

impl ListField for CustomerSubscriptionField {
    const ALL: &'static [Self] = &[
        Self::Id,
        Self::Customer,
        Self::Plan,
        Self::StartDate,
        Self::EndDate,
        Self::Status,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Customer => "customer",
            Self::Plan => "plan",
            Self::StartDate => "startDate",
            Self::EndDate => "endDate",
            Self::Status => "status",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Customer => "Customer",
            Self::Plan => "Plan",
            Self::StartDate => "Start Date",
            Self::EndDate => "End Date",
            Self::Status => "Status",
        }
    }
}

impl ListEntity for CustomerSubscription {
    type Field = CustomerSubscriptionField;

    const SEARCH_FIELDS: &'static [SearchField<CustomerSubscriptionField>] = &[
        SearchField::text(CustomerSubscriptionField::Customer),
        SearchField::text(CustomerSubscriptionField::Id),
        SearchField::text(CustomerSubscriptionField::Plan),
    ];

    const FILTER_FIELDS: &'static [CustomerSubscriptionField] =
        &[CustomerSubscriptionField::Status];

    const DEFAULT_SORT: SortConfig<CustomerSubscriptionField> =
        SortConfig::ascending(CustomerSubscriptionField::Id);

    fn field_value(&self, field: CustomerSubscriptionField) -> Option<FieldValue> {
        let value = match field {
            CustomerSubscriptionField::Id => FieldValue::from(self.id.as_str()),
            CustomerSubscriptionField::Customer => FieldValue::from(self.customer.as_str()),
            CustomerSubscriptionField::Plan => FieldValue::from(self.plan.as_str()),
            CustomerSubscriptionField::StartDate => FieldValue::from(self.start_date),
            CustomerSubscriptionField::EndDate => FieldValue::from(self.end_date),
            CustomerSubscriptionField::Status => FieldValue::from(self.status.as_str()),
        };
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::ymd;

    fn sub() -> CustomerSubscription {
        CustomerSubscription {
            id: "CSUB006".into(),
            customer: "Kavya Nair".into(),
            plan: "Office Pack".into(),
            start_date: ymd(2023, 10, 1),
            end_date: ymd(2023, 10, 15),
            status: CustomerSubscriptionStatus::Active,
        }
    }

    #[test]
    fn test_status_on() {
        let s = sub();
        assert_eq!(s.status_on(ymd(2023, 10, 1)), CustomerSubscriptionStatus::Active);
        assert_eq!(s.status_on(ymd(2023, 10, 8)), CustomerSubscriptionStatus::ExpiringSoon);
        assert_eq!(s.status_on(ymd(2023, 10, 15)), CustomerSubscriptionStatus::ExpiringSoon);
        assert_eq!(s.status_on(ymd(2023, 10, 16)), CustomerSubscriptionStatus::Expired);
        assert_eq!(s.refreshed(ymd(2023, 11, 1)).status, CustomerSubscriptionStatus::Expired);
    }

    #[test]
    fn test_status_serde_name() {
        let json = serde_json::to_string(&CustomerSubscriptionStatus::ExpiringSoon).unwrap();
        assert_eq!(json, "\"Expiring Soon\"");
    }
}
