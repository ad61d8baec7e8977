use crate::domain::common::validation::{require_non_empty, validate_email, validate_phone};
use crate::domain::common::{ActivityStatus, Record};
use crate::shared::list_query::{FieldValue, ListEntity, ListField, SearchField, SortConfig};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Record
// ============================================================================

/// Клиент службы доставки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,

    #[serde(rename = "joinDate")]
    pub join_date: NaiveDate,

    pub status: ActivityStatus,
}

impl Customer {
    /// Создать клиента из формы; дата регистрации проставляется вызывающим
    pub fn new_for_insert(id: String, dto: &CustomerDto, join_date: NaiveDate) -> Self {
        Self {
            id,
            name: dto.name.clone(),
            email: dto.email.clone(),
            phone: dto.phone.clone(),
            address: dto.address.clone(),
            join_date,
            status: dto.status,
        }
    }

    /// Обновить данные из DTO (ключ и дата регистрации не меняются)
    pub fn update(&mut self, dto: &CustomerDto) {
        self.name = dto.name.clone();
        self.email = dto.email.clone();
        self.phone = dto.phone.clone();
        self.address = dto.address.clone();
        self.status = dto.status;
    }
}

impl Record for Customer {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn validate(&self) -> Result<(), String> {
        require_non_empty(&self.id, "ID")?;
        require_non_empty(&self.name, "Name")?;
        validate_email(&self.email)?;
        validate_phone(&self.phone)?;
        Ok(())
    }

    fn entity_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "customer"
    }

    fn element_name() -> &'static str {
        "Customer"
    }

    fn list_name() -> &'static str {
        "Customers"
    }

    fn id_prefix() -> &'static str {
        "CUST"
    }
}

// ============================================================================
// List configuration
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomerField {
    Id,
    Name,
    Email,
    Phone,
    Address,
    JoinDate,
    Status,
}

impl ListField for CustomerField {
    const ALL: &'static [Self] = &[
        Self::Id,
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Address,
        Self::JoinDate,
        Self::Status,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::JoinDate => "joinDate",
            Self::Status => "status",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Address => "Address",
            Self::JoinDate => "Join Date",
            Self::Status => "Status",
        }
    }
}

impl ListEntity for Customer {
    type Field = CustomerField;

    const SEARCH_FIELDS: &'static [SearchField<CustomerField>] = &[
        SearchField::text(CustomerField::Name),
        SearchField::text(CustomerField::Email),
        SearchField::verbatim(CustomerField::Phone),
        SearchField::text(CustomerField::Id),
    ];

    const FILTER_FIELDS: &'static [CustomerField] = &[CustomerField::Status];

    const DEFAULT_SORT: SortConfig<CustomerField> = SortConfig::ascending(CustomerField::Id);

    fn field_value(&self, field: CustomerField) -> Option<FieldValue> {
        let value = match field {
            CustomerField::Id => FieldValue::from(self.id.as_str()),
            CustomerField::Name => FieldValue::from(self.name.as_str()),
            CustomerField::Email => FieldValue::from(self.email.as_str()),
            CustomerField::Phone => FieldValue::from(self.phone.as_str()),
            CustomerField::Address => FieldValue::from(self.address.as_str()),
            CustomerField::JoinDate => FieldValue::from(self.join_date),
            CustomerField::Status => FieldValue::from(self.status.as_str()),
        };
        Some(value)
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления клиента
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerDto {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub status: ActivityStatus,
}

/// Форма редактирования заполняется из существующей записи
impl From<&Customer> for CustomerDto {
    fn from(customer: &Customer) -> Self {
        Self {
            name: customer.name.clone(),
            email: customer.email.clone(),
            phone: customer.phone.clone(),
            address: customer.address.clone(),
            status: customer.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::ymd;

    fn dto() -> CustomerDto {
        CustomerDto {
            name: "Kavya Nair".into(),
            email: "kavya.nair@example.com".into(),
            phone: "9123456780".into(),
            address: "12 Marine Drive, Kochi".into(),
            status: ActivityStatus::Active,
        }
    }

    #[test]
    fn test_new_for_insert_and_validate() {
        let c = Customer::new_for_insert("CUST011".into(), &dto(), ymd(2024, 1, 2));
        assert!(c.validate().is_ok());
        assert_eq!(c.id_number(), Some(11));
        assert_eq!(Customer::full_name(), "a001_customer");
    }

    #[test]
    fn test_validate_rejects_bad_email() {
        let mut d = dto();
        d.email = "kavya".into();
        let c = Customer::new_for_insert("CUST011".into(), &d, ymd(2024, 1, 2));
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_json_shape() {
        let c = Customer::new_for_insert("CUST011".into(), &dto(), ymd(2024, 1, 2));
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["joinDate"], "2024-01-02");
        assert_eq!(json["status"], "Active");
    }

    #[test]
    fn test_dto_from_record_round_trip() {
        let mut c = Customer::new_for_insert("CUST011".into(), &dto(), ymd(2024, 1, 2));
        let mut form = CustomerDto::from(&c);
        assert_eq!(form.name, "Kavya Nair");
        form.status = ActivityStatus::Inactive;
        c.update(&form);
        assert_eq!(c.status, ActivityStatus::Inactive);
        assert_eq!(c.join_date, ymd(2024, 1, 2));
    }
}
