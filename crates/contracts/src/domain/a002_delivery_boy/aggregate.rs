use crate::domain::common::validation::{require_non_empty, validate_email, validate_phone};
use crate::domain::common::{ActivityStatus, Record};
use crate::shared::list_query::{FieldValue, ListEntity, ListField, SearchField, SortConfig};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Номер для транспорта без регистрации
pub const NO_VEHICLE_NUMBER: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VehicleType {
    #[default]
    Motorcycle,
    Scooter,
    Bicycle,
}

impl VehicleType {
    pub const ALL: [VehicleType; 3] = [Self::Motorcycle, Self::Scooter, Self::Bicycle];

    pub fn from_str_opt(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Motorcycle => "Motorcycle",
            Self::Scooter => "Scooter",
            Self::Bicycle => "Bicycle",
        }
    }

    /// Нужен ли регистрационный номер
    pub fn is_registered(&self) -> bool {
        !matches!(self, Self::Bicycle)
    }
}

// ============================================================================
// Record
// ============================================================================

/// Курьер
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryBoy {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,

    #[serde(rename = "joinDate")]
    pub join_date: NaiveDate,

    pub status: ActivityStatus,

    /// Маршрут доставки (свободный текст, фильтруется точным совпадением)
    pub route: String,

    #[serde(rename = "vehicleType")]
    pub vehicle_type: VehicleType,

    #[serde(rename = "vehicleNumber")]
    pub vehicle_number: String,
}

impl DeliveryBoy {
    pub fn new_for_insert(id: String, dto: &DeliveryBoyDto, join_date: NaiveDate) -> Self {
        let mut boy = Self {
            id,
            name: String::new(),
            phone: String::new(),
            email: String::new(),
            address: String::new(),
            join_date,
            status: ActivityStatus::Active,
            route: String::new(),
            vehicle_type: VehicleType::default(),
            vehicle_number: String::new(),
        };
        boy.update(dto);
        boy
    }

    /// Обновить данные из DTO; для велосипеда номер всегда "N/A"
    pub fn update(&mut self, dto: &DeliveryBoyDto) {
        self.name = dto.name.clone();
        self.phone = dto.phone.clone();
        self.email = dto.email.clone();
        self.address = dto.address.clone();
        self.status = dto.status;
        self.route = dto.route.clone();
        self.vehicle_type = dto.vehicle_type;
        self.vehicle_number = if dto.vehicle_type.is_registered() {
            dto.vehicle_number.trim().to_string()
        } else {
            NO_VEHICLE_NUMBER.to_string()
        };
    }
}

impl Record for DeliveryBoy {
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
        require_non_empty(&self.route, "Route")?;
        if self.vehicle_type.is_registered()
            && (self.vehicle_number.trim().is_empty() || self.vehicle_number == NO_VEHICLE_NUMBER)
        {
            return Err(format!(
                "Vehicle {} requires a registration number",
                self.vehicle_type.as_str()
            ));
        }
        Ok(())
    }

    fn entity_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "delivery_boy"
    }

    fn element_name() -> &'static str {
        "Delivery Boy"
    }

    fn list_name() -> &'static str {
        "Delivery Boys"
    }

    fn id_prefix() -> &'static str {
        "DEL"
    }
}

// ============================================================================
// List configuration
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeliveryBoyField {
    Id,
    Name,
    Phone,
    Email,
    Address,
    JoinDate,
    Status,
    Route,
    VehicleType,
    VehicleNumber,
}

impl ListField for DeliveryBoyField {
    const ALL: &'static [Self] = &[
        Self::Id,
        Self::Name,
        Self::Phone,
        Self::Email,
        Self::Address,
        Self::JoinDate,
        Self::Status,
        Self::Route,
        Self::VehicleType,
        Self::VehicleNumber,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Address => "address",
            Self::JoinDate => "joinDate",
            Self::Status => "status",
            Self::Route => "route",
            Self::VehicleType => "vehicleType",
            Self::VehicleNumber => "vehicleNumber",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "Name",
            Self::Phone => "Phone",
            Self::Email => "Email",
            Self::Address => "Address",
            Self::JoinDate => "Join Date",
            Self::Status => "Status",
            Self::Route => "Route",
            Self::VehicleType => "Vehicle",
            Self::VehicleNumber => "Vehicle No.",
        }
    }
}

impl ListEntity for DeliveryBoy {
    type Field = DeliveryBoyField;

    const SEARCH_FIELDS: &'static [SearchField<DeliveryBoyField>] = &[
        SearchField::text(DeliveryBoyField::Name),
        SearchField::text(DeliveryBoyField::Email),
        SearchField::verbatim(DeliveryBoyField::Phone),
        SearchField::text(DeliveryBoyField::Id),
    ];

    const FILTER_FIELDS: &'static [DeliveryBoyField] =
        &[DeliveryBoyField::Status, DeliveryBoyField::Route];

    const DEFAULT_SORT: SortConfig<DeliveryBoyField> = SortConfig::ascending(DeliveryBoyField::Id);

    fn field_value(&self, field: DeliveryBoyField) -> Option<FieldValue> {
        let value = match field {
            DeliveryBoyField::Id => FieldValue::from(self.id.as_str()),
            DeliveryBoyField::Name => FieldValue::from(self.name.as_str()),
            DeliveryBoyField::Phone => FieldValue::from(self.phone.as_str()),
            DeliveryBoyField::Email => FieldValue::from(self.email.as_str()),
            DeliveryBoyField::Address => FieldValue::from(self.address.as_str()),
            DeliveryBoyField::JoinDate => FieldValue::from(self.join_date),
            DeliveryBoyField::Status => FieldValue::from(self.status.as_str()),
            DeliveryBoyField::Route => FieldValue::from(self.route.as_str()),
            DeliveryBoyField::VehicleType => FieldValue::from(self.vehicle_type.as_str()),
            DeliveryBoyField::VehicleNumber => FieldValue::from(self.vehicle_number.as_str()),
        };
        Some(value)
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления курьера
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeliveryBoyDto {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub status: ActivityStatus,
    pub route: String,

    #[serde(rename = "vehicleType")]
    pub vehicle_type: VehicleType,

    #[serde(rename = "vehicleNumber")]
    pub vehicle_number: String,
}

impl From<&DeliveryBoy> for DeliveryBoyDto {
    fn from(boy: &DeliveryBoy) -> Self {
        Self {
            name: boy.name.clone(),
            phone: boy.phone.clone(),
            email: boy.email.clone(),
            address: boy.address.clone(),
            status: boy.status,
            route: boy.route.clone(),
            vehicle_type: boy.vehicle_type,
            vehicle_number: boy.vehicle_number.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::ymd;

    fn dto(vehicle_type: VehicleType, number: &str) -> DeliveryBoyDto {
        DeliveryBoyDto {
            name: "Arjun Mehta".into(),
            phone: "9988776655".into(),
            email: "arjun.mehta@example.com".into(),
            address: "5 Civil Lines, Delhi".into(),
            status: ActivityStatus::Active,
            route: "Civil Lines".into(),
            vehicle_type,
            vehicle_number: number.into(),
        }
    }

    #[test]
    fn test_bicycle_gets_no_number() {
        let boy = DeliveryBoy::new_for_insert(
            "DEL009".into(),
            &dto(VehicleType::Bicycle, "DL-1-XX-0000"),
            ymd(2024, 2, 1),
        );
        assert_eq!(boy.vehicle_number, NO_VEHICLE_NUMBER);
        assert!(boy.validate().is_ok());
    }

    #[test]
    fn test_motorcycle_requires_number() {
        let boy = DeliveryBoy::new_for_insert(
            "DEL009".into(),
            &dto(VehicleType::Motorcycle, "  "),
            ymd(2024, 2, 1),
        );
        assert!(boy.validate().is_err());

        let boy = DeliveryBoy::new_for_insert(
            "DEL009".into(),
            &dto(VehicleType::Motorcycle, "DL-3S-ZZ-4321"),
            ymd(2024, 2, 1),
        );
        assert!(boy.validate().is_ok());
    }
}
