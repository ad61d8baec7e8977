use crate::domain::common::validation::{require_non_empty, require_non_negative};
use crate::domain::common::Record;
use crate::shared::list_query::{FieldValue, ListEntity, ListField, SearchField, SortConfig};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Акция без ограничения по товарам
pub const ALL_PRODUCTS: &str = "All Products";

/// Варианты области действия в форме новой акции
pub const OFFER_SCOPES: [&str; 3] = [ALL_PRODUCTS, "Selected Products", "Subscription Plans"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DiscountType {
    #[default]
    Percentage,
    Fixed,
}

impl DiscountType {
    pub const ALL: [DiscountType; 2] = [Self::Percentage, Self::Fixed];

    pub fn from_str_opt(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Percentage => "Percentage",
            Self::Fixed => "Fixed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OfferStatus {
    #[default]
    Active,
    Expired,
    Scheduled,
}

impl OfferStatus {
    pub const ALL: [OfferStatus; 3] = [Self::Active, Self::Expired, Self::Scheduled];

    pub fn from_str_opt(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|st| st.as_str() == s)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Expired => "Expired",
            Self::Scheduled => "Scheduled",
        }
    }
}

// ============================================================================
// Record
// ============================================================================

/// Акция / скидка
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub id: String,
    pub title: String,
    pub description: String,

    #[serde(rename = "discountType")]
    pub discount_type: DiscountType,

    /// Процент или сумма в ₹, в зависимости от типа
    #[serde(rename = "discountValue")]
    pub discount_value: f64,

    /// Минимальная сумма заказа, 0 = без ограничения
    #[serde(rename = "minOrderValue")]
    pub min_order_value: f64,

    #[serde(rename = "startDate")]
    pub start_date: NaiveDate,

    #[serde(rename = "endDate")]
    pub end_date: NaiveDate,

    pub status: OfferStatus,

    /// Лимит использований, 0 = без лимита
    #[serde(rename = "usageLimit")]
    pub usage_limit: u32,

    #[serde(rename = "usageCount")]
    pub usage_count: u32,

    #[serde(rename = "applicableProducts")]
    pub applicable_products: Vec<String>,
}

impl Offer {
    /// Новая акция: счетчик использований с нуля
    pub fn new_for_insert(id: String, dto: &OfferDto) -> Self {
        Self {
            id,
            title: dto.title.clone(),
            description: dto.description.clone(),
            discount_type: dto.discount_type,
            discount_value: dto.discount_value,
            min_order_value: dto.min_order_value,
            start_date: dto.start_date,
            end_date: dto.end_date,
            status: dto.status,
            usage_limit: dto.usage_limit,
            usage_count: 0,
            applicable_products: dto.applicable_products.clone(),
        }
    }

    /// Скидка в ₹ для заказа на сумму `order_value`
    pub fn discount_for(&self, order_value: f64) -> f64 {
        if order_value < self.min_order_value {
            return 0.0;
        }
        match self.discount_type {
            DiscountType::Percentage => order_value * self.discount_value / 100.0,
            DiscountType::Fixed => self.discount_value.min(order_value),
        }
    }

    /// Статус по датам действия на указанный день
    pub fn status_on(&self, day: NaiveDate) -> OfferStatus {
        if day < self.start_date {
            OfferStatus::Scheduled
        } else if day > self.end_date {
            OfferStatus::Expired
        } else {
            OfferStatus::Active
        }
    }

    /// "10%" или "₹50"
    pub fn discount_label(&self) -> String {
        let value = FieldValue::from(self.discount_value).as_text();
        match self.discount_type {
            DiscountType::Percentage => format!("{}%", value),
            DiscountType::Fixed => format!("₹{}", value),
        }
    }

    /// "45 / 1" при лимите, иначе просто "120"
    pub fn usage_label(&self) -> String {
        if self.usage_limit > 0 {
            format!("{} / {}", self.usage_count, self.usage_limit)
        } else {
            self.usage_count.to_string()
        }
    }
}

impl Record for Offer {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn validate(&self) -> Result<(), String> {
        require_non_empty(&self.id, "ID")?;
        require_non_empty(&self.title, "Title")?;
        require_non_negative(self.discount_value, "Discount")?;
        require_non_negative(self.min_order_value, "Minimum order value")?;
        if self.discount_type == DiscountType::Percentage && self.discount_value > 100.0 {
            return Err("Percentage discount cannot exceed 100".into());
        }
        if self.end_date < self.start_date {
            return Err("End date is before start date".into());
        }
        Ok(())
    }

    fn entity_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "offer"
    }

    fn element_name() -> &'static str {
        "Offer"
    }

    fn list_name() -> &'static str {
        "Offers & Discounts"
    }

    fn id_prefix() -> &'static str {
        "OFF"
    }
}

// ============================================================================
// List configuration
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OfferField {
    Id,
    Title,
    Description,
    DiscountType,
    DiscountValue,
    MinOrderValue,
    StartDate,
    EndDate,
    Status,
    UsageLimit,
    UsageCount,
}

impl ListField for OfferField {
    const ALL: &'static [Self] = &[
        Self::Id,
        Self::Title,
        Self::Description,
        Self::DiscountType,
        Self::DiscountValue,
        Self::MinOrderValue,
        Self::StartDate,
        Self::EndDate,
        Self::Status,
        Self::UsageLimit,
        Self::UsageCount,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::Description => "description",
            Self::DiscountType => "discountType",
            Self::DiscountValue => "discountValue",
            Self::MinOrderValue => "minOrderValue",
            Self::StartDate => "startDate",
            Self::EndDate => "endDate",
            Self::Status => "status",
            Self::UsageLimit => "usageLimit",
            Self::UsageCount => "usageCount",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Title => "Title",
            Self::Description => "Description",
            Self::DiscountType => "Type",
            Self::DiscountValue => "Discount",
            Self::MinOrderValue => "Min. Order",
            Self::StartDate => "Starts",
            Self::EndDate => "Ends",
            Self::Status => "Status",
            Self::UsageLimit => "Limit",
            Self::UsageCount => "Usage",
        }
    }
}

impl ListEntity for Offer {
    type Field = OfferField;

    const SEARCH_FIELDS: &'static [SearchField<OfferField>] = &[
        SearchField::text(OfferField::Title),
        SearchField::text(OfferField::Id),
        SearchField::text(OfferField::Description),
    ];

    const FILTER_FIELDS: &'static [OfferField] = &[OfferField::Status];

    const DEFAULT_SORT: SortConfig<OfferField> = SortConfig::ascending(OfferField::Id);

    fn field_value(&self, field: OfferField) -> Option<FieldValue> {
        let value = match field {
            OfferField::Id => FieldValue::from(self.id.as_str()),
            OfferField::Title => FieldValue::from(self.title.as_str()),
            OfferField::Description => FieldValue::from(self.description.as_str()),
            OfferField::DiscountType => FieldValue::from(self.discount_type.as_str()),
            OfferField::DiscountValue => FieldValue::from(self.discount_value),
            OfferField::MinOrderValue => FieldValue::from(self.min_order_value),
            OfferField::StartDate => FieldValue::from(self.start_date),
            OfferField::EndDate => FieldValue::from(self.end_date),
            OfferField::Status => FieldValue::from(self.status.as_str()),
            OfferField::UsageLimit => FieldValue::from(self.usage_limit),
            OfferField::UsageCount => FieldValue::from(self.usage_count),
        };
        Some(value)
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO формы создания акции
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferDto {
    pub title: String,
    pub description: String,

    #[serde(rename = "discountType")]
    pub discount_type: DiscountType,

    #[serde(rename = "discountValue")]
    pub discount_value: f64,

    #[serde(rename = "minOrderValue")]
    pub min_order_value: f64,

    #[serde(rename = "startDate")]
    pub start_date: NaiveDate,

    #[serde(rename = "endDate")]
    pub end_date: NaiveDate,

    pub status: OfferStatus,

    #[serde(rename = "usageLimit")]
    pub usage_limit: u32,

    #[serde(rename = "applicableProducts")]
    pub applicable_products: Vec<String>,
}

/// Срок новой акции по умолчанию, дней
pub const DEFAULT_OFFER_DAYS: i64 = 30;

impl OfferDto {
    /// Пустая форма: акция на все товары, действует с `start`
    pub fn starting(start: NaiveDate) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            discount_type: DiscountType::Percentage,
            discount_value: 0.0,
            min_order_value: 0.0,
            start_date: start,
            end_date: start + chrono::Duration::days(DEFAULT_OFFER_DAYS),
            status: OfferStatus::Active,
            usage_limit: 0,
            applicable_products: vec![ALL_PRODUCTS.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::ymd;

    fn dto(discount_type: DiscountType, value: f64, min: f64) -> OfferDto {
        OfferDto {
            title: "Monsoon Sale".into(),
            description: "Seasonal discount".into(),
            discount_type,
            discount_value: value,
            min_order_value: min,
            start_date: ymd(2023, 7, 1),
            end_date: ymd(2023, 7, 31),
            status: OfferStatus::Scheduled,
            usage_limit: 0,
            applicable_products: vec!["All Products".into()],
        }
    }

    #[test]
    fn test_discount_for() {
        let pct = Offer::new_for_insert("OFF006".into(), &dto(DiscountType::Percentage, 20.0, 1000.0));
        assert_eq!(pct.discount_for(999.0), 0.0);
        assert_eq!(pct.discount_for(1500.0), 300.0);

        let fixed = Offer::new_for_insert("OFF007".into(), &dto(DiscountType::Fixed, 100.0, 0.0));
        assert_eq!(fixed.discount_for(60.0), 60.0);
        assert_eq!(fixed.discount_for(600.0), 100.0);
    }

    #[test]
    fn test_status_on() {
        let offer = Offer::new_for_insert("OFF006".into(), &dto(DiscountType::Percentage, 10.0, 0.0));
        assert_eq!(offer.status_on(ymd(2023, 6, 30)), OfferStatus::Scheduled);
        assert_eq!(offer.status_on(ymd(2023, 7, 31)), OfferStatus::Active);
        assert_eq!(offer.status_on(ymd(2023, 8, 1)), OfferStatus::Expired);
    }

    #[test]
    fn test_labels() {
        let mut offer = Offer::new_for_insert("OFF006".into(), &dto(DiscountType::Fixed, 50.0, 500.0));
        assert_eq!(offer.discount_label(), "₹50");
        assert_eq!(offer.usage_label(), "0");
        offer.usage_limit = 1;
        offer.usage_count = 45;
        assert_eq!(offer.usage_label(), "45 / 1");
    }

    #[test]
    fn test_validate() {
        let offer = Offer::new_for_insert("OFF006".into(), &dto(DiscountType::Percentage, 120.0, 0.0));
        assert!(offer.validate().is_err());

        let mut d = dto(DiscountType::Percentage, 10.0, 0.0);
        d.end_date = ymd(2023, 6, 1);
        assert!(Offer::new_for_insert("OFF006".into(), &d).validate().is_err());
    }

    #[test]
    fn test_blank_form_needs_title() {
        let form = OfferDto::starting(ymd(2023, 7, 1));
        assert_eq!(form.end_date, ymd(2023, 7, 31));
        let offer = Offer::new_for_insert("OFF006".into(), &form);
        assert_eq!(offer.validate(), Err("Title must not be empty".to_string()));
    }
}
