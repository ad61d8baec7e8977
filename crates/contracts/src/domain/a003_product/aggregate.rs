use crate::domain::common::validation::{require_non_empty, require_non_negative};
use crate::domain::common::Record;
use crate::shared::list_query::{FieldValue, ListEntity, ListField, SearchField, SortConfig};
use serde::{Deserialize, Serialize};

/// Остаток ниже этого значения считается низким
pub const LOW_STOCK_THRESHOLD: u32 = 100;

/// Категории каталога для формы нового товара
pub const PRODUCT_CATEGORIES: [&str; 5] = ["Milk", "Cheese", "Yogurt", "Dairy Fat", "Beverage"];

// ============================================================================
// Record
// ============================================================================

/// Товар каталога
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Категория: Milk, Cheese, Yogurt, Dairy Fat, Beverage
    pub category: String,
    /// Цена за единицу, ₹
    pub price: f64,
    pub stock: u32,
    /// Фасовка ("500ml Packet")
    pub unit: String,
}

impl Product {
    pub fn new_for_insert(id: String, dto: &ProductDto) -> Self {
        Self {
            id,
            name: dto.name.clone(),
            category: dto.category.clone(),
            price: dto.price,
            stock: dto.stock,
            unit: dto.unit.clone(),
        }
    }

    /// Копия с новым остатком
    pub fn with_stock(&self, stock: u32) -> Self {
        Self {
            stock,
            ..self.clone()
        }
    }

    /// Остаток, сдвинутый на `delta`; не уходит ниже нуля
    pub fn with_stock_delta(&self, delta: i64) -> Self {
        let stock = (i64::from(self.stock) + delta).clamp(0, i64::from(u32::MAX));
        self.with_stock(stock as u32)
    }

    pub fn is_low_stock(&self) -> bool {
        self.stock < LOW_STOCK_THRESHOLD
    }

    /// Стоимость остатка, ₹
    pub fn stock_value(&self) -> f64 {
        self.price * f64::from(self.stock)
    }
}

impl Record for Product {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn validate(&self) -> Result<(), String> {
        require_non_empty(&self.id, "ID")?;
        require_non_empty(&self.name, "Name")?;
        require_non_empty(&self.category, "Category")?;
        require_non_negative(self.price, "Price")?;
        Ok(())
    }

    fn entity_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "product"
    }

    fn element_name() -> &'static str {
        "Product"
    }

    fn list_name() -> &'static str {
        "Products"
    }

    fn id_prefix() -> &'static str {
        "PRD"
    }
}

// ============================================================================
// List configuration
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    Id,
    Name,
    Category,
    Price,
    Stock,
    Unit,
}

impl ListField for ProductField {
    const ALL: &'static [Self] = &[
        Self::Id,
        Self::Name,
        Self::Category,
        Self::Price,
        Self::Stock,
        Self::Unit,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Category => "category",
            Self::Price => "price",
            Self::Stock => "stock",
            Self::Unit => "unit",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "Name",
            Self::Category => "Category",
            Self::Price => "Price",
            Self::Stock => "Stock",
            Self::Unit => "Unit",
        }
    }
}

impl ListEntity for Product {
    type Field = ProductField;

    const SEARCH_FIELDS: &'static [SearchField<ProductField>] = &[
        SearchField::text(ProductField::Name),
        SearchField::text(ProductField::Id),
    ];

    const FILTER_FIELDS: &'static [ProductField] = &[ProductField::Category];

    const DEFAULT_SORT: SortConfig<ProductField> = SortConfig::ascending(ProductField::Id);

    fn field_value(&self, field: ProductField) -> Option<FieldValue> {
        let value = match field {
            ProductField::Id => FieldValue::from(self.id.as_str()),
            ProductField::Name => FieldValue::from(self.name.as_str()),
            ProductField::Category => FieldValue::from(self.category.as_str()),
            ProductField::Price => FieldValue::from(self.price),
            ProductField::Stock => FieldValue::from(self.stock),
            ProductField::Unit => FieldValue::from(self.unit.as_str()),
        };
        Some(value)
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductDto {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: u32,
    pub unit: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paneer() -> Product {
        Product::new_for_insert(
            "PRD003".into(),
            &ProductDto {
                name: "Paneer".into(),
                category: "Cheese".into(),
                price: 80.0,
                stock: 150,
                unit: "200g Pack".into(),
            },
        )
    }

    #[test]
    fn test_stock_delta_clamps_at_zero() {
        let p = paneer();
        assert_eq!(p.with_stock_delta(-10).stock, 140);
        assert_eq!(p.with_stock_delta(-1000).stock, 0);
        assert_eq!(p.with_stock_delta(5).stock, 155);
    }

    #[test]
    fn test_low_stock_and_value() {
        let p = paneer();
        assert!(!p.is_low_stock());
        assert!(p.with_stock(99).is_low_stock());
        assert_eq!(p.stock_value(), 12000.0);
    }

    #[test]
    fn test_validate_price() {
        let mut p = paneer();
        p.price = -5.0;
        assert!(p.validate().is_err());
    }
}
