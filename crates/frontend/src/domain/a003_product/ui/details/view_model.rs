use crate::shared::form_utils::{parse_amount_input, parse_count_input};
use crate::shared::list_utils::mutate_collection;
use contracts::domain::a003_product::{Product, ProductDto, PRODUCT_CATEGORIES};
use contracts::shared::collection::{Collection, CollectionResult};
use leptos::prelude::*;

/// Новый товар в конец каталога под следующим ключом
pub fn add_product(collection: &mut Collection<Product>, dto: &ProductDto) -> CollectionResult<()> {
    let id = collection.next_id();
    collection.insert(Product::new_for_insert(id, dto))
}

/// Форма добавления товара; цена и остаток вводятся текстом
#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub form: RwSignal<ProductDto>,
    pub price: RwSignal<String>,
    pub stock: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    items: RwSignal<Collection<Product>>,
}

impl ProductDetailsViewModel {
    pub fn new(items: RwSignal<Collection<Product>>) -> Self {
        let dto = ProductDto {
            category: PRODUCT_CATEGORIES[0].to_string(),
            ..ProductDto::default()
        };
        Self {
            form: RwSignal::new(dto),
            price: RwSignal::new(String::new()),
            stock: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            items,
        }
    }

    /// DTO с разобранными числовыми полями
    fn parsed_form(&self) -> Result<ProductDto, String> {
        let mut dto = self.form.get_untracked();
        dto.price = self.price.with_untracked(|raw| parse_amount_input(raw, "price"))?;
        dto.stock = self.stock.with_untracked(|raw| parse_count_input(raw, "stock"))?;
        Ok(dto)
    }

    pub fn save_command(&self) -> bool {
        let result = self
            .parsed_form()
            .and_then(|dto| mutate_collection(self.items, "add", |c| add_product(c, &dto)));
        let saved = result.is_ok();
        self.error.set(result.err());
        saved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_product::{mock_products, ProductField};
    use contracts::shared::list_query::{select, ViewQuery};

    #[test]
    fn test_added_product_sorts_by_price() {
        let mut products = Collection::from_items(mock_products());
        let dto = ProductDto {
            name: "Lassi".into(),
            category: "Beverage".into(),
            price: 35.0,
            stock: 60,
            unit: "200ml Bottle".into(),
        };
        add_product(&mut products, &dto).unwrap();
        assert_eq!(products.items().last().map(|p| p.id.as_str()), Some("PRD011"));

        let query = ViewQuery::for_entity::<Product>()
            .with_filter(ProductField::Category, "Beverage")
            .with_sort_requested(ProductField::Price);
        let ids: Vec<&str> = select(products.items(), &query)
            .into_iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["PRD008", "PRD011"]);
        assert!(products.get("PRD011").unwrap().is_low_stock());
    }

    #[test]
    fn test_nameless_product_rejected() {
        let mut products = Collection::from_items(mock_products());
        let dto = ProductDto {
            category: "Milk".into(),
            ..ProductDto::default()
        };
        let err = add_product(&mut products, &dto).unwrap_err();
        assert_eq!(err.to_string(), "validation failed: Name must not be empty");
        assert_eq!(products.len(), 10);
    }
}
