use contracts::domain::a003_product::{Product, ProductField};
use contracts::shared::list_query::ViewQuery;
use leptos::prelude::*;

/// Шаг кнопок +/- в колонке остатка
pub const STOCK_STEP: i64 = 10;

pub fn create_state() -> RwSignal<ViewQuery<ProductField>> {
    RwSignal::new(ViewQuery::for_entity::<Product>())
}
