use contracts::domain::a001_customer::{Customer, CustomerField};
use contracts::shared::list_query::ViewQuery;
use leptos::prelude::*;

pub type CustomerListState = ViewQuery<CustomerField>;

/// Состояние экрана живет, пока экран открыт: по умолчанию сортировка по ключу
pub fn create_state() -> RwSignal<CustomerListState> {
    RwSignal::new(ViewQuery::for_entity::<Customer>())
}
