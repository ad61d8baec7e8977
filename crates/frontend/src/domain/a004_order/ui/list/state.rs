use contracts::domain::a004_order::{Order, OrderField};
use contracts::shared::list_query::ViewQuery;
use leptos::prelude::*;

pub fn create_state() -> RwSignal<ViewQuery<OrderField>> {
    RwSignal::new(ViewQuery::for_entity::<Order>())
}
