use contracts::domain::a002_delivery_boy::{DeliveryBoy, DeliveryBoyField};
use contracts::shared::list_query::ViewQuery;
use leptos::prelude::*;

pub fn create_state() -> RwSignal<ViewQuery<DeliveryBoyField>> {
    RwSignal::new(ViewQuery::for_entity::<DeliveryBoy>())
}
