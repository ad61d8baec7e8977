use contracts::domain::a005_offer::{Offer, OfferField};
use contracts::shared::list_query::ViewQuery;
use leptos::prelude::*;

pub fn create_state() -> RwSignal<ViewQuery<OfferField>> {
    RwSignal::new(ViewQuery::for_entity::<Offer>())
}
