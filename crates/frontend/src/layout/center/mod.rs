//! Область содержимого: экран выбирается сигналом `AppGlobalContext::active`

use crate::dashboards::d001_overview::OverviewPage;
use crate::dashboards::d002_reports::ReportsPage;
use crate::domain::a001_customer::ui::list::CustomerList;
use crate::domain::a002_delivery_boy::ui::list::DeliveryBoyList;
use crate::domain::a003_product::ui::list::ProductList;
use crate::domain::a004_order::ui::list::OrderList;
use crate::domain::a005_offer::ui::list::OfferList;
use crate::domain::a006_subscription_plan::ui::list::SubscriptionsPage;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::system::settings::SettingsPage;
use leptos::prelude::*;

#[component]
pub fn Center() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div data-zone="center" class="app-content" style="flex: 1; overflow: auto;">
            {move || match ctx.active.get() {
                Page::Overview => view! { <OverviewPage /> }.into_any(),
                Page::Products => view! { <ProductList /> }.into_any(),
                Page::Orders => view! { <OrderList /> }.into_any(),
                Page::Customers => view! { <CustomerList /> }.into_any(),
                Page::DeliveryBoys => view! { <DeliveryBoyList /> }.into_any(),
                Page::Offers => view! { <OfferList /> }.into_any(),
                Page::Subscriptions => view! { <SubscriptionsPage /> }.into_any(),
                Page::Reports => view! { <ReportsPage /> }.into_any(),
                Page::Settings => view! { <SettingsPage /> }.into_any(),
            }}
        </div>
    }
}
