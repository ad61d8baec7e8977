pub mod state;

use self::state::{create_state, SubscriptionsTab};
use crate::domain::a007_customer_subscription::ui::list::{
    refresh_statuses, CustomerSubscriptionTable,
};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::{SortableHeaderCell, TableCellMoney};
use crate::shared::components::ui::StatusBadge;
use crate::shared::icons::icon;
use crate::shared::list_utils::{mutate_collection, shown_of_total, FilterSelect, SearchInput};
use contracts::domain::a006_subscription_plan::{
    mock_subscription_plans, SubscriptionPlan, SubscriptionPlanField,
};
use contracts::domain::a007_customer_subscription::{
    mock_customer_subscriptions, CustomerSubscriptionField,
};
use contracts::shared::collection::Collection;
use contracts::shared::list_query::apply;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

/// Экран подписок: вкладки "планы" и "подписки клиентов"
#[component]
#[allow(non_snake_case)]
pub fn SubscriptionsPage() -> impl IntoView {
    let state = create_state();
    let plans = RwSignal::new(Collection::from_items(mock_subscription_plans()));
    let subscriptions = RwSignal::new(Collection::from_items(mock_customer_subscriptions()));
    let (error, set_error) = signal::<Option<String>>(None);

    let plan_rows = Memo::new(move |_| {
        let query = state.with(|s| s.plans_query());
        plans.with(|c| apply(c.items(), &query))
    });
    let subscription_rows = Memo::new(move |_| {
        let query = state.with(|s| s.subscriptions_query());
        subscriptions.with(|c| apply(c.items(), &query))
    });

    let status_options = Signal::derive(move || state.with(|s| s.status_options()));

    let plans_sort = Signal::derive(move || state.with(|s| s.plans_sort));
    let on_plans_sort = Callback::new(move |field: SubscriptionPlanField| {
        state.update(|s| s.plans_sort = s.plans_sort.request(field));
    });
    let subscriptions_sort = Signal::derive(move || state.with(|s| s.subscriptions_sort));
    let on_subscriptions_sort = Callback::new(move |field: CustomerSubscriptionField| {
        state.update(|s| s.subscriptions_sort = s.subscriptions_sort.request(field));
    });

    let subtitle = Signal::derive(move || {
        let text = match state.with(|s| s.tab) {
            SubscriptionsTab::Plans => {
                shown_of_total(plan_rows.with(|r| r.len()), plans.with(|c| c.len()))
            }
            SubscriptionsTab::Customers => shown_of_total(
                subscription_rows.with(|r| r.len()),
                subscriptions.with(|c| c.len()),
            ),
        };
        Some(text)
    });

    let update_statuses = move |_: leptos::ev::MouseEvent| {
        let result = mutate_collection(subscriptions, "refresh statuses", refresh_statuses);
        set_error.set(result.err());
    };

    let tab_button = move |tab: SubscriptionsTab, label: &'static str| {
        view! {
            <button
                class="tabs__item"
                class:tabs__item--active=move || state.with(|s| s.tab == tab)
                on:click=move |_| state.update(|s| s.tab = tab)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="content">
            <PageHeader title="Subscriptions" subtitle=subtitle>
                <Button appearance=ButtonAppearance::Secondary on_click=update_statuses>
                    {icon("refresh")}
                    "Update statuses"
                </Button>
            </PageHeader>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="tabs">
                {tab_button(SubscriptionsTab::Plans, "Subscription Plans")}
                {tab_button(SubscriptionsTab::Customers, "Customer Subscriptions")}
            </div>

            <div class="filter-bar">
                <SearchInput
                    value=Signal::derive(move || state.with(|s| s.search.clone()))
                    on_change=Callback::new(move |v: String| state.update(|s| s.search = v))
                    placeholder="Search subscriptions..."
                />
                <FilterSelect
                    all_label="All Status"
                    options=status_options
                    value=Signal::derive(move || state.with(|s| s.status.clone()))
                    on_change=Callback::new(move |v: String| state.update(|s| s.status = v))
                />
            </div>

            {move || match state.with(|s| s.tab) {
                SubscriptionsTab::Plans => view! {
                    <div class="table-container">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <SortableHeaderCell field=SubscriptionPlanField::Id sort=plans_sort on_sort=on_plans_sort />
                                    <SortableHeaderCell field=SubscriptionPlanField::Name sort=plans_sort on_sort=on_plans_sort />
                                    <SortableHeaderCell field=SubscriptionPlanField::Duration sort=plans_sort on_sort=on_plans_sort />
                                    <SortableHeaderCell field=SubscriptionPlanField::Price sort=plans_sort on_sort=on_plans_sort align="right" />
                                    <th class="table__header-cell">{"Products"}</th>
                                    <SortableHeaderCell field=SubscriptionPlanField::Subscribers sort=plans_sort on_sort=on_plans_sort />
                                    <SortableHeaderCell field=SubscriptionPlanField::Status sort=plans_sort on_sort=on_plans_sort />
                                </tr>
                            </thead>
                            <tbody>
                                {move || plan_rows.get().into_iter().map(|row: SubscriptionPlan| view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{row.id}</td>
                                        <td class="table__cell">{row.name}</td>
                                        <td class="table__cell">{row.duration}</td>
                                        <TableCellMoney value=row.price />
                                        <td class="table__cell">{row.products.join(", ")}</td>
                                        <td class="table__cell">{row.subscribers}</td>
                                        <td class="table__cell">
                                            <StatusBadge status=row.status.as_str() />
                                        </td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                }.into_any(),
                SubscriptionsTab::Customers => view! {
                    <CustomerSubscriptionTable
                        rows=subscription_rows
                        sort=subscriptions_sort
                        on_sort=on_subscriptions_sort
                    />
                }.into_any(),
            }}
        </div>
    }
}
