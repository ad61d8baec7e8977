pub mod state;

use self::state::create_state;
use crate::domain::a005_offer::ui::details::OfferDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::{format_rupees, SortableHeaderCell};
use crate::shared::components::ui::StatusBadge;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    confirm_delete, filter_select_options, mutate_collection, shown_of_total, FilterSelect, SearchInput,
};
use contracts::domain::a005_offer::{mock_offers, Offer, OfferField};
use contracts::domain::common::Record;
use contracts::shared::collection::{Collection, CollectionResult};
use contracts::shared::list_query::apply;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

/// Пересчитать статусы всех акций по датам действия на сегодня
fn refresh_statuses(c: &mut Collection<Offer>) -> CollectionResult<()> {
    let today = chrono::Local::now().date_naive();
    let ids: Vec<String> = c.items().iter().map(|o| o.id().to_string()).collect();
    for id in ids {
        c.modify(&id, |o| Offer {
            status: o.status_on(today),
            ..o.clone()
        })?;
    }
    Ok(())
}

#[component]
#[allow(non_snake_case)]
pub fn OfferList() -> impl IntoView {
    let state = create_state();
    let items = RwSignal::new(Collection::from_items(mock_offers()));
    let (error, set_error) = signal::<Option<String>>(None);
    let form_open = RwSignal::new(false);

    let rows = Memo::new(move |_| {
        let query = state.get();
        items.with(|c| apply(c.items(), &query))
    });
    let status_options = filter_select_options(items, state, OfferField::Status);

    let sort = Signal::derive(move || state.with(|q| q.sort()));
    let on_sort = Callback::new(move |field: OfferField| {
        state.update(|q| *q = q.with_sort_requested(field));
    });

    let handle_delete = move |id: String| {
        if !confirm_delete("offer") {
            return;
        }
        let result = mutate_collection(items, &format!("delete {}", id), |c| {
            c.remove(&id).map(|_| ())
        });
        set_error.set(result.err());
    };

    let update_statuses = move |_: leptos::ev::MouseEvent| {
        let result = mutate_collection(items, "refresh statuses", refresh_statuses);
        set_error.set(result.err());
    };

    let open_new = move |_: leptos::ev::MouseEvent| form_open.set(true);
    let close_form = Callback::new(move |_: ()| form_open.set(false));

    let subtitle = Signal::derive(move || {
        Some(shown_of_total(rows.with(|r| r.len()), items.with(|c| c.len())))
    });

    view! {
        <div class="content">
            <PageHeader title="Offers & Discounts" subtitle=subtitle>
                <Button appearance=ButtonAppearance::Primary on_click=open_new>
                    {icon("plus")}
                    "Create New Offer"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=update_statuses>
                    {icon("refresh")}
                    "Update statuses"
                </Button>
            </PageHeader>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <Show when=move || form_open.get()>
                <OfferDetails items=items on_close=close_form />
            </Show>

            <div class="filter-bar">
                <SearchInput
                    value=Signal::derive(move || state.with(|q| q.search().to_string()))
                    on_change=Callback::new(move |s: String| state.update(|q| *q = q.with_search(s)))
                    placeholder="Search offers..."
                />
                <FilterSelect
                    all_label="All Status"
                    options=status_options
                    value=Signal::derive(move || state.with(|q| q.filter_value(OfferField::Status).to_string()))
                    on_change=Callback::new(move |v: String| state.update(|q| *q = q.with_filter(OfferField::Status, v)))
                />
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <SortableHeaderCell field=OfferField::Id sort=sort on_sort=on_sort />
                            <SortableHeaderCell field=OfferField::Title sort=sort on_sort=on_sort label="Offer" />
                            <SortableHeaderCell field=OfferField::DiscountValue sort=sort on_sort=on_sort />
                            <SortableHeaderCell field=OfferField::MinOrderValue sort=sort on_sort=on_sort align="right" />
                            <SortableHeaderCell field=OfferField::StartDate sort=sort on_sort=on_sort label="Validity" />
                            <SortableHeaderCell field=OfferField::UsageCount sort=sort on_sort=on_sort />
                            <SortableHeaderCell field=OfferField::Status sort=sort on_sort=on_sort />
                            <th class="table__header-cell">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(|row: Offer| {
                            let id = row.id.clone();
                            let discount = row.discount_label();
                            let usage = row.usage_label();
                            let min_order = if row.min_order_value > 0.0 {
                                format_rupees(row.min_order_value)
                            } else {
                                "-".to_string()
                            };
                            let validity = format!(
                                "{} to {}",
                                row.start_date.format("%Y-%m-%d"),
                                row.end_date.format("%Y-%m-%d")
                            );
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.id}</td>
                                    <td class="table__cell">
                                        <div>{row.title}</div>
                                        <div class="table__cell-secondary">{row.description}</div>
                                    </td>
                                    <td class="table__cell">{discount}</td>
                                    <td class="table__cell" style="text-align: right;">{min_order}</td>
                                    <td class="table__cell">{validity}</td>
                                    <td class="table__cell">{usage}</td>
                                    <td class="table__cell">
                                        <StatusBadge status=row.status.as_str() />
                                    </td>
                                    <td class="table__cell">
                                        <button
                                            class="button button--icon button--danger"
                                            title="Delete"
                                            on:click=move |_| handle_delete(id.clone())
                                        >
                                            {icon("delete")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
