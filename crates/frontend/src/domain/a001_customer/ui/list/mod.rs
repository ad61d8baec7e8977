pub mod state;

use self::state::create_state;
use crate::domain::a001_customer::ui::details::CustomerDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::StatusBadge;
use crate::shared::form_utils::FormTarget;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    confirm_delete, filter_select_options, mutate_collection, shown_of_total, FilterSelect, SearchInput,
};
use contracts::domain::a001_customer::{mock_customers, Customer, CustomerField};
use contracts::shared::collection::Collection;
use contracts::shared::list_query::apply;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[component]
#[allow(non_snake_case)]
pub fn CustomerList() -> impl IntoView {
    let state = create_state();
    let items = RwSignal::new(Collection::from_items(mock_customers()));
    let (error, set_error) = signal::<Option<String>>(None);
    let form = RwSignal::new(None::<FormTarget>);

    let rows = Memo::new(move |_| {
        let query = state.get();
        items.with(|c| apply(c.items(), &query))
    });
    let status_options = filter_select_options(items, state, CustomerField::Status);

    let sort = Signal::derive(move || state.with(|q| q.sort()));
    let on_sort = Callback::new(move |field: CustomerField| {
        state.update(|q| *q = q.with_sort_requested(field));
    });

    let handle_delete = move |id: String| {
        if !confirm_delete("customer") {
            return;
        }
        let result = mutate_collection(items, &format!("delete {}", id), |c| {
            c.remove(&id).map(|_| ())
        });
        set_error.set(result.err());
    };

    let open_new = move |_: leptos::ev::MouseEvent| form.set(Some(FormTarget::New));
    let close_form = Callback::new(move |_: ()| form.set(None));

    let reset = move |_: leptos::ev::MouseEvent| {
        items.set(Collection::from_items(mock_customers()));
        form.set(None);
        set_error.set(None);
        log::info!("customer: reset to mock data");
    };

    let subtitle = Signal::derive(move || {
        Some(shown_of_total(rows.with(|r| r.len()), items.with(|c| c.len())))
    });

    view! {
        <div class="content">
            <PageHeader title="Customers" subtitle=subtitle>
                <Button appearance=ButtonAppearance::Primary on_click=open_new>
                    {icon("plus")}
                    "Add Customer"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=reset>
                    {icon("refresh")}
                    "Reset"
                </Button>
            </PageHeader>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || form.get().map(|target| view! {
                <CustomerDetails items=items target=target on_close=close_form />
            })}

            <div class="filter-bar">
                <SearchInput
                    value=Signal::derive(move || state.with(|q| q.search().to_string()))
                    on_change=Callback::new(move |s: String| state.update(|q| *q = q.with_search(s)))
                    placeholder="Search customers..."
                />
                <FilterSelect
                    all_label="All Status"
                    options=status_options
                    value=Signal::derive(move || state.with(|q| q.filter_value(CustomerField::Status).to_string()))
                    on_change=Callback::new(move |v: String| state.update(|q| *q = q.with_filter(CustomerField::Status, v)))
                />
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <SortableHeaderCell field=CustomerField::Id sort=sort on_sort=on_sort />
                            <SortableHeaderCell field=CustomerField::Name sort=sort on_sort=on_sort />
                            <SortableHeaderCell field=CustomerField::Email sort=sort on_sort=on_sort />
                            <SortableHeaderCell field=CustomerField::Phone sort=sort on_sort=on_sort />
                            <th class="table__header-cell">{"Address"}</th>
                            <SortableHeaderCell field=CustomerField::JoinDate sort=sort on_sort=on_sort />
                            <SortableHeaderCell field=CustomerField::Status sort=sort on_sort=on_sort />
                            <th class="table__header-cell">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(|row: Customer| {
                            let id_for_edit = row.id.clone();
                            let id_for_delete = row.id.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.id}</td>
                                    <td class="table__cell">{row.name}</td>
                                    <td class="table__cell">{row.email}</td>
                                    <td class="table__cell">{row.phone}</td>
                                    <td class="table__cell">{row.address}</td>
                                    <td class="table__cell">{row.join_date.format("%Y-%m-%d").to_string()}</td>
                                    <td class="table__cell">
                                        <StatusBadge status=row.status.as_str() />
                                    </td>
                                    <td class="table__cell">
                                        <button
                                            class="button button--icon"
                                            title="Edit"
                                            on:click=move |_| form.set(Some(FormTarget::Edit(id_for_edit.clone())))
                                        >
                                            {icon("edit")}
                                        </button>
                                        <button
                                            class="button button--icon button--danger"
                                            title="Delete"
                                            on:click=move |_| handle_delete(id_for_delete.clone())
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
