pub mod state;

use self::state::create_state;
use crate::domain::a002_delivery_boy::ui::details::DeliveryBoyDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::StatusBadge;
use crate::shared::form_utils::FormTarget;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    confirm_delete, filter_select_options, mutate_collection, shown_of_total, FilterSelect, SearchInput,
};
use contracts::domain::a002_delivery_boy::{mock_delivery_boys, DeliveryBoy, DeliveryBoyField};
use contracts::domain::common::ActivityStatus;
use contracts::shared::collection::Collection;
use contracts::shared::list_query::apply;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[component]
#[allow(non_snake_case)]
pub fn DeliveryBoyList() -> impl IntoView {
    let state = create_state();
    let items = RwSignal::new(Collection::from_items(mock_delivery_boys()));
    let (error, set_error) = signal::<Option<String>>(None);
    let form = RwSignal::new(None::<FormTarget>);

    let rows = Memo::new(move |_| {
        let query = state.get();
        items.with(|c| apply(c.items(), &query))
    });

    let options = move |field: DeliveryBoyField| filter_select_options(items, state, field);
    let filter_value = move |field: DeliveryBoyField| {
        Signal::derive(move || state.with(|q| q.filter_value(field).to_string()))
    };
    let set_filter = move |field: DeliveryBoyField| {
        Callback::new(move |v: String| state.update(|q| *q = q.with_filter(field, v)))
    };

    let sort = Signal::derive(move || state.with(|q| q.sort()));
    let on_sort = Callback::new(move |field: DeliveryBoyField| {
        state.update(|q| *q = q.with_sort_requested(field));
    });

    let handle_delete = move |id: String| {
        if !confirm_delete("delivery boy") {
            return;
        }
        let result = mutate_collection(items, &format!("delete {}", id), |c| {
            c.remove(&id).map(|_| ())
        });
        set_error.set(result.err());
    };

    let toggle_status = move |id: String| {
        let result = mutate_collection(items, &format!("toggle status {}", id), |c| {
            c.modify(&id, |boy| {
                let status = if boy.status.is_active() {
                    ActivityStatus::Inactive
                } else {
                    ActivityStatus::Active
                };
                DeliveryBoy {
                    status,
                    ..boy.clone()
                }
            })
        });
        set_error.set(result.err());
    };

    let open_new = move |_: leptos::ev::MouseEvent| form.set(Some(FormTarget::New));
    let close_form = Callback::new(move |_: ()| form.set(None));

    let reset = move |_: leptos::ev::MouseEvent| {
        items.set(Collection::from_items(mock_delivery_boys()));
        form.set(None);
        set_error.set(None);
        log::info!("delivery_boy: reset to mock data");
    };

    let subtitle = Signal::derive(move || {
        Some(shown_of_total(rows.with(|r| r.len()), items.with(|c| c.len())))
    });

    view! {
        <div class="content">
            <PageHeader title="Delivery Boys" subtitle=subtitle>
                <Button appearance=ButtonAppearance::Primary on_click=open_new>
                    {icon("plus")}
                    "Add Delivery Boy"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=reset>
                    {icon("refresh")}
                    "Reset"
                </Button>
            </PageHeader>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || form.get().map(|target| view! {
                <DeliveryBoyDetails items=items target=target on_close=close_form />
            })}

            <div class="filter-bar">
                <SearchInput
                    value=Signal::derive(move || state.with(|q| q.search().to_string()))
                    on_change=Callback::new(move |s: String| state.update(|q| *q = q.with_search(s)))
                    placeholder="Search by name, phone, email, ID..."
                />
                <FilterSelect
                    all_label="All Status"
                    options=options(DeliveryBoyField::Status)
                    value=filter_value(DeliveryBoyField::Status)
                    on_change=set_filter(DeliveryBoyField::Status)
                />
                <FilterSelect
                    all_label="All Routes"
                    options=options(DeliveryBoyField::Route)
                    value=filter_value(DeliveryBoyField::Route)
                    on_change=set_filter(DeliveryBoyField::Route)
                />
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <SortableHeaderCell field=DeliveryBoyField::Id sort=sort on_sort=on_sort />
                            <SortableHeaderCell field=DeliveryBoyField::Name sort=sort on_sort=on_sort />
                            <SortableHeaderCell field=DeliveryBoyField::Phone sort=sort on_sort=on_sort />
                            <SortableHeaderCell field=DeliveryBoyField::Route sort=sort on_sort=on_sort />
                            <SortableHeaderCell field=DeliveryBoyField::VehicleType sort=sort on_sort=on_sort />
                            <SortableHeaderCell field=DeliveryBoyField::JoinDate sort=sort on_sort=on_sort />
                            <SortableHeaderCell field=DeliveryBoyField::Status sort=sort on_sort=on_sort />
                            <th class="table__header-cell">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(|row: DeliveryBoy| {
                            let id_for_edit = row.id.clone();
                            let id_for_toggle = row.id.clone();
                            let id_for_delete = row.id.clone();
                            let toggle_title = if row.status.is_active() { "Deactivate" } else { "Activate" };
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.id}</td>
                                    <td class="table__cell">
                                        <div>{row.name}</div>
                                        <div class="table__cell-secondary">{row.email}</div>
                                    </td>
                                    <td class="table__cell">{row.phone}</td>
                                    <td class="table__cell">{row.route}</td>
                                    <td class="table__cell">
                                        <div>{row.vehicle_type.as_str()}</div>
                                        <div class="table__cell-secondary">{row.vehicle_number}</div>
                                    </td>
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
                                            class="button button--small button--secondary"
                                            on:click=move |_| toggle_status(id_for_toggle.clone())
                                        >
                                            {toggle_title}
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
