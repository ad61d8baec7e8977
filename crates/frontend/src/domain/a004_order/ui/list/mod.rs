pub mod state;

use self::state::create_state;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::{format_rupees, SortableHeaderCell, TableCellMoney};
use crate::shared::components::ui::status_variant;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    confirm_delete, filter_select_options, mutate_collection, shown_of_total, FilterSelect, SearchInput,
};
use contracts::domain::a004_order::{mock_orders, Order, OrderField, OrderStatus};
use contracts::shared::aggregate::sum_by;
use contracts::shared::collection::Collection;
use contracts::shared::list_query::apply;
use leptos::prelude::*;

fn parse_status(raw: &str) -> Option<OrderStatus> {
    OrderStatus::ALL.into_iter().find(|s| s.as_str() == raw)
}

#[component]
#[allow(non_snake_case)]
pub fn OrderList() -> impl IntoView {
    let state = create_state();
    let items = RwSignal::new(Collection::from_items(mock_orders()));
    let (error, set_error) = signal::<Option<String>>(None);

    let rows = Memo::new(move |_| {
        let query = state.get();
        items.with(|c| apply(c.items(), &query))
    });
    let status_options = filter_select_options(items, state, OrderField::Status);

    let sort = Signal::derive(move || state.with(|q| q.sort()));
    let on_sort = Callback::new(move |field: OrderField| {
        state.update(|q| *q = q.with_sort_requested(field));
    });

    let change_status = move |id: String, raw: String| {
        let Some(status) = parse_status(&raw) else {
            log::warn!("order: unknown status {:?}", raw);
            return;
        };
        let result = mutate_collection(items, &format!("status {} -> {}", id, raw), |c| {
            c.modify(&id, |o| o.with_status(status))
        });
        set_error.set(result.err());
    };

    let handle_delete = move |id: String| {
        if !confirm_delete("order") {
            return;
        }
        let result = mutate_collection(items, &format!("delete {}", id), |c| {
            c.remove(&id).map(|_| ())
        });
        set_error.set(result.err());
    };

    let subtitle = Signal::derive(move || {
        let shown = rows.with(|r| r.len());
        let total = items.with(|c| c.len());
        let amount = rows.with(|r| sum_by(r, OrderField::Amount));
        Some(format!("{}, {}", shown_of_total(shown, total), format_rupees(amount)))
    });

    view! {
        <div class="content">
            <PageHeader title="Orders" subtitle=subtitle>
                {()}
            </PageHeader>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="filter-bar">
                <SearchInput
                    value=Signal::derive(move || state.with(|q| q.search().to_string()))
                    on_change=Callback::new(move |s: String| state.update(|q| *q = q.with_search(s)))
                    placeholder="Search orders..."
                />
                <FilterSelect
                    all_label="All Statuses"
                    options=status_options
                    value=Signal::derive(move || state.with(|q| q.filter_value(OrderField::Status).to_string()))
                    on_change=Callback::new(move |v: String| state.update(|q| *q = q.with_filter(OrderField::Status, v)))
                />
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <SortableHeaderCell field=OrderField::Id sort=sort on_sort=on_sort label="Order ID" />
                            <SortableHeaderCell field=OrderField::Customer sort=sort on_sort=on_sort />
                            <SortableHeaderCell field=OrderField::Date sort=sort on_sort=on_sort />
                            <SortableHeaderCell field=OrderField::Amount sort=sort on_sort=on_sort align="right" />
                            <SortableHeaderCell field=OrderField::Items sort=sort on_sort=on_sort />
                            <SortableHeaderCell field=OrderField::Status sort=sort on_sort=on_sort />
                            <th class="table__header-cell">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(|row: Order| {
                            let id_status = row.id.clone();
                            let id_delete = row.id.clone();
                            let current = row.status;
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.id}</td>
                                    <td class="table__cell">{row.customer}</td>
                                    <td class="table__cell">{row.date.format("%Y-%m-%d").to_string()}</td>
                                    <TableCellMoney value=row.amount />
                                    <td class="table__cell">{row.items}</td>
                                    <td class="table__cell">
                                        <select
                                            class=format!("badge badge--{}", status_variant(current.as_str()))
                                            on:change=move |ev| change_status(id_status.clone(), event_target_value(&ev))
                                        >
                                            {OrderStatus::ALL.into_iter().map(|s| view! {
                                                <option value=s.as_str() selected={s == current}>{s.as_str()}</option>
                                            }).collect_view()}
                                        </select>
                                    </td>
                                    <td class="table__cell">
                                        <button
                                            class="button button--icon button--danger"
                                            title="Delete"
                                            on:click=move |_| handle_delete(id_delete.clone())
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status() {
        assert_eq!(parse_status("Delivered"), Some(OrderStatus::Delivered));
        assert_eq!(parse_status("delivered"), None);
    }
}
