pub mod state;

use self::state::{create_state, STOCK_STEP};
use crate::domain::a003_product::ui::details::ProductDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::{SortableHeaderCell, TableCellMoney};
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    confirm_delete, filter_select_options, mutate_collection, shown_of_total, FilterSelect, SearchInput,
};
use contracts::domain::a003_product::{mock_products, Product, ProductField};
use contracts::shared::collection::Collection;
use contracts::shared::list_query::apply;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let state = create_state();
    let items = RwSignal::new(Collection::from_items(mock_products()));
    let (error, set_error) = signal::<Option<String>>(None);
    let form_open = RwSignal::new(false);

    let rows = Memo::new(move |_| {
        let query = state.get();
        items.with(|c| apply(c.items(), &query))
    });
    let category_options = filter_select_options(items, state, ProductField::Category);

    let sort = Signal::derive(move || state.with(|q| q.sort()));
    let on_sort = Callback::new(move |field: ProductField| {
        state.update(|q| *q = q.with_sort_requested(field));
    });

    let set_stock = move |id: String, stock: u32| {
        let result = mutate_collection(items, &format!("set stock {} = {}", id, stock), |c| {
            c.modify(&id, |p| p.with_stock(stock))
        });
        set_error.set(result.err());
    };

    let adjust_stock = move |id: String, delta: i64| {
        let result = mutate_collection(items, &format!("adjust stock {} by {}", id, delta), |c| {
            c.modify(&id, |p| p.with_stock_delta(delta))
        });
        set_error.set(result.err());
    };

    let handle_delete = move |id: String| {
        if !confirm_delete("product") {
            return;
        }
        let result = mutate_collection(items, &format!("delete {}", id), |c| {
            c.remove(&id).map(|_| ())
        });
        set_error.set(result.err());
    };

    let open_new = move |_: leptos::ev::MouseEvent| form_open.set(true);
    let close_form = Callback::new(move |_: ()| form_open.set(false));

    let subtitle = Signal::derive(move || {
        Some(shown_of_total(rows.with(|r| r.len()), items.with(|c| c.len())))
    });

    view! {
        <div class="content">
            <PageHeader title="Products" subtitle=subtitle>
                <Button appearance=ButtonAppearance::Primary on_click=open_new>
                    {icon("plus")}
                    "Add New Product"
                </Button>
            </PageHeader>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <Show when=move || form_open.get()>
                <ProductDetails items=items on_close=close_form />
            </Show>

            <div class="filter-bar">
                <SearchInput
                    value=Signal::derive(move || state.with(|q| q.search().to_string()))
                    on_change=Callback::new(move |s: String| state.update(|q| *q = q.with_search(s)))
                    placeholder="Search products..."
                />
                <FilterSelect
                    all_label="All Categories"
                    options=category_options
                    value=Signal::derive(move || state.with(|q| q.filter_value(ProductField::Category).to_string()))
                    on_change=Callback::new(move |v: String| state.update(|q| *q = q.with_filter(ProductField::Category, v)))
                />
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <SortableHeaderCell field=ProductField::Id sort=sort on_sort=on_sort />
                            <SortableHeaderCell field=ProductField::Name sort=sort on_sort=on_sort />
                            <SortableHeaderCell field=ProductField::Category sort=sort on_sort=on_sort />
                            <SortableHeaderCell field=ProductField::Price sort=sort on_sort=on_sort align="right" />
                            <SortableHeaderCell field=ProductField::Stock sort=sort on_sort=on_sort />
                            <SortableHeaderCell field=ProductField::Unit sort=sort on_sort=on_sort />
                            <th class="table__header-cell">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(|row: Product| {
                            let id_input = row.id.clone();
                            let id_minus = row.id.clone();
                            let id_plus = row.id.clone();
                            let id_delete = row.id.clone();
                            let low_stock = row.is_low_stock();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.id}</td>
                                    <td class="table__cell">{row.name}</td>
                                    <td class="table__cell">{row.category}</td>
                                    <TableCellMoney value=row.price />
                                    <td class="table__cell" class:table__cell--warning=low_stock>
                                        <div class="stock-editor">
                                            <button
                                                class="button button--icon"
                                                title="Decrease"
                                                on:click=move |_| adjust_stock(id_minus.clone(), -STOCK_STEP)
                                            >
                                                {icon("minus")}
                                            </button>
                                            <input
                                                type="number"
                                                min="0"
                                                style="width: 72px;"
                                                prop:value=row.stock.to_string()
                                                on:change=move |ev| {
                                                    let raw = event_target_value(&ev);
                                                    match raw.trim().parse::<u32>() {
                                                        Ok(stock) => set_stock(id_input.clone(), stock),
                                                        Err(_) => {
                                                            log::warn!("product: bad stock value {:?}", raw);
                                                            set_error.set(Some(format!("Invalid stock value: {}", raw)));
                                                        }
                                                    }
                                                }
                                            />
                                            <button
                                                class="button button--icon"
                                                title="Increase"
                                                on:click=move |_| adjust_stock(id_plus.clone(), STOCK_STEP)
                                            >
                                                {icon("plus")}
                                            </button>
                                        </div>
                                    </td>
                                    <td class="table__cell">{row.unit}</td>
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
