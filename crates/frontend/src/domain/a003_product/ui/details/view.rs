use super::view_model::ProductDetailsViewModel;
use contracts::domain::a003_product::{Product, PRODUCT_CATEGORIES};
use contracts::shared::collection::Collection;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn ProductDetails(items: RwSignal<Collection<Product>>, on_close: Callback<()>) -> impl IntoView {
    let vm = ProductDetailsViewModel::new(items);

    let on_save = move |_: leptos::ev::MouseEvent| {
        if vm.save_command() {
            on_close.run(());
        }
    };
    let on_cancel = move |_: leptos::ev::MouseEvent| on_close.run(());

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>{"Add New Product"}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="product-name">{"Name"}</label>
                    <input
                        type="text"
                        id="product-name"
                        prop:value=move || vm.form.with(|f| f.name.clone())
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="product-category">{"Category"}</label>
                    <select
                        id="product-category"
                        prop:value=move || vm.form.with(|f| f.category.clone())
                        on:change=move |ev| vm.form.update(|f| f.category = event_target_value(&ev))
                    >
                        {PRODUCT_CATEGORIES.into_iter().map(|c| view! {
                            <option value=c>{c}</option>
                        }).collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label for="product-price">{"Price (₹)"}</label>
                    <input
                        type="number"
                        id="product-price"
                        min="0"
                        step="0.5"
                        prop:value=move || vm.price.get()
                        on:input=move |ev| vm.price.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="product-stock">{"Stock"}</label>
                    <input
                        type="number"
                        id="product-stock"
                        min="0"
                        prop:value=move || vm.stock.get()
                        on:input=move |ev| vm.stock.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="product-unit">{"Unit"}</label>
                    <input
                        type="text"
                        id="product-unit"
                        placeholder="500ml Packet"
                        prop:value=move || vm.form.with(|f| f.unit.clone())
                        on:input=move |ev| vm.form.update(|f| f.unit = event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="details-actions">
                <Button appearance=ButtonAppearance::Primary on_click=on_save>
                    "Add Product"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=on_cancel>
                    "Cancel"
                </Button>
            </div>
        </div>
    }
}
