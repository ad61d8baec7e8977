use super::view_model::OfferDetailsViewModel;
use contracts::domain::a005_offer::{DiscountType, Offer, OFFER_SCOPES};
use contracts::shared::collection::Collection;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

/// Встроенная форма создания акции
#[component]
pub fn OfferDetails(items: RwSignal<Collection<Offer>>, on_close: Callback<()>) -> impl IntoView {
    let vm = OfferDetailsViewModel::new(items, chrono::Local::now().date_naive());

    let on_save = move |_: leptos::ev::MouseEvent| {
        if vm.save_command() {
            on_close.run(());
        }
    };
    let on_cancel = move |_: leptos::ev::MouseEvent| on_close.run(());

    let text_input = move |id: &'static str, input_type: &'static str, field: RwSignal<String>| {
        view! {
            <input
                type=input_type
                id=id
                min="0"
                prop:value=move || field.get()
                on:input=move |ev| field.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>{"Create New Offer"}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="offer-title">{"Title"}</label>
                    <input
                        type="text"
                        id="offer-title"
                        placeholder="Enter offer title"
                        prop:value=move || vm.form.with(|f| f.title.clone())
                        on:input=move |ev| vm.form.update(|f| f.title = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="offer-discount-type">{"Discount type"}</label>
                    <select
                        id="offer-discount-type"
                        prop:value=move || vm.form.with(|f| f.discount_type.as_str())
                        on:change=move |ev| {
                            if let Some(kind) = DiscountType::from_str_opt(&event_target_value(&ev)) {
                                vm.form.update(|f| f.discount_type = kind);
                            }
                        }
                    >
                        {DiscountType::ALL.into_iter().map(|t| view! {
                            <option value=t.as_str()>{t.as_str()}</option>
                        }).collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label for="offer-discount-value">{"Discount value"}</label>
                    {text_input("offer-discount-value", "number", vm.discount_value)}
                </div>
                <div class="form-group">
                    <label for="offer-min-order">{"Minimum order value (₹)"}</label>
                    {text_input("offer-min-order", "number", vm.min_order_value)}
                </div>
                <div class="form-group">
                    <label for="offer-start">{"Start date"}</label>
                    {text_input("offer-start", "date", vm.start_date)}
                </div>
                <div class="form-group">
                    <label for="offer-end">{"End date"}</label>
                    {text_input("offer-end", "date", vm.end_date)}
                </div>
                <div class="form-group">
                    <label for="offer-usage-limit">{"Usage limit (0 for unlimited)"}</label>
                    {text_input("offer-usage-limit", "number", vm.usage_limit)}
                </div>
                <div class="form-group">
                    <label for="offer-scope">{"Applicable products"}</label>
                    <select
                        id="offer-scope"
                        prop:value=move || vm.form.with(|f| f.applicable_products.first().cloned().unwrap_or_default())
                        on:change=move |ev| {
                            let scope = event_target_value(&ev);
                            vm.form.update(|f| f.applicable_products = vec![scope]);
                        }
                    >
                        {OFFER_SCOPES.into_iter().map(|s| view! {
                            <option value=s>{s}</option>
                        }).collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label for="offer-description">{"Description"}</label>
                    <textarea
                        id="offer-description"
                        rows="3"
                        placeholder="Enter offer description"
                        prop:value=move || vm.form.with(|f| f.description.clone())
                        on:input=move |ev| vm.form.update(|f| f.description = event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="details-actions">
                <Button appearance=ButtonAppearance::Primary on_click=on_save>
                    "Create Offer"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=on_cancel>
                    "Cancel"
                </Button>
            </div>
        </div>
    }
}
