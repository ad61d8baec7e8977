use super::view_model::CustomerDetailsViewModel;
use crate::shared::form_utils::FormTarget;
use contracts::domain::a001_customer::Customer;
use contracts::domain::common::ActivityStatus;
use contracts::shared::collection::Collection;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

/// Встроенная форма добавления/редактирования клиента над таблицей
#[component]
pub fn CustomerDetails(
    items: RwSignal<Collection<Customer>>,
    target: FormTarget,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = CustomerDetailsViewModel::new(items, target);
    let heading = if vm.is_edit_mode() { "Edit Customer" } else { "Add New Customer" };

    let on_save = move |_: leptos::ev::MouseEvent| {
        if vm.save_command() {
            on_close.run(());
        }
    };
    let on_cancel = move |_: leptos::ev::MouseEvent| on_close.run(());

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>{heading}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="customer-name">{"Name"}</label>
                    <input
                        type="text"
                        id="customer-name"
                        prop:value=move || vm.form.with(|f| f.name.clone())
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="customer-email">{"Email"}</label>
                    <input
                        type="email"
                        id="customer-email"
                        prop:value=move || vm.form.with(|f| f.email.clone())
                        on:input=move |ev| vm.form.update(|f| f.email = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="customer-phone">{"Phone"}</label>
                    <input
                        type="tel"
                        id="customer-phone"
                        maxlength="10"
                        prop:value=move || vm.form.with(|f| f.phone.clone())
                        on:input=move |ev| vm.form.update(|f| f.phone = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="customer-address">{"Address"}</label>
                    <textarea
                        id="customer-address"
                        rows="2"
                        prop:value=move || vm.form.with(|f| f.address.clone())
                        on:input=move |ev| vm.form.update(|f| f.address = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="customer-status">{"Status"}</label>
                    <select
                        id="customer-status"
                        prop:value=move || vm.form.with(|f| f.status.as_str())
                        on:change=move |ev| {
                            if let Ok(status) = event_target_value(&ev).parse::<ActivityStatus>() {
                                vm.form.update(|f| f.status = status);
                            }
                        }
                    >
                        {ActivityStatus::ALL.into_iter().map(|s| view! {
                            <option value=s.as_str()>{s.as_str()}</option>
                        }).collect_view()}
                    </select>
                </div>
            </div>

            <div class="details-actions">
                <Button appearance=ButtonAppearance::Primary on_click=on_save>
                    {if vm.is_edit_mode() { "Update Customer" } else { "Add Customer" }}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=on_cancel>
                    "Cancel"
                </Button>
            </div>
        </div>
    }
}
