use super::view_model::DeliveryBoyDetailsViewModel;
use crate::shared::form_utils::FormTarget;
use contracts::domain::a002_delivery_boy::{DeliveryBoy, VehicleType};
use contracts::domain::common::ActivityStatus;
use contracts::shared::collection::Collection;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn DeliveryBoyDetails(
    items: RwSignal<Collection<DeliveryBoy>>,
    target: FormTarget,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = DeliveryBoyDetailsViewModel::new(items, target);
    let heading = if vm.is_edit_mode() { "Edit Delivery Boy" } else { "Add New Delivery Boy" };

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
                    <label for="delivery-name">{"Name"}</label>
                    <input
                        type="text"
                        id="delivery-name"
                        prop:value=move || vm.form.with(|f| f.name.clone())
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="delivery-phone">{"Phone"}</label>
                    <input
                        type="tel"
                        id="delivery-phone"
                        maxlength="10"
                        prop:value=move || vm.form.with(|f| f.phone.clone())
                        on:input=move |ev| vm.form.update(|f| f.phone = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="delivery-email">{"Email"}</label>
                    <input
                        type="email"
                        id="delivery-email"
                        prop:value=move || vm.form.with(|f| f.email.clone())
                        on:input=move |ev| vm.form.update(|f| f.email = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="delivery-address">{"Address"}</label>
                    <textarea
                        id="delivery-address"
                        rows="2"
                        prop:value=move || vm.form.with(|f| f.address.clone())
                        on:input=move |ev| vm.form.update(|f| f.address = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="delivery-route">{"Route"}</label>
                    <input
                        type="text"
                        id="delivery-route"
                        placeholder="North Delhi"
                        prop:value=move || vm.form.with(|f| f.route.clone())
                        on:input=move |ev| vm.form.update(|f| f.route = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="delivery-vehicle-type">{"Vehicle type"}</label>
                    <select
                        id="delivery-vehicle-type"
                        prop:value=move || vm.form.with(|f| f.vehicle_type.as_str())
                        on:change=move |ev| {
                            if let Some(vehicle) = VehicleType::from_str_opt(&event_target_value(&ev)) {
                                vm.form.update(|f| f.vehicle_type = vehicle);
                            }
                        }
                    >
                        {VehicleType::ALL.into_iter().map(|v| view! {
                            <option value=v.as_str()>{v.as_str()}</option>
                        }).collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label for="delivery-vehicle-number">{"Vehicle number"}</label>
                    <input
                        type="text"
                        id="delivery-vehicle-number"
                        placeholder="DL-5S-AB-1234"
                        prop:disabled=move || !vm.needs_vehicle_number()
                        prop:value=move || vm.form.with(|f| f.vehicle_number.clone())
                        on:input=move |ev| vm.form.update(|f| f.vehicle_number = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="delivery-status">{"Status"}</label>
                    <select
                        id="delivery-status"
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
                    {if vm.is_edit_mode() { "Update Delivery Boy" } else { "Add Delivery Boy" }}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=on_cancel>
                    "Cancel"
                </Button>
            </div>
        </div>
    }
}
