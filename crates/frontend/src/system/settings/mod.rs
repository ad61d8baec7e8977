//! Экран настроек: форма сохраняется в localStorage, роли только для просмотра

use crate::shared::components::page_header::PageHeader;
use crate::shared::storage::{load_json, save_json};
use contracts::shared::settings::{default_roles, AppSettings, BackupFrequency, SETTINGS_STORAGE_KEY};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

type SettingsEdit = Box<dyn FnOnce(&mut AppSettings)>;

/// Результат последнего сохранения
#[derive(Clone, Debug, PartialEq)]
enum SaveNotice {
    Saved,
    Failed(String),
}

fn load_settings() -> AppSettings {
    load_json::<AppSettings>(SETTINGS_STORAGE_KEY).unwrap_or_default()
}

fn parse_tax_rate(raw: &str) -> Result<f64, String> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| format!("Invalid tax rate: {}", raw))
}

fn parse_auto_logout(raw: &str) -> Result<u32, String> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| format!("Invalid auto logout time: {}", raw))
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let settings = RwSignal::new(load_settings());
    let (notice, set_notice) = signal(None::<SaveNotice>);

    let edit = move |f: SettingsEdit| {
        settings.update(|s| f(s));
        set_notice.set(None);
    };

    let on_save = move |_: leptos::ev::MouseEvent| {
        let current = settings.get_untracked();
        let result = current
            .validate()
            .and_then(|_| save_json(SETTINGS_STORAGE_KEY, &current));
        match result {
            Ok(()) => {
                log::info!("settings saved");
                set_notice.set(Some(SaveNotice::Saved));
            }
            Err(e) => {
                log::warn!("settings not saved: {}", e);
                set_notice.set(Some(SaveNotice::Failed(e)));
            }
        }
    };

    let on_reset = move |_: leptos::ev::MouseEvent| {
        settings.set(AppSettings::default());
        set_notice.set(None);
    };

    view! {
        <div class="content">
            <PageHeader title="Settings" subtitle="Application preferences".to_string()>
                {()}
            </PageHeader>

            {move || notice.get().map(|n| match n {
                SaveNotice::Saved => view! {
                    <div class="notice notice--success">{"Settings saved"}</div>
                }.into_any(),
                SaveNotice::Failed(e) => view! {
                    <div class="notice notice--error">{e}</div>
                }.into_any(),
            })}

            <div class="settings-form">
                <fieldset class="settings-form__section">
                    <legend>{"Notifications"}</legend>
                    <label class="form__label">
                        {"Notification email"}
                        <input
                            type="email"
                            class="form__input"
                            prop:value=move || settings.with(|s| s.notification_email.clone())
                            on:input=move |ev| {
                                let v = event_target_value(&ev);
                                edit(Box::new(move |s| s.notification_email = v));
                            }
                        />
                    </label>
                    <label class="form__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || settings.with(|s| s.sms_notifications)
                            on:change=move |ev| {
                                let v = event_target_checked(&ev);
                                edit(Box::new(move |s| s.sms_notifications = v));
                            }
                        />
                        {"SMS notifications"}
                    </label>
                    <label class="form__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || settings.with(|s| s.email_notifications)
                            on:change=move |ev| {
                                let v = event_target_checked(&ev);
                                edit(Box::new(move |s| s.email_notifications = v));
                            }
                        />
                        {"Email notifications"}
                    </label>
                </fieldset>

                <fieldset class="settings-form__section">
                    <legend>{"System"}</legend>
                    <label class="form__label">
                        {"Backup frequency"}
                        <select
                            class="form__input"
                            prop:value=move || settings.with(|s| s.backup_frequency.as_str())
                            on:change=move |ev| {
                                if let Some(freq) = BackupFrequency::from_str_opt(&event_target_value(&ev)) {
                                    edit(Box::new(move |s| s.backup_frequency = freq));
                                }
                            }
                        >
                            {BackupFrequency::ALL.into_iter().map(|f| view! {
                                <option value=f.as_str()>{f.label()}</option>
                            }).collect_view()}
                        </select>
                    </label>
                    <label class="form__label">
                        {"Auto logout (minutes)"}
                        <input
                            type="number"
                            min="1"
                            class="form__input"
                            prop:value=move || settings.with(|s| s.auto_logout.to_string())
                            on:change=move |ev| match parse_auto_logout(&event_target_value(&ev)) {
                                Ok(v) => edit(Box::new(move |s| s.auto_logout = v)),
                                Err(e) => set_notice.set(Some(SaveNotice::Failed(e))),
                            }
                        />
                    </label>
                </fieldset>

                <fieldset class="settings-form__section">
                    <legend>{"Business"}</legend>
                    <label class="form__label">
                        {"Currency"}
                        <select
                            class="form__input"
                            prop:value=move || settings.with(|s| s.currency.clone())
                            on:change=move |ev| {
                                let v = event_target_value(&ev);
                                edit(Box::new(move |s| s.currency = v));
                            }
                        >
                            <option value="INR">{"INR (₹)"}</option>
                            <option value="USD">{"USD ($)"}</option>
                        </select>
                    </label>
                    <label class="form__label">
                        {"Language"}
                        <select
                            class="form__input"
                            prop:value=move || settings.with(|s| s.language.clone())
                            on:change=move |ev| {
                                let v = event_target_value(&ev);
                                edit(Box::new(move |s| s.language = v));
                            }
                        >
                            <option value="en">{"English"}</option>
                            <option value="hi">{"Hindi"}</option>
                        </select>
                    </label>
                    <label class="form__label">
                        {"Tax rate (%)"}
                        <input
                            type="number"
                            step="0.1"
                            class="form__input"
                            prop:value=move || settings.with(|s| s.tax_rate.to_string())
                            on:change=move |ev| match parse_tax_rate(&event_target_value(&ev)) {
                                Ok(v) => edit(Box::new(move |s| s.tax_rate = v)),
                                Err(e) => set_notice.set(Some(SaveNotice::Failed(e))),
                            }
                        />
                    </label>
                </fieldset>

                <div class="settings-form__actions">
                    <Button appearance=ButtonAppearance::Secondary on_click=on_reset>
                        "Reset to defaults"
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=on_save>
                        "Save"
                    </Button>
                </div>
            </div>

            <h3 class="settings__roles-title">{"Roles"}</h3>
            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Role"}</th>
                            <th class="table__header-cell">{"Permissions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {default_roles().into_iter().map(|role| view! {
                            <tr class="table__row">
                                <td class="table__cell">{role.name}</td>
                                <td class="table__cell">{role.permissions.join(", ")}</td>
                            </tr>
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
    fn test_parse_numeric_fields() {
        assert_eq!(parse_tax_rate(" 12.5 "), Ok(12.5));
        assert!(parse_tax_rate("abc").is_err());
        assert_eq!(parse_auto_logout("45"), Ok(45));
        assert!(parse_auto_logout("-1").is_err());
    }
}
