/// Утилиты списочных экранов: поле поиска, выбор фильтра, индикаторы сортировки
use contracts::domain::common::Record;
use contracts::shared::collection::{Collection, CollectionResult};
use contracts::shared::list_query::{
    distinct_values, filter_options, ListEntity, ListField, SortConfig, ViewQuery,
};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Задержка применения строки поиска, мс
const SEARCH_DEBOUNCE_MS: i32 = 300;

/// Компонент поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение поиска (для подсветки активного поиска)
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения поиска
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let (input_value, set_input_value) = signal(value.get_untracked());

    let debounce_timeout = StoredValue::new(None::<i32>);

    let cancel_pending = move || {
        if let (Some(timeout_id), Some(window)) = (debounce_timeout.get_value(), web_sys::window()) {
            window.clear_timeout_with_handle(timeout_id);
        }
        debounce_timeout.set_value(None);
    };

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        cancel_pending();

        let Some(window) = web_sys::window() else {
            on_change.run(new_value);
            return;
        };
        let pending = new_value.clone();
        let closure = wasm_bindgen::closure::Closure::once_into_js(move || {
            on_change.run(pending);
        });

        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.unchecked_ref::<js_sys::Function>(),
            SEARCH_DEBOUNCE_MS,
        ) {
            Ok(timeout_id) => debounce_timeout.set_value(Some(timeout_id)),
            Err(e) => {
                log::warn!("setTimeout failed: {:?}", e);
                on_change.run(new_value);
            }
        }
    };

    let is_search_active = move || !value.get().is_empty();

    let clear_search = move |_| {
        cancel_pending();
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div style="position: relative; display: inline-flex; align-items: center;">
            <input
                type="text"
                placeholder={placeholder}
                style=move || format!(
                    "width: 250px; padding: 6px 32px 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px; background: {};",
                    if is_search_active() { "#fffbea" } else { "white" }
                )
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    handle_input_change(val);
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button
                        style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; align-items: center; color: #666; line-height: 1;"
                        on:click=clear_search
                        title="Clear"
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

/// Выпадающий список фильтра точного совпадения; пустое значение = "все"
#[component]
pub fn FilterSelect(
    /// Подпись пункта "все"
    #[prop(into)]
    all_label: String,
    /// Варианты значений (обычно `filter_select_options`)
    #[prop(into)]
    options: Signal<Vec<String>>,
    /// Текущее значение фильтра
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            class="filter-select"
            style=move || format!(
                "padding: 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px; background: {};",
                if value.get().is_empty() { "white" } else { "#fffbea" }
            )
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="">{all_label}</option>
            {move || options.get().into_iter().map(|option| {
                let selected = option == value.get_untracked();
                view! { <option value=option.clone() selected=selected>{option.clone()}</option> }
            }).collect_view()}
        </select>
    }
}

/// Варианты фильтра для `FilterSelect`.
///
/// Значения на момент открытия экрана не пропадают после удаления строк,
/// новые значения коллекции добавляются, выбранное значение всегда в списке.
pub fn filter_select_options<E>(
    items: RwSignal<Collection<E>>,
    state: RwSignal<ViewQuery<E::Field>>,
    field: E::Field,
) -> Signal<Vec<String>>
where
    E: Record + ListEntity + Send + Sync + 'static,
    E::Field: Send + Sync,
{
    let seed = items.with_untracked(|c| distinct_values(c.items(), field));
    Signal::derive(move || {
        let live = items.with(|c| distinct_values(c.items(), field));
        state.with(|q| filter_options(seed.iter().cloned().chain(live), q.filter_value(field)))
    })
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator<F: ListField>(sort: SortConfig<F>, field: F) -> &'static str {
    if sort.field == field {
        if sort.direction.is_ascending() {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// CSS класс индикатора: активная колонка выделяется
pub fn get_sort_class<F: ListField>(sort: SortConfig<F>, field: F) -> &'static str {
    if sort.field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Подпись "Showing N of M"
pub fn shown_of_total(shown: usize, total: usize) -> String {
    format!("Showing {} of {}", shown, total)
}

/// Подтверждение удаления через диалог браузера
pub fn confirm_delete(what: &str) -> bool {
    web_sys::window()
        .and_then(|win| {
            win.confirm_with_message(&format!("Are you sure you want to delete this {}?", what))
                .ok()
        })
        .unwrap_or(false)
}

/// Применить изменение к коллекции экрана и записать результат в лог
pub fn mutate_collection<E, F>(
    items: RwSignal<Collection<E>>,
    action: &str,
    f: F,
) -> Result<(), String>
where
    E: Record + Send + Sync + 'static,
    F: FnOnce(&mut Collection<E>) -> CollectionResult<()>,
{
    let mut result = Ok(());
    items.update(|collection| result = f(collection));
    match result {
        Ok(()) => {
            log::info!("{}: {}", E::collection_name(), action);
            Ok(())
        }
        Err(e) => {
            log::warn!("{}: {} rejected: {}", E::collection_name(), action, e);
            Err(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_product::ProductField;

    #[test]
    fn test_sort_indicator() {
        let sort = SortConfig::ascending(ProductField::Price);
        assert_eq!(get_sort_indicator(sort, ProductField::Price), " ▲");
        assert_eq!(get_sort_indicator(sort, ProductField::Name), " ⇅");
        let sort = SortConfig::descending(ProductField::Price);
        assert_eq!(get_sort_indicator(sort, ProductField::Price), " ▼");
    }

    #[test]
    fn test_sort_class() {
        let sort = SortConfig::ascending(ProductField::Id);
        assert!(get_sort_class(sort, ProductField::Id).ends_with("--active"));
        assert_eq!(get_sort_class(sort, ProductField::Stock), "table__sort-indicator");
    }

    #[test]
    fn test_shown_of_total() {
        assert_eq!(shown_of_total(2, 10), "Showing 2 of 10");
    }
}
