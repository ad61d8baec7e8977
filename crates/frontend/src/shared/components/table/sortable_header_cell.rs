//! Сортируемая ячейка заголовка таблицы
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     field=ProductField::Price
//!     sort=Signal::derive(move || query.with(|q| q.sort()))
//!     on_sort=Callback::new(move |field| query.update(|q| *q = q.with_sort_requested(field)))
//!     align="right"
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::shared::list_query::{ListField, SortConfig};
use leptos::prelude::*;

/// Заголовок колонки: подпись поля, индикатор (▲▼) и клик для смены сортировки
#[component]
pub fn SortableHeaderCell<F>(
    /// Поле колонки
    field: F,

    /// Текущая сортировка из state
    #[prop(into)]
    sort: Signal<SortConfig<F>>,

    /// Callback при клике на заголовок
    on_sort: Callback<F>,

    /// Подпись вместо `field.label()`
    #[prop(optional, into)]
    label: Option<String>,

    /// Выравнивание заголовка (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView
where
    F: ListField + Send + Sync + 'static,
{
    let label = label.unwrap_or_else(|| field.label().to_string());
    let header_style = if align == "right" {
        "cursor: pointer; text-align: right; white-space: nowrap;"
    } else {
        "cursor: pointer; white-space: nowrap;"
    };

    view! {
        <th
            class="table__header-cell table__header-cell--sortable"
            style=header_style
            on:click=move |_| on_sort.run(field)
        >
            {label}
            <span class=move || get_sort_class(sort.get(), field)>
                {move || get_sort_indicator(sort.get(), field)}
            </span>
        </th>
    }
}
