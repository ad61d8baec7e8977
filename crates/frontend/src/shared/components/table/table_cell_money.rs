//! Ячейка таблицы с суммой в рупиях

use super::number_format::format_rupees;
use leptos::prelude::*;

/// Выравнивание по правому краю, отрицательные значения красным
#[component]
pub fn TableCellMoney(
    #[prop(into)]
    value: Signal<f64>,

    /// Жирный шрифт
    #[prop(optional, default = false)]
    bold: bool,
) -> impl IntoView {
    let style = move || {
        let color = if value.get() < 0.0 { "color: #c62828;" } else { "" };
        let weight = if bold { "font-weight: 600;" } else { "" };
        format!("text-align: right; white-space: nowrap; {}{}", color, weight)
    };

    view! {
        <td class="table__cell table__cell--money" style=style>
            {move || format_rupees(value.get())}
        </td>
    }
}
