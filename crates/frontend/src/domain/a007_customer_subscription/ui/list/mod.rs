//! Таблица подписок клиентов (вкладка экрана подписок)

use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::StatusBadge;
use contracts::domain::a007_customer_subscription::{
    CustomerSubscription, CustomerSubscriptionField,
};
use contracts::domain::common::Record;
use contracts::shared::collection::{Collection, CollectionResult};
use contracts::shared::list_query::SortConfig;
use leptos::prelude::*;

/// Пересчет статусов по сегодняшней дате
pub fn refresh_statuses(c: &mut Collection<CustomerSubscription>) -> CollectionResult<()> {
    let today = chrono::Local::now().date_naive();
    let ids: Vec<String> = c.items().iter().map(|s| s.id().to_string()).collect();
    for id in ids {
        c.modify(&id, |s| s.refreshed(today))?;
    }
    Ok(())
}

#[component]
#[allow(non_snake_case)]
pub fn CustomerSubscriptionTable(
    /// Строки после конвейера списка
    #[prop(into)]
    rows: Signal<Vec<CustomerSubscription>>,
    #[prop(into)]
    sort: Signal<SortConfig<CustomerSubscriptionField>>,
    on_sort: Callback<CustomerSubscriptionField>,
) -> impl IntoView {
    view! {
        <div class="table-container">
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        <SortableHeaderCell field=CustomerSubscriptionField::Id sort=sort on_sort=on_sort />
                        <SortableHeaderCell field=CustomerSubscriptionField::Customer sort=sort on_sort=on_sort />
                        <SortableHeaderCell field=CustomerSubscriptionField::Plan sort=sort on_sort=on_sort />
                        <SortableHeaderCell field=CustomerSubscriptionField::StartDate sort=sort on_sort=on_sort />
                        <SortableHeaderCell field=CustomerSubscriptionField::EndDate sort=sort on_sort=on_sort />
                        <SortableHeaderCell field=CustomerSubscriptionField::Status sort=sort on_sort=on_sort />
                    </tr>
                </thead>
                <tbody>
                    {move || rows.get().into_iter().map(|row| view! {
                        <tr class="table__row">
                            <td class="table__cell">{row.id}</td>
                            <td class="table__cell">{row.customer}</td>
                            <td class="table__cell">{row.plan}</td>
                            <td class="table__cell">{row.start_date.format("%Y-%m-%d").to_string()}</td>
                            <td class="table__cell">{row.end_date.format("%Y-%m-%d").to_string()}</td>
                            <td class="table__cell">
                                <StatusBadge status=row.status.as_str() />
                            </td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}
