use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{CardTone, StatCard};
use crate::shared::components::table::{format_number_int, format_percent, format_rupees};
use contracts::dashboards::d002_reports::{
    customer_segment_data, delivery_performance_data, fastest_growing, inventory_shortfall,
    inventory_status_data, month_over_month_growth, monthly_sales_data, product_performance_data,
    share_percentages, summarize_sales, ReportKind, ShareSlice,
};
use leptos::prelude::*;

/// Страница отчетов: вкладка на каждый вид отчета
#[component]
pub fn ReportsPage() -> impl IntoView {
    let (active, set_active) = signal(ReportKind::default());

    view! {
        <div class="content">
            <PageHeader title="Reports" subtitle="Sales and operations analytics".to_string()>
                {()}
            </PageHeader>

            <div class="tabs">
                {ReportKind::ALL.into_iter().map(|kind| view! {
                    <button
                        class="tabs__item"
                        class:tabs__item--active=move || active.get() == kind
                        on:click=move |_| set_active.set(kind)
                    >
                        {kind.label()}
                    </button>
                }).collect_view()}
            </div>

            {move || match active.get() {
                ReportKind::Sales => view! { <SalesReport /> }.into_any(),
                ReportKind::Products => view! { <ProductsReport /> }.into_any(),
                ReportKind::Delivery => view! {
                    <ShareReport title="Delivery Performance" slices=delivery_performance_data() />
                }.into_any(),
                ReportKind::Customers => view! {
                    <ShareReport title="Customer Segments" slices=customer_segment_data() />
                }.into_any(),
                ReportKind::Inventory => view! { <InventoryReport /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn SalesReport() -> impl IntoView {
    let months = monthly_sales_data();
    let summary = summarize_sales(&months);
    let growth = month_over_month_growth(&months);

    view! {
        <div class="stat-cards">
            <StatCard
                label="Total Sales"
                icon_name="reports"
                value=Signal::stored(format_rupees(summary.total_sales))
                tone=CardTone::Good
            />
            <StatCard
                label="Total Orders"
                icon_name="orders"
                value=Signal::stored(format_number_int(f64::from(summary.total_orders)))
            />
            <StatCard
                label="Average per Month"
                icon_name="reports"
                value=Signal::stored(format_rupees(summary.average_monthly_sales.round()))
            />
            <StatCard
                label="Return Rate"
                icon_name="refresh"
                value=Signal::stored(format_percent(summary.return_rate))
                tone=CardTone::Warning
                subtitle=Signal::stored(summary.best_month.map(|m| format!("Best month: {}", m)))
            />
        </div>

        <div class="table-container">
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">{"Month"}</th>
                        <th class="table__header-cell table__header-cell--right">{"Sales"}</th>
                        <th class="table__header-cell table__header-cell--right">{"Orders"}</th>
                        <th class="table__header-cell table__header-cell--right">{"Returns"}</th>
                        <th class="table__header-cell table__header-cell--right">{"Growth"}</th>
                    </tr>
                </thead>
                <tbody>
                    {months.into_iter().zip(growth).map(|(m, (_, g))| {
                        let growth_class = match g {
                            Some(v) if v < 0.0 => "table__cell table__cell--right table__cell--negative",
                            _ => "table__cell table__cell--right",
                        };
                        view! {
                            <tr class="table__row">
                                <td class="table__cell">{m.month}</td>
                                <td class="table__cell table__cell--right">{format_rupees(m.sales)}</td>
                                <td class="table__cell table__cell--right">{m.orders}</td>
                                <td class="table__cell table__cell--right">{m.returns}</td>
                                <td class=growth_class>{g.map(format_percent).unwrap_or_default()}</td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn ProductsReport() -> impl IntoView {
    let products = fastest_growing(&product_performance_data());

    view! {
        <div class="table-container">
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">{"Product"}</th>
                        <th class="table__header-cell table__header-cell--right">{"Sales"}</th>
                        <th class="table__header-cell table__header-cell--right">{"Growth"}</th>
                    </tr>
                </thead>
                <tbody>
                    {products.into_iter().map(|p| view! {
                        <tr class="table__row">
                            <td class="table__cell">{p.name}</td>
                            <td class="table__cell table__cell--right">{format_rupees(p.sales)}</td>
                            <td class="table__cell table__cell--right">{format_percent(p.growth)}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

/// Распределение по сегментам с полосой доли
#[component]
fn ShareReport(#[prop(into)] title: String, slices: Vec<ShareSlice>) -> impl IntoView {
    let shares = share_percentages(&slices);

    view! {
        <div class="overview-panel">
            <h3 class="overview-panel__title">{title}</h3>
            <table class="table__data">
                <tbody>
                    {shares.into_iter().map(|(name, pct)| view! {
                        <tr class="table__row">
                            <td class="table__cell">{name}</td>
                            <td class="table__cell" style="width: 60%;">
                                <div class="share-bar">
                                    <div class="share-bar__fill" style=format!("width: {:.1}%;", pct)></div>
                                </div>
                            </td>
                            <td class="table__cell table__cell--right">{format_percent(pct)}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn InventoryReport() -> impl IntoView {
    let items = inventory_status_data();
    let shortfall = inventory_shortfall(&items);

    view! {
        <div class="table-container">
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">{"Category"}</th>
                        <th class="table__header-cell table__header-cell--right">{"Stock"}</th>
                        <th class="table__header-cell table__header-cell--right">{"Demand"}</th>
                        <th class="table__header-cell table__header-cell--right">{"Shortfall"}</th>
                    </tr>
                </thead>
                <tbody>
                    {items.into_iter().map(|item| {
                        let gap = shortfall
                            .iter()
                            .find(|(name, _)| *name == item.name)
                            .map(|(_, gap)| *gap);
                        let row_class = if gap.is_some() {
                            "table__row table__row--warning"
                        } else {
                            "table__row"
                        };
                        view! {
                            <tr class=row_class>
                                <td class="table__cell">{item.name}</td>
                                <td class="table__cell table__cell--right">{format_number_int(item.stock)}</td>
                                <td class="table__cell table__cell--right">{format_number_int(item.demand)}</td>
                                <td class="table__cell table__cell--right">
                                    {gap.map(format_number_int).unwrap_or_default()}
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}
