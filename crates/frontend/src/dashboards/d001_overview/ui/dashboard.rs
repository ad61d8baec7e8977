use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{CardTone, StatCard};
use crate::shared::components::table::{format_number_int, format_percent, format_rupees};
use crate::shared::components::ui::StatusBadge;
use contracts::dashboards::d001_overview::{OverviewSummary, RECENT_ORDERS_LIMIT};
use contracts::domain::a001_customer::mock_customers;
use contracts::domain::a002_delivery_boy::mock_delivery_boys;
use contracts::domain::a003_product::{mock_products, Product};
use contracts::domain::a004_order::mock_orders;
use leptos::prelude::*;

/// Главная страница: сводные карточки по демонстрационным коллекциям
#[component]
pub fn OverviewPage() -> impl IntoView {
    let products = mock_products();
    let orders = mock_orders();
    let summary = OverviewSummary::compute(
        &mock_customers(),
        &mock_delivery_boys(),
        &products,
        &orders,
    );
    let recent_orders = OverviewSummary::recent_orders(&orders, RECENT_ORDERS_LIMIT);
    log::debug!(
        "overview: {} products, {} orders, revenue {}",
        summary.total_products,
        summary.total_orders,
        summary.revenue
    );

    let low_stock: Vec<Product> = products
        .into_iter()
        .filter(|p| summary.low_stock_products.contains(&p.id))
        .collect();
    let low_stock_tone = if low_stock.is_empty() {
        CardTone::Good
    } else {
        CardTone::Warning
    };
    let customers_subtitle = format!(
        "{} active ({})",
        summary.active_customers,
        format_percent(summary.active_customer_share())
    );

    view! {
        <div class="content">
            <PageHeader title="Overview" subtitle="Business at a glance".to_string()>
                {()}
            </PageHeader>

            <div class="stat-cards">
                <StatCard
                    label="Revenue"
                    icon_name="reports"
                    value=Signal::stored(format_rupees(summary.revenue))
                    tone=CardTone::Good
                    subtitle=Signal::stored(Some("Excluding cancelled orders".to_string()))
                />
                <StatCard
                    label="Orders"
                    icon_name="orders"
                    value=Signal::stored(format_number_int(summary.total_orders as f64))
                />
                <StatCard
                    label="Customers"
                    icon_name="customers"
                    value=Signal::stored(format_number_int(summary.total_customers as f64))
                    subtitle=Signal::stored(Some(customers_subtitle))
                />
                <StatCard
                    label="Products"
                    icon_name="products"
                    value=Signal::stored(format_number_int(summary.total_products as f64))
                    tone=low_stock_tone
                    subtitle=Signal::stored(Some(format!("{} low on stock", low_stock.len())))
                />
                <StatCard
                    label="Active Delivery Boys"
                    icon_name="delivery"
                    value=Signal::stored(format_number_int(summary.active_delivery_boys as f64))
                />
                <StatCard
                    label="Inventory Value"
                    icon_name="products"
                    value=Signal::stored(format_rupees(summary.inventory_value))
                />
            </div>

            <div class="overview-panels">
                <div class="overview-panel">
                    <h3 class="overview-panel__title">{"Recent Orders"}</h3>
                    <table class="table__data">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">{"Order ID"}</th>
                                <th class="table__header-cell">{"Customer"}</th>
                                <th class="table__header-cell table__header-cell--right">{"Amount"}</th>
                                <th class="table__header-cell">{"Status"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {recent_orders.into_iter().map(|o| view! {
                                <tr class="table__row">
                                    <td class="table__cell">{o.id}</td>
                                    <td class="table__cell">{o.customer}</td>
                                    <td class="table__cell table__cell--right">{format_rupees(o.amount)}</td>
                                    <td class="table__cell"><StatusBadge status=o.status.as_str() /></td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>

                <div class="overview-panel">
                    <h3 class="overview-panel__title">{"Orders by Status"}</h3>
                    <table class="table__data">
                        <tbody>
                            {summary.orders_by_status.into_iter().map(|(status, count)| view! {
                                <tr class="table__row">
                                    <td class="table__cell"><StatusBadge status=status /></td>
                                    <td class="table__cell table__cell--right">{count}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>

                <div class="overview-panel">
                    <h3 class="overview-panel__title">{"Low Stock"}</h3>
                    {if low_stock.is_empty() {
                        view! { <div class="overview-panel__empty">{"All products are in stock"}</div> }.into_any()
                    } else {
                        view! {
                            <table class="table__data">
                                <tbody>
                                    {low_stock.into_iter().map(|p| view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{p.name}</td>
                                            <td class="table__cell table__cell--right table__cell--warning">
                                                {format!("{} {}", p.stock, p.unit)}
                                            </td>
                                        </tr>
                                    }).collect_view()}
                                </tbody>
                            </table>
                        }.into_any()
                    }}
                </div>
            </div>
        </div>
    }
}
