use super::dto::{InventoryStatus, MonthlySales, ProductPerformance, ShareSlice};

pub fn monthly_sales_data() -> Vec<MonthlySales> {
    [
        ("Jan", 45000.0, 120, 5),
        ("Feb", 52000.0, 140, 8),
        ("Mar", 48000.0, 130, 7),
        ("Apr", 61000.0, 155, 9),
        ("May", 55000.0, 145, 6),
        ("Jun", 67000.0, 170, 10),
        ("Jul", 72000.0, 185, 12),
        ("Aug", 78000.0, 200, 14),
        ("Sep", 69000.0, 175, 11),
        ("Oct", 74000.0, 190, 13),
        ("Nov", 81000.0, 210, 15),
        ("Dec", 95000.0, 240, 18),
    ]
    .into_iter()
    .map(|(month, sales, orders, returns)| MonthlySales {
        month: month.into(),
        sales,
        orders,
        returns,
    })
    .collect()
}

pub fn product_performance_data() -> Vec<ProductPerformance> {
    [
        ("Full Cream Milk", 32000.0, 15.0),
        ("Toned Milk", 28000.0, 12.0),
        ("Paneer", 18000.0, 20.0),
        ("Curd", 15000.0, 8.0),
        ("Butter", 12000.0, 5.0),
        ("Cheese", 10000.0, 18.0),
        ("Ghee", 9000.0, 10.0),
        ("Flavored Milk", 7000.0, 25.0),
    ]
    .into_iter()
    .map(|(name, sales, growth)| ProductPerformance {
        name: name.into(),
        sales,
        growth,
    })
    .collect()
}

fn slices(items: &[(&str, f64)]) -> Vec<ShareSlice> {
    items
        .iter()
        .map(|(name, value)| ShareSlice {
            name: (*name).into(),
            value: *value,
        })
        .collect()
}

pub fn delivery_performance_data() -> Vec<ShareSlice> {
    slices(&[("On Time", 78.0), ("Delayed", 15.0), ("Early", 7.0)])
}

pub fn customer_segment_data() -> Vec<ShareSlice> {
    slices(&[
        ("Regular", 45.0),
        ("Subscription", 30.0),
        ("Occasional", 15.0),
        ("New", 10.0),
    ])
}

pub fn inventory_status_data() -> Vec<InventoryStatus> {
    [
        ("Milk", 85.0, 90.0),
        ("Paneer", 70.0, 65.0),
        ("Curd", 60.0, 75.0),
        ("Butter", 50.0, 45.0),
        ("Cheese", 40.0, 50.0),
        ("Ghee", 65.0, 60.0),
    ]
    .into_iter()
    .map(|(name, stock, demand)| InventoryStatus {
        name: name.into(),
        stock,
        demand,
    })
    .collect()
}
