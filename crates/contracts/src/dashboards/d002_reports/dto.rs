use serde::{Deserialize, Serialize};

/// Вкладки страницы отчетов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    #[default]
    Sales,
    Products,
    Delivery,
    Customers,
    Inventory,
}

impl ReportKind {
    pub const ALL: [ReportKind; 5] = [
        Self::Sales,
        Self::Products,
        Self::Delivery,
        Self::Customers,
        Self::Inventory,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Sales => "Sales",
            Self::Products => "Products",
            Self::Delivery => "Delivery",
            Self::Customers => "Customers",
            Self::Inventory => "Inventory",
        }
    }
}

/// Продажи за месяц
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySales {
    pub month: String,
    /// ₹
    pub sales: f64,
    pub orders: u32,
    pub returns: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPerformance {
    pub name: String,
    /// ₹
    pub sales: f64,
    /// Рост к прошлому периоду, %
    pub growth: f64,
}

/// Сегмент круговой диаграммы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareSlice {
    pub name: String,
    pub value: f64,
}

/// Остаток против спроса (в процентах от нормы)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryStatus {
    pub name: String,
    pub stock: f64,
    pub demand: f64,
}

/// Итоги по продажам за год
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesSummary {
    pub total_sales: f64,
    pub total_orders: u32,
    pub total_returns: u32,
    pub average_monthly_sales: f64,
    /// Возвраты / заказы, %
    pub return_rate: f64,
    pub best_month: Option<String>,
}
