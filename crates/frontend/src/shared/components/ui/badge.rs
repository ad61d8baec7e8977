use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    view! {
        <span class=move || format!("badge {}", variant_class())>
            {children()}
        </span>
    }
}

/// Вариант бейджа по тексту статуса записи
pub fn status_variant(status: &str) -> &'static str {
    match status {
        "Active" | "Delivered" => "success",
        "Processing" => "primary",
        "Pending" | "Expiring Soon" | "Scheduled" => "warning",
        "Inactive" | "Cancelled" | "Expired" => "error",
        _ => "neutral",
    }
}

/// Бейдж статуса: цвет выбирается по тексту
#[component]
pub fn StatusBadge(
    #[prop(into)]
    status: String,
) -> impl IntoView {
    let variant = status_variant(&status).to_string();
    view! {
        <Badge variant=variant>{status}</Badge>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_variant() {
        assert_eq!(status_variant("Active"), "success");
        assert_eq!(status_variant("Expiring Soon"), "warning");
        assert_eq!(status_variant("Cancelled"), "error");
        assert_eq!(status_variant("Processing"), "primary");
        assert_eq!(status_variant("Milk"), "neutral");
    }
}
