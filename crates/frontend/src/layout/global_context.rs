use leptos::prelude::*;

/// Экраны панели администратора
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Overview,
    Products,
    Orders,
    Customers,
    DeliveryBoys,
    Offers,
    Subscriptions,
    Reports,
    Settings,
}

impl Page {
    pub const ALL: [Page; 9] = [
        Self::Overview,
        Self::Products,
        Self::Orders,
        Self::Customers,
        Self::DeliveryBoys,
        Self::Offers,
        Self::Subscriptions,
        Self::Reports,
        Self::Settings,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Products => "products",
            Self::Orders => "orders",
            Self::Customers => "customers",
            Self::DeliveryBoys => "deliveryboys",
            Self::Offers => "offers",
            Self::Subscriptions => "subscriptions",
            Self::Reports => "reports",
            Self::Settings => "settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Overview => "Dashboard",
            Self::Products => "Products",
            Self::Orders => "Orders",
            Self::Customers => "Customers",
            Self::DeliveryBoys => "Delivery Boys",
            Self::Offers => "Offers",
            Self::Subscriptions => "Subscriptions",
            Self::Reports => "Reports",
            Self::Settings => "Settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Overview => "dashboard",
            Self::Products => "products",
            Self::Orders => "orders",
            Self::Customers => "customers",
            Self::DeliveryBoys => "delivery",
            Self::Offers => "offers",
            Self::Subscriptions => "subscriptions",
            Self::Reports => "reports",
            Self::Settings => "settings",
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Page::default()),
            left_open: RwSignal::new(true),
        }
    }

    pub fn open(&self, page: Page) {
        if self.active.get_untracked() != page {
            log::debug!("open page {}", page.key());
            self.active.set(page);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_keys_are_unique() {
        let mut keys: Vec<&str> = Page::ALL.iter().map(|p| p.key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), Page::ALL.len());
        assert_eq!(Page::default(), Page::Overview);
    }
}
