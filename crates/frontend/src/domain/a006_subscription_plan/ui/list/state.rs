use contracts::domain::a006_subscription_plan::{SubscriptionPlan, SubscriptionPlanField};
use contracts::domain::a007_customer_subscription::{
    CustomerSubscription, CustomerSubscriptionField, CustomerSubscriptionStatus,
};
use contracts::domain::common::ActivityStatus;
use contracts::shared::list_query::{filter_options, ListEntity, SortConfig, ViewQuery};
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SubscriptionsTab {
    #[default]
    Plans,
    Customers,
}

/// Поиск и фильтр статуса общие для обеих вкладок, сортировка у каждой своя
#[derive(Clone, Debug, PartialEq)]
pub struct SubscriptionsState {
    pub tab: SubscriptionsTab,
    pub search: String,
    pub status: String,
    pub plans_sort: SortConfig<SubscriptionPlanField>,
    pub subscriptions_sort: SortConfig<CustomerSubscriptionField>,
}

impl Default for SubscriptionsState {
    fn default() -> Self {
        Self {
            tab: SubscriptionsTab::default(),
            search: String::new(),
            status: String::new(),
            plans_sort: SubscriptionPlan::DEFAULT_SORT,
            subscriptions_sort: CustomerSubscription::DEFAULT_SORT,
        }
    }
}

impl SubscriptionsState {
    pub fn plans_query(&self) -> ViewQuery<SubscriptionPlanField> {
        ViewQuery::new(self.plans_sort)
            .with_search(self.search.as_str())
            .with_filter(SubscriptionPlanField::Status, self.status.as_str())
    }

    /// Один список статусов на обе вкладки: фильтр общий, поэтому выбранное
    /// значение остается видимым при переключении вкладки
    pub fn status_options(&self) -> Vec<String> {
        let plan_statuses = ActivityStatus::ALL.iter().map(|s| s.as_str());
        let subscription_statuses = CustomerSubscriptionStatus::ALL.iter().map(|s| s.as_str());
        filter_options(plan_statuses.chain(subscription_statuses), &self.status)
    }

    pub fn subscriptions_query(&self) -> ViewQuery<CustomerSubscriptionField> {
        ViewQuery::new(self.subscriptions_sort)
            .with_search(self.search.as_str())
            .with_filter(CustomerSubscriptionField::Status, self.status.as_str())
    }
}

pub fn create_state() -> RwSignal<SubscriptionsState> {
    RwSignal::new(SubscriptionsState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a006_subscription_plan::mock_subscription_plans;
    use contracts::domain::a007_customer_subscription::mock_customer_subscriptions;
    use contracts::shared::list_query::select;

    #[test]
    fn test_shared_search_and_status() {
        let state = SubscriptionsState {
            search: "daily".into(),
            status: "Active".into(),
            ..Default::default()
        };

        let plans = mock_subscription_plans();
        let plan_ids: Vec<&str> = select(&plans, &state.plans_query())
            .into_iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(plan_ids, vec!["SUB001"]);

        let subs = mock_customer_subscriptions();
        let sub_ids: Vec<&str> = select(&subs, &state.subscriptions_query())
            .into_iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(sub_ids, vec!["CSUB001", "CSUB004"]);
    }

    #[test]
    fn test_empty_status_matches_all() {
        let state = SubscriptionsState::default();
        assert!(!state.plans_query().is_filtered());
        assert!(!state.subscriptions_query().is_filtered());
    }

    #[test]
    fn test_status_survives_tab_switch() {
        let mut state = SubscriptionsState {
            status: "Inactive".into(),
            ..Default::default()
        };
        let on_plans = state.status_options();
        state.tab = SubscriptionsTab::Customers;
        let on_customers = state.status_options();

        assert_eq!(on_plans, on_customers);
        assert_eq!(
            on_customers,
            vec!["Active", "Inactive", "Expiring Soon", "Expired"]
        );
        // фильтр, который отсекает все подписки, виден в списке
        let subs = mock_customer_subscriptions();
        assert!(select(&subs, &state.subscriptions_query()).is_empty());
        assert!(on_customers.iter().any(|o| o == &state.status));
    }
}
