use crate::shared::form_utils::FormTarget;
use crate::shared::list_utils::mutate_collection;
use chrono::NaiveDate;
use contracts::domain::a001_customer::{Customer, CustomerDto};
use contracts::shared::collection::{Collection, CollectionError, CollectionResult};
use leptos::prelude::*;

/// Записать форму в коллекцию: новая запись получает следующий ключ и дату `today`
pub fn apply_form(
    collection: &mut Collection<Customer>,
    target: &FormTarget,
    dto: &CustomerDto,
    today: NaiveDate,
) -> CollectionResult<()> {
    match target.id() {
        Some(id) => {
            let mut customer = collection
                .get(id)
                .cloned()
                .ok_or_else(|| CollectionError::NotFound(id.to_string()))?;
            customer.update(dto);
            collection.update(customer)
        }
        None => {
            let id = collection.next_id();
            collection.insert(Customer::new_for_insert(id, dto, today))
        }
    }
}

/// ViewModel встроенной формы клиента
#[derive(Clone, Copy)]
pub struct CustomerDetailsViewModel {
    pub form: RwSignal<CustomerDto>,
    pub error: RwSignal<Option<String>>,
    items: RwSignal<Collection<Customer>>,
    target: StoredValue<FormTarget>,
}

impl CustomerDetailsViewModel {
    pub fn new(items: RwSignal<Collection<Customer>>, target: FormTarget) -> Self {
        let dto = target
            .id()
            .and_then(|id| items.with_untracked(|c| c.get(id).map(CustomerDto::from)))
            .unwrap_or_default();
        Self {
            form: RwSignal::new(dto),
            error: RwSignal::new(None),
            items,
            target: StoredValue::new(target),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.target.with_value(|t| t.is_edit())
    }

    /// Сохранить форму; `true`, если коллекция приняла запись
    pub fn save_command(&self) -> bool {
        let dto = self.form.get_untracked();
        let target = self.target.get_value();
        let today = chrono::Local::now().date_naive();
        let result = mutate_collection(self.items, &target.action(), |c| {
            apply_form(c, &target, &dto, today)
        });
        let saved = result.is_ok();
        self.error.set(result.err());
        saved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_customer::{mock_customers, CustomerField};
    use contracts::domain::common::ActivityStatus;
    use contracts::shared::list_query::{select, ViewQuery};

    fn form() -> CustomerDto {
        CustomerDto {
            name: "Kavya Nair".into(),
            email: "kavya.nair@example.com".into(),
            phone: "9123456780".into(),
            address: "12 Marine Drive, Kochi".into(),
            status: ActivityStatus::Active,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
    }

    #[test]
    fn test_added_customer_is_listed() {
        let mut customers = Collection::from_items(mock_customers());
        apply_form(&mut customers, &FormTarget::New, &form(), today()).unwrap();

        let added = customers.get("CUST011").unwrap();
        assert_eq!(added.join_date, today());

        let query = ViewQuery::for_entity::<Customer>().with_search("kavya");
        let ids: Vec<&str> = select(customers.items(), &query)
            .into_iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["CUST011"]);
    }

    #[test]
    fn test_new_id_follows_highest_after_delete() {
        let mut customers = Collection::from_items(mock_customers());
        customers.remove("CUST004").unwrap();
        apply_form(&mut customers, &FormTarget::New, &form(), today()).unwrap();
        assert_eq!(customers.items().last().map(|c| c.id.as_str()), Some("CUST011"));
    }

    #[test]
    fn test_edit_keeps_position_and_join_date() {
        let mut customers = Collection::from_items(mock_customers());
        let before = customers.get("CUST003").cloned().unwrap();
        let mut dto = CustomerDto::from(&before);
        dto.status = ActivityStatus::Active;

        let target = FormTarget::Edit("CUST003".into());
        apply_form(&mut customers, &target, &dto, today()).unwrap();

        let after = &customers.items()[2];
        assert_eq!(after.id, "CUST003");
        assert_eq!(after.join_date, before.join_date);
        assert_eq!(after.status, ActivityStatus::Active);

        let query = ViewQuery::for_entity::<Customer>().with_filter(CustomerField::Status, "Inactive");
        assert!(select(customers.items(), &query).iter().all(|c| c.id != "CUST003"));
    }

    #[test]
    fn test_invalid_form_leaves_collection_unchanged() {
        let mut customers = Collection::from_items(mock_customers());
        let mut dto = form();
        dto.email = "kavya".into();
        let err = apply_form(&mut customers, &FormTarget::New, &dto, today()).unwrap_err();
        assert_eq!(err.to_string(), "validation failed: Invalid email: kavya");
        assert_eq!(customers.len(), 10);

        let gone = FormTarget::Edit("CUST099".into());
        let err = apply_form(&mut customers, &gone, &form(), today()).unwrap_err();
        assert_eq!(err, CollectionError::NotFound("CUST099".into()));
    }
}
