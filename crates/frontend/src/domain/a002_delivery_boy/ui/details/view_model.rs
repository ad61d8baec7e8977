use crate::shared::form_utils::FormTarget;
use crate::shared::list_utils::mutate_collection;
use chrono::NaiveDate;
use contracts::domain::a002_delivery_boy::{DeliveryBoy, DeliveryBoyDto};
use contracts::shared::collection::{Collection, CollectionError, CollectionResult};
use leptos::prelude::*;

pub fn apply_form(
    collection: &mut Collection<DeliveryBoy>,
    target: &FormTarget,
    dto: &DeliveryBoyDto,
    today: NaiveDate,
) -> CollectionResult<()> {
    match target.id() {
        Some(id) => {
            let mut boy = collection
                .get(id)
                .cloned()
                .ok_or_else(|| CollectionError::NotFound(id.to_string()))?;
            boy.update(dto);
            collection.update(boy)
        }
        None => {
            let id = collection.next_id();
            collection.insert(DeliveryBoy::new_for_insert(id, dto, today))
        }
    }
}

#[derive(Clone, Copy)]
pub struct DeliveryBoyDetailsViewModel {
    pub form: RwSignal<DeliveryBoyDto>,
    pub error: RwSignal<Option<String>>,
    items: RwSignal<Collection<DeliveryBoy>>,
    target: StoredValue<FormTarget>,
}

impl DeliveryBoyDetailsViewModel {
    pub fn new(items: RwSignal<Collection<DeliveryBoy>>, target: FormTarget) -> Self {
        let dto = target
            .id()
            .and_then(|id| items.with_untracked(|c| c.get(id).map(DeliveryBoyDto::from)))
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

    /// Поле номера активно только для транспорта с регистрацией
    pub fn needs_vehicle_number(&self) -> bool {
        self.form.with(|f| f.vehicle_type.is_registered())
    }

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
    use contracts::domain::a002_delivery_boy::{mock_delivery_boys, DeliveryBoyField, VehicleType, NO_VEHICLE_NUMBER};
    use contracts::domain::common::ActivityStatus;
    use contracts::shared::list_query::{distinct_values, select, ViewQuery};

    fn form() -> DeliveryBoyDto {
        DeliveryBoyDto {
            name: "Arjun Mehta".into(),
            phone: "9988776655".into(),
            email: "arjun.mehta@example.com".into(),
            address: "5 Civil Lines, Delhi".into(),
            status: ActivityStatus::Active,
            route: "Civil Lines".into(),
            vehicle_type: VehicleType::Scooter,
            vehicle_number: "DL-3S-ZZ-4321".into(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
    }

    #[test]
    fn test_added_route_becomes_filterable() {
        let mut boys = Collection::from_items(mock_delivery_boys());
        apply_form(&mut boys, &FormTarget::New, &form(), today()).unwrap();
        assert!(boys.contains("DEL009"));

        let routes = distinct_values(boys.items(), DeliveryBoyField::Route);
        assert!(routes.contains(&"Civil Lines".to_string()));

        let query = ViewQuery::for_entity::<DeliveryBoy>().with_filter(DeliveryBoyField::Route, "Civil Lines");
        let ids: Vec<&str> = select(boys.items(), &query)
            .into_iter()
            .map(|b| b.id.as_str())
            .collect();
        assert_eq!(ids, vec!["DEL009"]);
    }

    #[test]
    fn test_switch_to_bicycle_drops_number() {
        let mut boys = Collection::from_items(mock_delivery_boys());
        let target = FormTarget::Edit("DEL001".into());
        let mut dto = boys.get("DEL001").map(DeliveryBoyDto::from).unwrap();
        dto.vehicle_type = VehicleType::Bicycle;
        apply_form(&mut boys, &target, &dto, today()).unwrap();

        let boy = boys.get("DEL001").unwrap();
        assert_eq!(boy.vehicle_number, NO_VEHICLE_NUMBER);
        assert_eq!(boys.items()[0].id, "DEL001");
    }

    #[test]
    fn test_scooter_without_number_rejected() {
        let mut boys = Collection::from_items(mock_delivery_boys());
        let mut dto = form();
        dto.vehicle_number = String::new();
        let err = apply_form(&mut boys, &FormTarget::New, &dto, today()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "validation failed: Vehicle Scooter requires a registration number"
        );
        assert_eq!(boys.len(), 8);
    }
}
