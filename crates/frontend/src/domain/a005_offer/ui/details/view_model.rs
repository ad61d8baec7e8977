use crate::shared::form_utils::{
    format_date_input, parse_amount_input, parse_count_input, parse_date_input,
};
use crate::shared::list_utils::mutate_collection;
use chrono::NaiveDate;
use contracts::domain::a005_offer::{Offer, OfferDto};
use contracts::shared::collection::{Collection, CollectionResult};
use leptos::prelude::*;

/// Новая акция: статус по датам действия на `today`, счетчик с нуля
pub fn create_offer(
    collection: &mut Collection<Offer>,
    dto: &OfferDto,
    today: NaiveDate,
) -> CollectionResult<()> {
    let id = collection.next_id();
    let mut offer = Offer::new_for_insert(id, dto);
    offer.status = offer.status_on(today);
    collection.insert(offer)
}

/// Форма создания акции; числа и даты хранятся как введенный текст
#[derive(Clone, Copy)]
pub struct OfferDetailsViewModel {
    pub form: RwSignal<OfferDto>,
    pub discount_value: RwSignal<String>,
    pub min_order_value: RwSignal<String>,
    pub usage_limit: RwSignal<String>,
    pub start_date: RwSignal<String>,
    pub end_date: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    items: RwSignal<Collection<Offer>>,
}

impl OfferDetailsViewModel {
    pub fn new(items: RwSignal<Collection<Offer>>, today: NaiveDate) -> Self {
        let dto = OfferDto::starting(today);
        Self {
            discount_value: RwSignal::new(String::new()),
            min_order_value: RwSignal::new(String::new()),
            usage_limit: RwSignal::new(String::new()),
            start_date: RwSignal::new(format_date_input(dto.start_date)),
            end_date: RwSignal::new(format_date_input(dto.end_date)),
            form: RwSignal::new(dto),
            error: RwSignal::new(None),
            items,
        }
    }

    fn parsed_form(&self) -> Result<OfferDto, String> {
        let mut dto = self.form.get_untracked();
        dto.discount_value = self
            .discount_value
            .with_untracked(|raw| parse_amount_input(raw, "discount value"))?;
        dto.min_order_value = self
            .min_order_value
            .with_untracked(|raw| parse_amount_input(raw, "minimum order value"))?;
        dto.usage_limit = self
            .usage_limit
            .with_untracked(|raw| parse_count_input(raw, "usage limit"))?;
        dto.start_date = self
            .start_date
            .with_untracked(|raw| parse_date_input(raw, "start date"))?;
        dto.end_date = self
            .end_date
            .with_untracked(|raw| parse_date_input(raw, "end date"))?;
        Ok(dto)
    }

    pub fn save_command(&self) -> bool {
        let today = chrono::Local::now().date_naive();
        let result = self.parsed_form().and_then(|dto| {
            mutate_collection(self.items, "create", |c| create_offer(c, &dto, today))
        });
        let saved = result.is_ok();
        self.error.set(result.err());
        saved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a005_offer::{mock_offers, DiscountType, OfferField, OfferStatus};
    use contracts::shared::list_query::{select, ViewQuery};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn monsoon_sale() -> OfferDto {
        OfferDto {
            title: "Monsoon Sale".into(),
            description: "Seasonal discount".into(),
            discount_type: DiscountType::Percentage,
            discount_value: 15.0,
            ..OfferDto::starting(day(2023, 7, 1))
        }
    }

    #[test]
    fn test_created_offer_gets_status_from_dates() {
        let mut offers = Collection::from_items(mock_offers());
        create_offer(&mut offers, &monsoon_sale(), day(2023, 6, 20)).unwrap();

        let created = offers.get("OFF006").unwrap();
        assert_eq!(created.status, OfferStatus::Scheduled);
        assert_eq!(created.usage_count, 0);

        let query = ViewQuery::for_entity::<Offer>().with_filter(OfferField::Status, "Scheduled");
        let ids: Vec<&str> = select(offers.items(), &query)
            .into_iter()
            .map(|o| o.id.as_str())
            .collect();
        assert!(ids.contains(&"OFF006"));
    }

    #[test]
    fn test_reversed_dates_rejected() {
        let mut offers = Collection::from_items(mock_offers());
        let dto = OfferDto {
            end_date: day(2023, 6, 1),
            ..monsoon_sale()
        };
        let err = create_offer(&mut offers, &dto, day(2023, 6, 20)).unwrap_err();
        assert_eq!(err.to_string(), "validation failed: End date is before start date");
        assert_eq!(offers.len(), 5);
    }
}
