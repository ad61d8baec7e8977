use contracts::domain::a001_customer::{mock_customers, Customer, CustomerField};
use contracts::domain::a002_delivery_boy::{mock_delivery_boys, DeliveryBoy, DeliveryBoyField};
use contracts::domain::a003_product::{mock_products, Product, ProductField};
use contracts::domain::a004_order::{mock_orders, Order, OrderField};
use contracts::domain::common::Record;
use contracts::shared::list_query::{
    compare_records, distinct_values, select, ListEntity, MatchMode, SortConfig, ViewQuery,
};

fn ids<E: Record>(rows: &[&E]) -> Vec<String> {
    rows.iter().map(|r| r.id().to_string()).collect()
}

#[test]
fn customers_search_amit_finds_only_amit_kumar() {
    let customers = mock_customers();
    for field in [CustomerField::Name, CustomerField::JoinDate, CustomerField::Status] {
        for sort in [SortConfig::ascending(field), SortConfig::descending(field)] {
            let query = ViewQuery::for_entity::<Customer>()
                .with_sort(sort)
                .with_search("amit");
            assert_eq!(ids(&select(&customers, &query)), vec!["CUST003"]);
        }
    }
}

#[test]
fn products_cheese_by_price_descending() {
    let products = mock_products();
    let query = ViewQuery::for_entity::<Product>()
        .with_filter(ProductField::Category, "Cheese")
        .with_sort(SortConfig::descending(ProductField::Price));
    assert_eq!(ids(&select(&products, &query)), vec!["PRD007", "PRD003"]);
}

#[test]
fn orders_search_and_status_filter() {
    let orders = mock_orders();
    let query = ViewQuery::for_entity::<Order>()
        .with_search("ord00")
        .with_filter(OrderField::Status, "Delivered");
    assert_eq!(
        ids(&select(&orders, &query)),
        vec!["ORD001", "ORD003", "ORD005", "ORD008"]
    );
}

#[test]
fn empty_query_returns_permutation_in_sort_order() {
    let products = mock_products();
    let query = ViewQuery::for_entity::<Product>().with_sort(SortConfig::ascending(ProductField::Stock));
    let rows = select(&products, &query);

    assert_eq!(rows.len(), products.len());
    let mut got = ids(&rows);
    let mut expected: Vec<String> = products.iter().map(|p| p.id.clone()).collect();
    got.sort();
    expected.sort();
    assert_eq!(got, expected);

    for pair in rows.windows(2) {
        assert!(pair[0].stock <= pair[1].stock);
    }
}

#[test]
fn search_is_sound_and_complete() {
    let customers = mock_customers();
    for term in ["amit", "EXAMPLE", "9876", "cust01", "Delhi", "zzz", "Sh"] {
        let query = ViewQuery::for_entity::<Customer>().with_search(term);
        let found = ids(&select(&customers, &query));

        let expected: Vec<String> = customers
            .iter()
            .filter(|c| {
                Customer::SEARCH_FIELDS.iter().any(|sf| {
                    let text = c
                        .field_value(sf.field)
                        .map(|v| v.as_text())
                        .unwrap_or_default();
                    match sf.mode {
                        MatchMode::CaseInsensitive => {
                            text.to_lowercase().contains(&term.to_lowercase())
                        }
                        MatchMode::Verbatim => text.contains(term),
                    }
                })
            })
            .map(|c| c.id.clone())
            .collect();

        assert_eq!(found, expected, "term {:?}", term);
    }
}

#[test]
fn address_is_not_searched() {
    let customers = mock_customers();
    let query = ViewQuery::for_entity::<Customer>().with_search("Delhi");
    assert!(select(&customers, &query).is_empty());
}

#[test]
fn filters_are_exact_and_compose_by_intersection() {
    let boys = mock_delivery_boys();
    let base = ViewQuery::for_entity::<DeliveryBoy>();

    for status in distinct_values(&boys, DeliveryBoyField::Status) {
        for route in distinct_values(&boys, DeliveryBoyField::Route) {
            let by_status = ids(&select(&boys, &base.with_filter(DeliveryBoyField::Status, &status)));
            let by_route = ids(&select(&boys, &base.with_filter(DeliveryBoyField::Route, &route)));
            let both = ids(&select(
                &boys,
                &base
                    .with_filter(DeliveryBoyField::Status, &status)
                    .with_filter(DeliveryBoyField::Route, &route),
            ));

            let intersection: Vec<String> = by_status
                .iter()
                .filter(|id| by_route.contains(id))
                .cloned()
                .collect();
            assert_eq!(both, intersection);

            for id in &both {
                let boy = boys.iter().find(|b| &b.id == id).unwrap();
                assert_eq!(boy.status.as_str(), status);
                assert_eq!(boy.route, route);
            }
        }
    }
}

#[test]
fn unknown_filter_value_yields_nothing() {
    let orders = mock_orders();
    let query = ViewQuery::for_entity::<Order>().with_filter(OrderField::Status, "delivered");
    assert!(select(&orders, &query).is_empty());
}

#[test]
fn sorting_is_idempotent() {
    let orders = mock_orders();
    let query = ViewQuery::for_entity::<Order>().with_sort(SortConfig::descending(OrderField::Customer));
    let once: Vec<Order> = select(&orders, &query).into_iter().cloned().collect();
    let twice = select(&once, &query);
    assert_eq!(ids(&twice), once.iter().map(|o| o.id.clone()).collect::<Vec<_>>());
}

#[test]
fn reversing_direction_reverses_distinct_keys() {
    let products = mock_products();
    let asc = ids(&select(
        &products,
        &ViewQuery::for_entity::<Product>().with_sort(SortConfig::ascending(ProductField::Price)),
    ));
    let mut desc = ids(&select(
        &products,
        &ViewQuery::for_entity::<Product>().with_sort(SortConfig::descending(ProductField::Price)),
    ));
    desc.reverse();
    assert_eq!(asc, desc);
}

#[test]
fn equal_keys_keep_collection_order() {
    let orders = mock_orders();
    let query = ViewQuery::for_entity::<Order>().with_sort(SortConfig::ascending(OrderField::Status));
    let rows = select(&orders, &query);
    let delivered: Vec<&str> = rows
        .iter()
        .filter(|o| o.status.as_str() == "Delivered")
        .map(|o| o.id.as_str())
        .collect();
    assert_eq!(delivered, vec!["ORD001", "ORD003", "ORD005", "ORD008"]);

    for pair in rows.windows(2) {
        assert_ne!(
            compare_records(pair[0], pair[1], query.sort()),
            std::cmp::Ordering::Greater
        );
    }
}

#[test]
fn header_clicks_toggle_sort() {
    let query = ViewQuery::for_entity::<Order>();
    let query = query.with_sort_requested(OrderField::Amount);
    assert_eq!(query.sort(), SortConfig::ascending(OrderField::Amount));
    let query = query.with_sort_requested(OrderField::Amount);
    assert_eq!(query.sort(), SortConfig::descending(OrderField::Amount));

    let orders = mock_orders();
    let rows = select(&orders, &query);
    assert_eq!(rows.first().map(|o| o.id.as_str()), Some("ORD005"));
    assert_eq!(rows.last().map(|o| o.id.as_str()), Some("ORD006"));
}
