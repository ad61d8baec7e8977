use super::entity::{ListEntity, MatchMode};
use super::field_value::compare_values;
use super::view_query::{SortConfig, ViewQuery};
use std::cmp::Ordering;

/// Строки для отображения: поиск, затем фильтры, затем сортировка.
///
/// Исходная коллекция не меняется, результат ссылается на ее элементы.
/// Сортировка стабильная: записи с равным ключом сохраняют исходный порядок.
pub fn select<'a, E: ListEntity>(items: &'a [E], query: &ViewQuery<E::Field>) -> Vec<&'a E> {
    let mut rows: Vec<&E> = items
        .iter()
        .filter(|item| matches_search(*item, query.search()))
        .filter(|item| matches_filters(*item, query))
        .collect();
    let sort = query.sort();
    rows.sort_by(|a, b| compare_records(*a, *b, sort));
    rows
}

/// То же, что [`select`], но с копиями записей
pub fn apply<E: ListEntity + Clone>(items: &[E], query: &ViewQuery<E::Field>) -> Vec<E> {
    select(items, query).into_iter().cloned().collect()
}

/// Подходит ли запись под строку поиска (пустая строка подходит всегда)
pub fn matches_search<E: ListEntity>(item: &E, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term_lower = term.to_lowercase();
    E::SEARCH_FIELDS.iter().any(|sf| {
        let Some(value) = item.field_value(sf.field) else {
            return false;
        };
        let text = value.as_text();
        match sf.mode {
            MatchMode::CaseInsensitive => text.to_lowercase().contains(&term_lower),
            MatchMode::Verbatim => text.contains(term),
        }
    })
}

/// Все активные фильтры совпадают точно (логическое И)
pub fn matches_filters<E: ListEntity>(item: &E, query: &ViewQuery<E::Field>) -> bool {
    query.filters().iter().all(|filter| {
        filter.value.is_empty()
            || item
                .field_value(filter.field)
                .map(|v| v.as_text() == filter.value)
                .unwrap_or(false)
    })
}

/// Сравнивает две записи по полю сортировки с учетом направления
pub fn compare_records<E: ListEntity>(a: &E, b: &E, sort: SortConfig<E::Field>) -> Ordering {
    let cmp = compare_values(
        a.field_value(sort.field).as_ref(),
        b.field_value(sort.field).as_ref(),
    );
    if sort.direction.is_ascending() {
        cmp
    } else {
        cmp.reverse()
    }
}

/// Уникальные значения поля в порядке первого появления (варианты для фильтра)
pub fn distinct_values<E: ListEntity>(items: &[E], field: E::Field) -> Vec<String> {
    let mut values: Vec<String> = Vec::new();
    for item in items {
        if let Some(value) = item.field_value(field) {
            let text = value.as_text();
            if !values.contains(&text) {
                values.push(text);
            }
        }
    }
    values
}

/// Варианты выпадающего списка фильтра: базовый набор плюс текущее значение.
///
/// Выбранный фильтр всегда виден в списке, даже если ни одна запись ему
/// больше не соответствует.
pub fn filter_options<I, S>(base: I, current: &str) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut options: Vec<String> = Vec::new();
    for value in base {
        let value = value.into();
        if !options.contains(&value) {
            options.push(value);
        }
    }
    if !current.is_empty() && !options.iter().any(|o| o == current) {
        options.push(current.to_string());
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_query::{FieldValue, ListField, SearchField};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum RowField {
        Code,
        Phone,
        Kind,
        Qty,
    }

    impl ListField for RowField {
        const ALL: &'static [Self] = &[RowField::Code, RowField::Phone, RowField::Kind, RowField::Qty];

        fn key(self) -> &'static str {
            match self {
                RowField::Code => "code",
                RowField::Phone => "phone",
                RowField::Kind => "kind",
                RowField::Qty => "qty",
            }
        }

        fn label(self) -> &'static str {
            self.key()
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        code: &'static str,
        phone: &'static str,
        kind: &'static str,
        qty: Option<f64>,
    }

    impl ListEntity for Row {
        type Field = RowField;
        const SEARCH_FIELDS: &'static [SearchField<RowField>] = &[
            SearchField::text(RowField::Code),
            SearchField::verbatim(RowField::Phone),
        ];
        const FILTER_FIELDS: &'static [RowField] = &[RowField::Kind];
        const DEFAULT_SORT: SortConfig<RowField> = SortConfig::ascending(RowField::Code);

        fn field_value(&self, field: RowField) -> Option<FieldValue> {
            match field {
                RowField::Code => Some(self.code.into()),
                RowField::Phone => Some(self.phone.into()),
                RowField::Kind => Some(self.kind.into()),
                RowField::Qty => self.qty.map(FieldValue::Number),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { code: "B-Two", phone: "98765", kind: "x", qty: Some(2.0) },
            Row { code: "a-one", phone: "12345", kind: "y", qty: None },
            Row { code: "C-Three", phone: "55555", kind: "x", qty: Some(2.0) },
            Row { code: "d-four", phone: "00000", kind: "X", qty: Some(10.0) },
        ]
    }

    fn codes(rows: &[&Row]) -> Vec<&'static str> {
        rows.iter().map(|r| r.code).collect()
    }

    #[test]
    fn test_search_case_insensitive() {
        let items = rows();
        let q = ViewQuery::for_entity::<Row>().with_search("TWO");
        assert_eq!(codes(&select(&items, &q)), vec!["B-Two"]);
    }

    #[test]
    fn test_search_verbatim_phone() {
        let items = rows();
        let q = ViewQuery::for_entity::<Row>().with_search("234");
        assert_eq!(codes(&select(&items, &q)), vec!["a-one"]);
    }

    #[test]
    fn test_search_ignores_non_whitelisted_fields() {
        let items = rows();
        // kind is not a search field
        let q = ViewQuery::for_entity::<Row>().with_search("x");
        assert!(select(&items, &q).is_empty());
    }

    #[test]
    fn test_filter_is_exact() {
        let items = rows();
        let q = ViewQuery::for_entity::<Row>().with_filter(RowField::Kind, "x");
        assert_eq!(codes(&select(&items, &q)), vec!["B-Two", "C-Three"]);
    }

    #[test]
    fn test_sort_missing_is_minimum_and_stable() {
        let items = rows();
        let q = ViewQuery::for_entity::<Row>().with_sort(SortConfig::ascending(RowField::Qty));
        // missing first, then ties keep input order
        assert_eq!(
            codes(&select(&items, &q)),
            vec!["a-one", "B-Two", "C-Three", "d-four"]
        );

        let q = q.with_sort(SortConfig::descending(RowField::Qty));
        assert_eq!(
            codes(&select(&items, &q)),
            vec!["d-four", "B-Two", "C-Three", "a-one"]
        );
    }

    #[test]
    fn test_sort_text_is_lexicographic() {
        let items = rows();
        let q = ViewQuery::for_entity::<Row>();
        assert_eq!(
            codes(&select(&items, &q)),
            vec!["B-Two", "C-Three", "a-one", "d-four"]
        );
    }

    #[test]
    fn test_apply_does_not_mutate_input() {
        let items = rows();
        let before = items.clone();
        let q = ViewQuery::for_entity::<Row>().with_sort(SortConfig::descending(RowField::Code));
        let out = apply(&items, &q);
        assert_eq!(items, before);
        assert_eq!(out.len(), items.len());
        assert_eq!(out[0].code, "d-four");
    }

    #[test]
    fn test_distinct_values_first_seen_order() {
        let items = rows();
        assert_eq!(distinct_values(&items, RowField::Kind), vec!["x", "y", "X"]);
        assert_eq!(distinct_values(&items, RowField::Qty), vec!["2", "10"]);
    }

    #[test]
    fn test_filter_options_keep_current_value() {
        let items = rows();
        let base = distinct_values(&items, RowField::Kind);
        assert_eq!(filter_options(base.clone(), ""), vec!["x", "y", "X"]);
        assert_eq!(filter_options(base.clone(), "y"), vec!["x", "y", "X"]);
        assert_eq!(filter_options(base, "z"), vec!["x", "y", "X", "z"]);
        assert_eq!(filter_options(["a", "a", "b"], ""), vec!["a", "b"]);
    }

    #[test]
    fn test_applied_filter_stays_in_options_after_last_match_removed() {
        let mut items = rows();
        let q = ViewQuery::for_entity::<Row>().with_filter(RowField::Kind, "y");
        items.retain(|r| r.kind != "y");
        assert!(select(&items, &q).is_empty());

        let options = filter_options(distinct_values(&items, RowField::Kind), q.filter_value(RowField::Kind));
        assert!(options.iter().any(|o| o == q.filter_value(RowField::Kind)));
    }
}
