use super::entity::{ListEntity, ListField};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn is_ascending(self) -> bool {
        matches!(self, Self::Ascending)
    }

    pub fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Поле и направление сортировки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F: ListField> SortConfig<F> {
    pub const fn ascending(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    pub const fn descending(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Descending,
        }
    }

    /// Клик по заголовку колонки: повторный клик по колонке с сортировкой
    /// по возрастанию переключает на убывание, все остальное дает
    /// сортировку по возрастанию по выбранной колонке.
    pub fn request(self, field: F) -> Self {
        if self.field == field && self.direction.is_ascending() {
            Self::descending(field)
        } else {
            Self::ascending(field)
        }
    }
}

/// Фильтр точного совпадения по одному полю
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoricalFilter<F> {
    pub field: F,
    pub value: String,
}

/// Состояние списка: строка поиска, фильтры и сортировка.
///
/// Значение неизменяемое: каждый `with_*` возвращает новый запрос.
/// В фильтрах хранятся только активные (непустые) значения.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewQuery<F> {
    search: String,
    filters: Vec<CategoricalFilter<F>>,
    sort: SortConfig<F>,
}

impl<F: ListField> ViewQuery<F> {
    pub fn new(sort: SortConfig<F>) -> Self {
        Self {
            search: String::new(),
            filters: Vec::new(),
            sort,
        }
    }

    /// Запрос по умолчанию для экрана сущности
    pub fn for_entity<E: ListEntity<Field = F>>() -> Self {
        Self::new(E::DEFAULT_SORT)
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn filters(&self) -> &[CategoricalFilter<F>] {
        &self.filters
    }

    /// Текущее значение фильтра по полю, пустая строка = "все"
    pub fn filter_value(&self, field: F) -> &str {
        self.filters
            .iter()
            .find(|f| f.field == field)
            .map(|f| f.value.as_str())
            .unwrap_or("")
    }

    pub fn sort(&self) -> SortConfig<F> {
        self.sort
    }

    pub fn is_filtered(&self) -> bool {
        !self.search.is_empty() || !self.filters.is_empty()
    }

    pub fn with_search(&self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..self.clone()
        }
    }

    /// Установить фильтр; пустое значение снимает фильтр с поля
    pub fn with_filter(&self, field: F, value: impl Into<String>) -> Self {
        let value = value.into();
        let mut filters: Vec<CategoricalFilter<F>> = self
            .filters
            .iter()
            .filter(|f| f.field != field)
            .cloned()
            .collect();
        if !value.is_empty() {
            filters.push(CategoricalFilter { field, value });
        }
        Self {
            filters,
            ..self.clone()
        }
    }

    pub fn with_sort(&self, sort: SortConfig<F>) -> Self {
        Self {
            sort,
            ..self.clone()
        }
    }

    pub fn with_sort_requested(&self, field: F) -> Self {
        self.with_sort(self.sort.request(field))
    }

    /// Сбросить поиск и фильтры, сортировку оставить
    pub fn cleared(&self) -> Self {
        Self::new(self.sort)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Col {
        Id,
        Name,
        Status,
    }

    impl ListField for Col {
        const ALL: &'static [Self] = &[Col::Id, Col::Name, Col::Status];

        fn key(self) -> &'static str {
            match self {
                Col::Id => "id",
                Col::Name => "name",
                Col::Status => "status",
            }
        }

        fn label(self) -> &'static str {
            self.key()
        }
    }

    #[test]
    fn test_request_sort_toggles() {
        let sort = SortConfig::ascending(Col::Id);

        let sort = sort.request(Col::Id);
        assert_eq!(sort, SortConfig::descending(Col::Id));

        // descending + same column goes back to ascending
        let sort = sort.request(Col::Id);
        assert_eq!(sort, SortConfig::ascending(Col::Id));

        // another column always starts ascending
        let sort = SortConfig::descending(Col::Id).request(Col::Name);
        assert_eq!(sort, SortConfig::ascending(Col::Name));
    }

    #[test]
    fn test_with_filter_replaces_and_clears() {
        let q = ViewQuery::new(SortConfig::ascending(Col::Id))
            .with_filter(Col::Status, "Active")
            .with_filter(Col::Status, "Inactive");
        assert_eq!(q.filters().len(), 1);
        assert_eq!(q.filter_value(Col::Status), "Inactive");

        let q = q.with_filter(Col::Status, "");
        assert!(q.filters().is_empty());
        assert_eq!(q.filter_value(Col::Status), "");
        assert!(!q.is_filtered());
    }

    #[test]
    fn test_queries_are_values() {
        let base = ViewQuery::new(SortConfig::ascending(Col::Id));
        let searched = base.with_search("amit");
        assert_eq!(base.search(), "");
        assert_eq!(searched.search(), "amit");
        assert!(searched.is_filtered());

        let cleared = searched.with_sort_requested(Col::Name).cleared();
        assert_eq!(cleared.search(), "");
        assert_eq!(cleared.sort(), SortConfig::ascending(Col::Name));
    }

    #[test]
    fn test_field_from_key() {
        assert_eq!(Col::from_key("status"), Some(Col::Status));
        assert_eq!(Col::from_key("Status"), None);
        assert_eq!(Col::from_key("price"), None);
    }

    #[test]
    fn test_direction_serde() {
        let json = serde_json::to_string(&SortDirection::Descending).unwrap();
        assert_eq!(json, "\"descending\"");
    }
}
