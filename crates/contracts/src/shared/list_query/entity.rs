use super::field_value::FieldValue;
use super::view_query::SortConfig;
use std::fmt::Debug;

/// Набор полей сущности, доступных спискам (ключи колонок)
pub trait ListField: Copy + Eq + Debug + 'static {
    /// Все поля в порядке колонок
    const ALL: &'static [Self];

    /// Ключ поля, совпадает с именем в JSON (`joinDate`, `vehicleType`, ...)
    fn key(self) -> &'static str;

    /// Заголовок колонки
    fn label(self) -> &'static str;

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.key() == key)
    }
}

/// Как поле участвует в текстовом поиске
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Подстрока без учета регистра
    CaseInsensitive,
    /// Подстрока как есть (номера телефонов: у цифр нет регистра)
    Verbatim,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchField<F> {
    pub field: F,
    pub mode: MatchMode,
}

impl<F> SearchField<F> {
    pub const fn text(field: F) -> Self {
        Self {
            field,
            mode: MatchMode::CaseInsensitive,
        }
    }

    pub const fn verbatim(field: F) -> Self {
        Self {
            field,
            mode: MatchMode::Verbatim,
        }
    }
}

/// Trait для записей, которые показываются в списочных экранах.
///
/// Экран задает только конфигурацию: поля поиска, поля фильтров
/// и сортировку по умолчанию. Сам конвейер общий для всех сущностей.
pub trait ListEntity {
    type Field: ListField;

    /// Поля, по которым работает строка поиска
    const SEARCH_FIELDS: &'static [SearchField<Self::Field>];

    /// Поля с фильтром точного совпадения (выпадающие списки)
    const FILTER_FIELDS: &'static [Self::Field];

    const DEFAULT_SORT: SortConfig<Self::Field>;

    /// Значение поля; `None`, если у записи его нет
    fn field_value(&self, field: Self::Field) -> Option<FieldValue>;
}
