//! Общий конвейер списочных экранов: поиск, фильтры точного совпадения, сортировка
//!
//! Каждая сущность описывает себя через [`ListEntity`] (поля поиска, поля фильтров,
//! сортировка по умолчанию), экран держит [`ViewQuery`] и на каждое изменение
//! заново вызывает [`select`] над текущей коллекцией.
//!
//! ```rust,ignore
//! use contracts::domain::a001_customer::{mock_customers, Customer};
//! use contracts::shared::list_query::{select, ViewQuery};
//!
//! let customers = mock_customers();
//! let query = ViewQuery::for_entity::<Customer>().with_search("amit");
//! let rows = select(&customers, &query);
//! ```

mod entity;
mod field_value;
mod pipeline;
mod view_query;

pub use entity::{ListEntity, ListField, MatchMode, SearchField};
pub use field_value::{compare_values, FieldValue};
pub use pipeline::{
    apply, compare_records, distinct_values, filter_options, matches_filters, matches_search,
    select,
};
pub use view_query::{CategoricalFilter, SortConfig, SortDirection, ViewQuery};
