//! Коллекция записей в памяти: единственный источник данных для списочного экрана
//!
//! Каждая успешная мутация дает новый снимок `items()`, по которому экран
//! заново прогоняет конвейер списка. Порядок записей сохраняется: новые в конце,
//! отредактированные остаются на своем месте.

use crate::domain::common::Record;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    #[error("record {0} already exists")]
    DuplicateId(String),

    #[error("record {0} not found")]
    NotFound(String),

    #[error("validation failed: {0}")]
    Validation(String),
}

pub type CollectionResult<T> = Result<T, CollectionError>;

#[derive(Debug, Clone, PartialEq)]
pub struct Collection<E> {
    items: Vec<E>,
}

impl<E> Default for Collection<E> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<E: Record> Collection<E> {
    /// Коллекция из готовых записей (мок-данные). Записи не проверяются.
    pub fn from_items(items: Vec<E>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&E> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Следующий свободный ключ: префикс + номер на единицу больше максимального.
    ///
    /// Номер дополняется нулями до трех знаков: "CUST011".
    pub fn next_id(&self) -> String {
        let max = self
            .items
            .iter()
            .filter_map(|item| item.id_number())
            .max()
            .unwrap_or(0);
        format!("{}{:03}", E::id_prefix(), max + 1)
    }

    pub fn insert(&mut self, item: E) -> CollectionResult<()> {
        item.validate().map_err(CollectionError::Validation)?;
        if self.contains(item.id()) {
            return Err(CollectionError::DuplicateId(item.id().to_string()));
        }
        self.items.push(item);
        Ok(())
    }

    /// Заменить запись с тем же ключом
    pub fn update(&mut self, item: E) -> CollectionResult<()> {
        item.validate().map_err(CollectionError::Validation)?;
        let slot = self
            .items
            .iter_mut()
            .find(|existing| existing.id() == item.id())
            .ok_or_else(|| CollectionError::NotFound(item.id().to_string()))?;
        *slot = item;
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> CollectionResult<E> {
        let pos = self
            .items
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| CollectionError::NotFound(id.to_string()))?;
        Ok(self.items.remove(pos))
    }

    /// Изменить запись на месте через замыкание; результат проходит валидацию
    pub fn modify<F>(&mut self, id: &str, f: F) -> CollectionResult<()>
    where
        F: FnOnce(&E) -> E,
    {
        let current = self
            .get(id)
            .ok_or_else(|| CollectionError::NotFound(id.to_string()))?;
        let changed = f(current);
        if changed.id() != id {
            return Err(CollectionError::Validation(
                "record id cannot be changed".into(),
            ));
        }
        self.update(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: String,
        name: String,
    }

    impl Item {
        fn new(id: &str, name: &str) -> Self {
            Self {
                id: id.to_string(),
                name: name.to_string(),
            }
        }
    }

    impl Record for Item {
        fn id(&self) -> &str {
            &self.id
        }

        fn title(&self) -> &str {
            &self.name
        }

        fn validate(&self) -> Result<(), String> {
            if self.name.is_empty() {
                return Err("empty name".into());
            }
            Ok(())
        }

        fn entity_index() -> &'static str {
            "t001"
        }

        fn collection_name() -> &'static str {
            "item"
        }

        fn element_name() -> &'static str {
            "Item"
        }

        fn list_name() -> &'static str {
            "Items"
        }

        fn id_prefix() -> &'static str {
            "IT"
        }
    }

    fn sample() -> Collection<Item> {
        Collection::from_items(vec![
            Item::new("IT001", "one"),
            Item::new("IT002", "two"),
            Item::new("IT003", "three"),
        ])
    }

    #[test]
    fn test_insert_and_duplicate() {
        let mut c = sample();
        c.insert(Item::new("IT004", "four")).unwrap();
        assert_eq!(c.len(), 4);
        assert_eq!(
            c.insert(Item::new("IT004", "again")),
            Err(CollectionError::DuplicateId("IT004".into()))
        );
        assert!(matches!(
            c.insert(Item::new("IT005", "")),
            Err(CollectionError::Validation(_))
        ));
    }

    #[test]
    fn test_update_keeps_position() {
        let mut c = sample();
        c.update(Item::new("IT002", "zwei")).unwrap();
        assert_eq!(c.items()[1].name, "zwei");
        assert_eq!(
            c.update(Item::new("IT009", "x")),
            Err(CollectionError::NotFound("IT009".into()))
        );
    }

    #[test]
    fn test_remove() {
        let mut c = sample();
        let removed = c.remove("IT001").unwrap();
        assert_eq!(removed.name, "one");
        assert_eq!(c.len(), 2);
        assert!(c.remove("IT001").is_err());
    }

    #[test]
    fn test_next_id_after_delete_does_not_collide() {
        let mut c = sample();
        c.remove("IT001").unwrap();
        // len + 1 would give IT003, which still exists
        assert_eq!(c.next_id(), "IT004");
        assert_eq!(Collection::<Item>::default().next_id(), "IT001");
    }

    #[test]
    fn test_modify_rejects_id_change() {
        let mut c = sample();
        c.modify("IT003", |it| Item::new(&it.id, "drei")).unwrap();
        assert_eq!(c.get("IT003").map(|it| it.name.as_str()), Some("drei"));
        assert!(c.modify("IT003", |_| Item::new("IT100", "x")).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = CollectionError::NotFound("CUST001".into());
        assert_eq!(err.to_string(), "record CUST001 not found");
    }
}
