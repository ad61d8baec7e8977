/// Трейт для записи справочника в памяти
///
/// Аналог корня агрегата без БД: ключ, имена для UI и валидация
pub trait Record: Clone {
    // ============================================================================
    // Методы экземпляра (данные конкретной записи)
    // ============================================================================

    /// Бизнес-ключ записи (например, "CUST001")
    fn id(&self) -> &str;

    /// Отображаемое имя записи
    fn title(&self) -> &str;

    /// Проверка перед записью в коллекцию
    fn validate(&self) -> Result<(), String>;

    // ============================================================================
    // Метаданные класса (статические данные)
    // ============================================================================

    /// Индекс сущности в системе (например, "a001")
    fn entity_index() -> &'static str;

    /// Имя коллекции (например, "customer")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число)
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число)
    fn list_name() -> &'static str;

    /// Префикс ключа (например, "CUST")
    fn id_prefix() -> &'static str;

    // ============================================================================
    // Методы с реализацией по умолчанию
    // ============================================================================

    /// Полное имя сущности (например, "a001_customer")
    fn full_name() -> String {
        format!("{}_{}", Self::entity_index(), Self::collection_name())
    }

    /// Числовая часть ключа: "CUST012" -> Some(12)
    fn id_number(&self) -> Option<u32> {
        self.id().strip_prefix(Self::id_prefix())?.parse().ok()
    }
}
