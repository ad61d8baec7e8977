use super::aggregate::Product;

fn product(id: &str, name: &str, category: &str, price: f64, stock: u32, unit: &str) -> Product {
    Product {
        id: id.into(),
        name: name.into(),
        category: category.into(),
        price,
        stock,
        unit: unit.into(),
    }
}

/// Стартовый каталог товаров
pub fn mock_products() -> Vec<Product> {
    vec![
        product("PRD001", "Full Cream Milk", "Milk", 30.0, 250, "500ml Packet"),
        product("PRD002", "Toned Milk", "Milk", 25.0, 320, "500ml Packet"),
        product("PRD003", "Paneer", "Cheese", 80.0, 150, "200g Pack"),
        product("PRD004", "Curd", "Yogurt", 40.0, 200, "400g Cup"),
        product("PRD005", "Butter", "Dairy Fat", 55.0, 180, "100g Pack"),
        product("PRD006", "Ghee", "Dairy Fat", 120.0, 100, "200ml Jar"),
        product("PRD007", "Cheese Slices", "Cheese", 110.0, 90, "10 Slices Pack"),
        product("PRD008", "Buttermilk", "Beverage", 20.0, 300, "200ml Bottle"),
        product("PRD009", "Flavored Yogurt", "Yogurt", 45.0, 120, "100g Cup"),
        product("PRD010", "Cream", "Dairy Fat", 70.0, 80, "100ml Pack"),
    ]
}
