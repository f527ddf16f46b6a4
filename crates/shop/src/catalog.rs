//! Product catalog.

use demo_deck_core::ProductId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog product. Read-only reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub category: String,
    /// Display glyph.
    pub image: String,
    /// 0 to 5 stars.
    pub rating: Decimal,
    pub stock: u32,
}

fn product(
    id: i32,
    name: &str,
    price_cents: i64,
    category: &str,
    image: &str,
    rating_tenths: i64,
    stock: u32,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price: Decimal::new(price_cents, 2),
        category: category.to_string(),
        image: image.to_string(),
        rating: Decimal::new(rating_tenths, 1),
        stock,
    }
}

/// The demo catalog: 30 products across six categories.
#[must_use]
pub fn demo_catalog() -> Vec<Product> {
    vec![
        product(1, "Wireless Headphones", 9999, "Electronics", "🎧", 45, 15),
        product(2, "Coffee Maker", 14999, "Appliances", "☕", 42, 8),
        product(3, "Running Shoes", 7999, "Sports", "👟", 47, 12),
        product(4, "Smartphone", 69999, "Electronics", "📱", 44, 5),
        product(5, "Backpack", 4999, "Accessories", "🎒", 43, 20),
        product(6, "Laptop", 129_999, "Electronics", "💻", 46, 3),
        product(7, "Water Bottle", 2499, "Sports", "🍼", 41, 30),
        product(8, "Desk Lamp", 3999, "Home", "🪔", 40, 18),
        product(9, "Gaming Mouse", 5999, "Electronics", "🖱️", 48, 10),
        product(10, "Yoga Mat", 2999, "Sports", "🧘", 45, 25),
        product(11, "Bluetooth Speaker", 8999, "Electronics", "🔊", 43, 7),
        product(12, "Electric Kettle", 3999, "Appliances", "🫖", 42, 10),
        product(13, "Fitness Tracker", 19999, "Electronics", "⌚", 46, 6),
        product(14, "Portable Charger", 2999, "Accessories", "🔋", 44, 15),
        product(15, "Smartwatch", 24999, "Electronics", "⌚", 45, 4),
        product(16, "Air Purifier", 19999, "Home", "🌬️", 43, 8),
        product(17, "Electric Toothbrush", 4999, "Health", "🪥", 41, 20),
        product(18, "Smart Thermostat", 12999, "Home", "🌡️", 44, 5),
        product(19, "Wireless Charger", 3999, "Accessories", "🔌", 42, 12),
        product(20, "Digital Camera", 49999, "Electronics", "📷", 47, 2),
        product(21, "Smart Light Bulb", 1999, "Home", "💡", 40, 50),
        product(22, "Portable Bluetooth Speaker", 7999, "Electronics", "📻", 45, 15),
        product(23, "Electric Grill", 8999, "Appliances", "🔥", 43, 10),
        product(24, "Smart Doorbell", 12999, "Home", "🔔", 46, 6),
        product(25, "Wireless Earbuds", 14999, "Electronics", "🎧", 48, 8),
        product(26, "Electric Bike", 99999, "Sports", "🚲", 49, 1),
        product(27, "Smart Refrigerator", 199_999, "Appliances", "❄️", 45, 3),
        product(28, "Gaming Console", 39999, "Electronics", "🎮", 47, 2),
        product(29, "Smart Vacuum Cleaner", 29999, "Home", "🧹", 44, 4),
        product(30, "Wireless Keyboard", 4999, "Electronics", "⌨️", 42, 10),
    ]
}
