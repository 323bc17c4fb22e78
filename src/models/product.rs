use serde::{Deserialize, Serialize};

/// Catalog product as served by `GET /products/available`. The catalog is
/// constant, so `product_id` doubles as the unique key with no generator
/// behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: i64,
    pub sku: String,
    pub name: String,
    pub value: f64,
    pub category_name: Category,
    pub total_quantity: i64,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Medication,
    SurgicalSupplies,
    Reagents,
    Equipment,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Medication,
        Category::SurgicalSupplies,
        Category::Reagents,
        Category::Equipment,
    ];
}
