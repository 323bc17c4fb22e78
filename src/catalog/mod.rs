//! Fixed product catalog served by `GET /products/available`.
//!
//! There is no store behind this list; it is mock inventory data for the
//! frontend. IDs are non-contiguous on purpose (they mirror the identifiers
//! the frontend already knows about).

use crate::models::{Category, Product};

fn product(
    product_id: i64,
    sku: &str,
    name: &str,
    value: f64,
    category_name: Category,
    total_quantity: i64,
) -> Product {
    Product {
        product_id,
        sku: sku.to_string(),
        name: name.to_string(),
        value,
        category_name,
        total_quantity,
        image_url: None,
    }
}

/// The full catalog, rebuilt on call. 19 records.
pub fn available_products() -> Vec<Product> {
    use Category::*;

    vec![
        product(1, "MED-001", "Acetaminofén 500mg", 8.5, Medication, 5000),
        product(2, "MED-002", "Amoxicilina 250mg/5ml", 12.3, Medication, 2500),
        product(3, "SURG-001", "Kit Sutura Desechable", 25.0, SurgicalSupplies, 1000),
        product(4, "SURG-002", "Guantes Nitrilo Talla M", 4.99, SurgicalSupplies, 8000),
        product(5, "REAG-001", "Tiras Reactivas Glucosa", 15.75, Reagents, 300),
        product(6, "EQUIP-001", "Termómetro Infrarrojo", 45.9, Equipment, 500),
        product(7, "MED-003", "Ibuprofeno 400mg", 9.5, Medication, 4500),
        product(8, "SURG-003", "Tapabocas N95 (Caja)", 15.0, SurgicalSupplies, 6000),
        product(11, "MED-004", "Dexametasona 4mg (Ampolla)", 1.5, Medication, 1500),
        product(12, "EQUIP-002", "Tensiómetro Digital", 55.0, Equipment, 500),
        product(13, "TEST-SIMPLE-001", "Producto Simple 1", 10.5, Medication, 50),
        product(14, "TEST-001", "Producto de Prueba 1", 15.5, Medication, 100),
        product(15, "TEST-002", "Producto de Prueba 2", 25.75, SurgicalSupplies, 50),
        product(18, "NEW-001", "Producto Nuevo 1", 25.5, Medication, 75),
        product(19, "NEW-002", "Producto Nuevo 2", 35.75, SurgicalSupplies, 30),
        product(20, "NEW-003", "Producto Nuevo 3", 45.0, Equipment, 10),
        product(22, "FRESH-001", "Producto Fresco 1", 15.99, Medication, 100),
        product(23, "FRESH-002", "Producto Fresco 2", 29.5, SurgicalSupplies, 25),
        product(24, "FRESH-003", "Producto Fresco 3", 55.0, Equipment, 5),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_nineteen_records() {
        assert_eq!(available_products().len(), 19);
    }

    #[test]
    fn product_ids_are_unique() {
        let products = available_products();
        let ids: HashSet<i64> = products.iter().map(|p| p.product_id).collect();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn skus_are_unique() {
        let products = available_products();
        let skus: HashSet<&str> = products.iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(skus.len(), products.len());
    }

    #[test]
    fn every_category_is_represented_except_reagents_once() {
        let products = available_products();
        let reagents = products
            .iter()
            .filter(|p| p.category_name == Category::Reagents)
            .count();
        assert_eq!(reagents, 1);
        for category in Category::ALL {
            assert!(
                products.iter().any(|p| p.category_name == category),
                "missing category {:?}",
                category
            );
        }
    }

    #[test]
    fn values_and_quantities_are_positive() {
        for p in available_products() {
            assert!(p.value > 0.0, "product {} has non-positive value", p.product_id);
            assert!(p.total_quantity > 0, "product {} has no stock", p.product_id);
        }
    }
}
