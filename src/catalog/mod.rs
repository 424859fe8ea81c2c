//! Menu Catalog Module
//!
//! The catalog is an immutable collaborator: commands read products and
//! customization tables from it by id but never write to it.
//! - Domain models (Product, Size, Crust, Topping, Store)
//! - The built-in Checkers Pizza menu
//! - JSON loading for alternative menus

pub mod data;
pub mod models;

use std::collections::HashSet;
use std::path::Path;

use rust_decimal::Decimal;
use thiserror::Error;

pub use models::{Category, CatalogDocument, Crust, Product, Size, Store, Topping};

/// Size applied when a customizable item names none.
pub const DEFAULT_SIZE_ID: &str = "medium";
/// Crust applied when a customizable item names none.
pub const DEFAULT_CRUST_ID: &str = "hand-tossed";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog has no size \"{0}\"")]
    MissingDefaultSize(String),
    #[error("Catalog has no default crust")]
    MissingDefaultCrust,
    #[error("Duplicate product id \"{0}\"")]
    DuplicateProduct(String),
    #[error("Product \"{0}\" has a negative base price")]
    NegativePrice(String),
    #[error("Product \"{product}\" defaults to unknown topping \"{topping}\"")]
    UnknownDefaultTopping { product: String, topping: String },
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read-only product and customization lookups.
#[derive(Debug, Clone)]
pub struct Catalog {
    document: CatalogDocument,
    default_size: Size,
    default_crust: Crust,
}

impl Catalog {
    /// Builds a catalog, checking that the canonical defaults exist.
    pub fn new(document: CatalogDocument) -> Result<Self, CatalogError> {
        let toppings: HashSet<&str> = document.toppings.iter().map(|t| t.id.as_str()).collect();
        let mut seen = HashSet::new();
        for product in &document.products {
            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateProduct(product.id.clone()));
            }
            if product.base_price < Decimal::ZERO {
                return Err(CatalogError::NegativePrice(product.id.clone()));
            }
            if let Some(topping) = product
                .default_toppings
                .iter()
                .find(|t| !toppings.contains(t.as_str()))
            {
                return Err(CatalogError::UnknownDefaultTopping {
                    product: product.id.clone(),
                    topping: topping.clone(),
                });
            }
        }

        let default_size = document
            .sizes
            .iter()
            .find(|s| s.id == DEFAULT_SIZE_ID)
            .cloned()
            .ok_or_else(|| CatalogError::MissingDefaultSize(DEFAULT_SIZE_ID.to_string()))?;

        let default_crust = document
            .crusts
            .iter()
            .find(|c| c.id == DEFAULT_CRUST_ID)
            .or_else(|| document.crusts.iter().find(|c| c.is_default))
            .cloned()
            .ok_or(CatalogError::MissingDefaultCrust)?;

        Ok(Self {
            document,
            default_size,
            default_crust,
        })
    }

    /// The built-in Checkers Pizza — Redmond menu.
    pub fn checkers() -> Result<Self, CatalogError> {
        Self::new(data::checkers_menu())
    }

    /// Loads a catalog document from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        let document: CatalogDocument = serde_json::from_str(&raw)?;
        Self::new(document)
    }

    pub fn store(&self) -> &Store {
        &self.document.store
    }

    pub fn categories(&self) -> &[Category] {
        &self.document.categories
    }

    pub fn lookup_product(&self, id: &str) -> Option<&Product> {
        self.document.products.iter().find(|p| p.id == id)
    }

    /// Products of one category, in catalog order.
    pub fn products_by_category<'a>(
        &'a self,
        category_id: &'a str,
    ) -> impl Iterator<Item = &'a Product> + 'a {
        self.document
            .products
            .iter()
            .filter(move |p| p.category == category_id)
    }

    /// Resolves a size id, falling back to the default size when absent or unknown.
    pub fn lookup_size(&self, id: Option<&str>) -> &Size {
        id.and_then(|id| self.document.sizes.iter().find(|s| s.id == id))
            .unwrap_or(&self.default_size)
    }

    /// Resolves a crust id, falling back to the default crust when absent or unknown.
    pub fn lookup_crust(&self, id: Option<&str>) -> &Crust {
        id.and_then(|id| self.document.crusts.iter().find(|c| c.id == id))
            .unwrap_or(&self.default_crust)
    }

    pub fn sizes(&self) -> &[Size] {
        &self.document.sizes
    }

    pub fn crusts(&self) -> &[Crust] {
        &self.document.crusts
    }

    pub fn list_toppings(&self) -> &[Topping] {
        &self.document.toppings
    }

    pub fn lookup_topping(&self, id: &str) -> Option<&Topping> {
        self.document.toppings.iter().find(|t| t.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkers_catalog_lookups() {
        let catalog = Catalog::checkers().unwrap();

        let pepperoni = catalog.lookup_product("pepperoni").unwrap();
        assert!(pepperoni.customizable);
        assert_eq!(pepperoni.default_toppings, vec!["pepperoni".to_string()]);
        assert!(catalog.lookup_product("calzone").is_none());

        assert_eq!(catalog.lookup_size(None).id, "medium");
        assert_eq!(catalog.lookup_size(Some("giant")).id, "medium");
        assert_eq!(catalog.lookup_size(Some("large")).id, "large");
        assert_eq!(catalog.lookup_crust(None).id, "hand-tossed");
        assert_eq!(catalog.lookup_crust(Some("thin")).id, "thin");
        assert_eq!(catalog.list_toppings().len(), 13);
    }

    #[test]
    fn test_products_by_category_keeps_order() {
        let catalog = Catalog::checkers().unwrap();
        let drinks: Vec<&str> = catalog
            .products_by_category("drinks")
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(drinks.first(), Some(&"coca-cola"));
        assert_eq!(drinks.len(), 8);
    }

    #[test]
    fn test_missing_default_crust_is_rejected() {
        let mut document = data::checkers_menu();
        document.crusts.retain(|c| c.id == "thin");
        assert!(matches!(
            Catalog::new(document),
            Err(CatalogError::MissingDefaultCrust)
        ));
    }

    #[test]
    fn test_duplicate_product_is_rejected() {
        let mut document = data::checkers_menu();
        let copy = document.products[0].clone();
        document.products.push(copy);
        assert!(matches!(
            Catalog::new(document),
            Err(CatalogError::DuplicateProduct(id)) if id == "cheese"
        ));
    }

    #[test]
    fn test_negative_base_price_is_rejected() {
        let mut document = data::checkers_menu();
        document.products[1].base_price = Decimal::new(-100, 2);
        assert!(matches!(
            Catalog::new(document),
            Err(CatalogError::NegativePrice(id)) if id == "pepperoni"
        ));
    }

    #[test]
    fn test_unknown_default_topping_is_rejected() {
        let mut document = data::checkers_menu();
        document.products[1].default_toppings.push("anchovies".into());
        assert!(matches!(
            Catalog::new(document),
            Err(CatalogError::UnknownDefaultTopping { product, topping })
                if product == "pepperoni" && topping == "anchovies"
        ));
    }

    #[test]
    fn test_catalog_document_from_json() {
        let raw = serde_json::json!({
            "store": {
                "id": "s1", "name": "Test", "address": "1 Main", "city": "X",
                "state": "WA", "zip": "00000", "phone": "555",
                "deliveryEstimate": "soon",
                "hours": {
                    "carryout": { "sunThu": "9-5", "friSat": "9-6" },
                    "delivery": { "sunThu": "9-5", "friSat": "9-6" }
                }
            },
            "categories": [{ "id": "drinks", "name": "Drinks" }],
            "products": [{
                "id": "water", "category": "drinks", "name": "Water", "basePrice": 1.99
            }],
            "sizes": [{ "id": "medium", "name": "Medium", "priceModifier": 0 }],
            "crusts": [{ "id": "thin", "name": "Thin", "priceModifier": 0, "default": true }],
            "toppings": []
        });
        let document: CatalogDocument = serde_json::from_value(raw).unwrap();
        let catalog = Catalog::new(document).unwrap();
        assert_eq!(catalog.lookup_crust(None).id, "thin");
        assert!(!catalog.lookup_product("water").unwrap().customizable);
    }
}
