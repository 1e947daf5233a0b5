//! # Catalog
//!
//! The immutable product list offered by the storefront.
//!
//! ## Where the Catalog is Read
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Home showcase ──────► featured(n)                                     │
//! │  Products page ──────► all() / by_category("NEW") / sorted_by_price()  │
//! │  Product detail ─────► require("trench-coat")                          │
//! │  Add to cart ────────► require(id) → Product → ADD_TO_CART             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are validated once, when the catalog is built. After that the
//! catalog is read-only and every product it hands out satisfies the rules in
//! [`validate_product`](crate::validation::validate_product).

use std::collections::HashSet;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::Product;
use crate::validation::validate_product;

#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, validating each product and rejecting duplicate ids.
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());

        for product in &products {
            validate_product(product)?;

            if !seen.insert(product.id.as_str()) {
                return Err(ValidationError::Duplicate {
                    field: "product id".to_string(),
                    value: product.id.clone(),
                }
                .into());
            }
        }

        Ok(Catalog { products })
    }

    /// Every product, in catalog order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Like [`get`](Self::get), but an unknown id is a
    /// [`CoreError::ProductNotFound`].
    pub fn require(&self, id: &str) -> CoreResult<&Product> {
        self.get(id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))
    }

    /// Products whose category label matches, ignoring ASCII case.
    pub fn by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| product.category.eq_ignore_ascii_case(category))
            .collect()
    }

    /// Distinct category labels in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category.as_str()) {
                categories.push(&product.category);
            }
        }
        categories
    }

    /// All products ordered by price. The sort is stable, so equal prices
    /// keep catalog order.
    pub fn sorted_by_price(&self, ascending: bool) -> Vec<&Product> {
        let mut sorted: Vec<&Product> = self.products.iter().collect();
        sort_by_price(&mut sorted, ascending);
        sorted
    }

    /// The first `count` products (home page showcase).
    pub fn featured(&self, count: usize) -> &[Product] {
        &self.products[..count.min(self.products.len())]
    }
}

/// Stable price sort over a product selection, e.g. one category.
pub fn sort_by_price(products: &mut [&Product], ascending: bool) {
    if ascending {
        products.sort_by_key(|product| product.price);
    } else {
        products.sort_by(|a, b| b.price.cmp(&a.price));
    }
}

impl Default for Catalog {
    /// The storefront's seasonal collection.
    fn default() -> Self {
        let seed = |id: &str, name: &str, dollars: i64, image: &str, category: &str| {
            Product::new(id, name, Money::from_major_minor(dollars, 0), image, category)
        };

        Catalog {
            products: vec![
                seed("signature-hoodie", "Signature Hoodie", 299, "assets/images/hero.png", "NEW")
                    .with_description("Heavyweight brushed-back cotton with a dropped shoulder."),
                seed("trench-coat", "Trench Coat", 499, "assets/images/reveal.png", "TRENDING")
                    .with_description("Water-resistant gabardine, double-breasted, storm flap."),
                seed("tailored-trousers", "Tailored Trousers", 249, "assets/images/detail.png", "NEW"),
                seed("cotton-tee", "Cotton Tee", 149, "https://picsum.photos/400/600?random=04", "CLASSIC"),
                seed("bomber-jacket", "Bomber Jacket", 399, "https://picsum.photos/400/600?random=05", "LIMITED"),
                seed("cashmere-sweater", "Cashmere Sweater", 279, "https://picsum.photos/400/600?random=06", "NEW"),
                seed("wool-coat", "Wool Coat", 599, "https://picsum.photos/400/600?random=07", "PREMIUM"),
                seed("silk-blouse", "Silk Blouse", 189, "https://picsum.photos/400/600?random=08", "NEW"),
                seed("denim-jacket", "Denim Jacket", 329, "https://picsum.photos/400/600?random=09", "CLASSIC"),
                seed("leather-boots", "Leather Boots", 449, "https://picsum.photos/400/600?random=10", "LIMITED"),
            ],
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_default_catalog_is_valid() {
        let seeded = Catalog::default();
        let rebuilt = Catalog::new(seeded.all().to_vec()).unwrap();
        assert_eq!(rebuilt.len(), 10);
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::default();
        let coat = catalog.get("trench-coat").unwrap();
        assert_eq!(coat.name, "Trench Coat");
        assert_eq!(coat.price, Money::from_cents(49900));
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_require_unknown_id() {
        let catalog = Catalog::default();
        assert_eq!(catalog.require("trench-coat").unwrap().name, "Trench Coat");

        let err = catalog.require("missing").unwrap_err();
        assert!(matches!(err, CoreError::ProductNotFound(ref id) if id == "missing"));
    }

    #[test]
    fn test_by_category_ignores_case() {
        let catalog = Catalog::default();
        let new_in: Vec<&str> = catalog.by_category("new").iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            new_in,
            ["signature-hoodie", "tailored-trousers", "cashmere-sweater", "silk-blouse"]
        );
        assert!(catalog.by_category("SALE").is_empty());
    }

    #[test]
    fn test_categories_first_seen_order() {
        let catalog = Catalog::default();
        assert_eq!(
            catalog.categories(),
            ["NEW", "TRENDING", "CLASSIC", "LIMITED", "PREMIUM"]
        );
    }

    #[test]
    fn test_sorted_by_price() {
        let catalog = Catalog::default();

        let cheapest = catalog.sorted_by_price(true);
        assert_eq!(cheapest[0].id, "cotton-tee");
        assert_eq!(cheapest.last().unwrap().id, "wool-coat");

        let priciest = catalog.sorted_by_price(false);
        assert_eq!(priciest[0].id, "wool-coat");
    }

    #[test]
    fn test_featured_is_clamped() {
        let catalog = Catalog::default();
        assert_eq!(catalog.featured(3).len(), 3);
        assert_eq!(catalog.featured(50).len(), 10);
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let tee = Product::new("tee", "Tee", Money::from_cents(2000), "", "NEW");
        let err = Catalog::new(vec![tee.clone(), tee]).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Duplicate { .. })
        ));
    }

    #[test]
    fn test_rejects_negative_price() {
        let refund = Product::new("refund", "Refund", Money::from_cents(-100), "", "NEW");
        assert!(Catalog::new(vec![refund]).is_err());
    }
}
