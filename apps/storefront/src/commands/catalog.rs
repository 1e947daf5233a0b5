//! # Catalog Commands
//!
//! Listing, home showcase and product detail.
//!
//! ## Detail View
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  WOOL COAT                                    PREMIUM           ♥       │
//! │  $599.00                                                    inWishlist  │
//! │                                                                         │
//! │  [XS] [S] [M] [L] [XL] [XXL]     ◄── sizes                              │
//! │             └─┘ └─┘              ◄── sizesInCart: ["M", "L"]            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use atelier_core::catalog::sort_by_price;
use atelier_core::{Catalog, Product, Size};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::state::StoreState;

/// Price ordering for the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceSort {
    Ascending,
    Descending,
}

impl PriceSort {
    pub fn is_ascending(self) -> bool {
        self == PriceSort::Ascending
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub products: Vec<Product>,
    /// Every category label in the catalog, for the filter chips.
    pub categories: Vec<String>,
}

/// A product plus the session's relation to it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub product: Product,
    pub sizes: Vec<Size>,
    pub in_wishlist: bool,
    pub sizes_in_cart: Vec<Size>,
}

/// Lists products, optionally filtered by category and ordered by price.
///
/// Without a sort the catalog order is kept. Price ties keep catalog order.
pub fn get_catalog(
    catalog: &Catalog,
    category: Option<&str>,
    sort: Option<PriceSort>,
) -> CatalogResponse {
    debug!(?category, ?sort, "get_catalog command");

    let products: Vec<&Product> = match (category, sort) {
        (None, None) => catalog.all().iter().collect(),
        (None, Some(sort)) => catalog.sorted_by_price(sort.is_ascending()),
        (Some(label), sort) => {
            let mut selection = catalog.by_category(label);
            if let Some(sort) = sort {
                sort_by_price(&mut selection, sort.is_ascending());
            }
            selection
        }
    };

    CatalogResponse {
        products: products.into_iter().cloned().collect(),
        categories: catalog.categories().into_iter().map(String::from).collect(),
    }
}

/// The first `count` products, for the home showcase.
pub fn get_featured(catalog: &Catalog, count: usize) -> Vec<Product> {
    debug!(count = %count, "get_featured command");
    catalog.featured(count).to_vec()
}

pub fn get_product(
    store: &StoreState,
    catalog: &Catalog,
    product_id: &str,
) -> Result<ProductView, ApiError> {
    debug!(product_id = %product_id, "get_product command");

    let product = catalog.require(product_id)?.clone();

    let (in_wishlist, sizes_in_cart) = store.with_store(|s| {
        let sizes: Vec<Size> = Size::ALL
            .iter()
            .copied()
            .filter(|size| s.is_in_cart(product_id, *size))
            .collect();
        (s.is_in_wishlist(product_id), sizes)
    });

    Ok(ProductView {
        product,
        sizes: Size::ALL.to_vec(),
        in_wishlist,
        sizes_in_cart,
    })
}
