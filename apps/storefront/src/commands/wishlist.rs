//! # Wishlist Commands
//!
//! The heart button on product cards and the wishlist overlay.

use atelier_core::{CartAction, CartState, Catalog, Product};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::StoreState;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistResponse {
    pub items: Vec<Product>,
    pub count: usize,
    pub is_wishlist_open: bool,
}

impl From<&CartState> for WishlistResponse {
    fn from(state: &CartState) -> Self {
        WishlistResponse {
            items: state.wishlist().to_vec(),
            count: state.wishlist_count(),
            is_wishlist_open: state.is_wishlist_open(),
        }
    }
}

pub fn get_wishlist(store: &StoreState) -> WishlistResponse {
    debug!("get_wishlist command");
    store.with_store(|s| WishlistResponse::from(s.state()))
}

/// Saves a product. Saving it again is a no-op.
pub fn add_to_wishlist(
    store: &StoreState,
    catalog: &Catalog,
    product_id: &str,
) -> Result<WishlistResponse, ApiError> {
    debug!(product_id = %product_id, "add_to_wishlist command");

    let product = catalog.require(product_id)?.clone();

    Ok(store.dispatch(CartAction::AddToWishlist { product }, |s| WishlistResponse::from(s)))
}

/// Unsaves a product. Absent ids are a no-op, so unknown ids are not an
/// error here.
pub fn remove_from_wishlist(store: &StoreState, product_id: &str) -> WishlistResponse {
    debug!(product_id = %product_id, "remove_from_wishlist command");

    store.dispatch(
        CartAction::RemoveFromWishlist {
            id: product_id.to_string(),
        },
        |s| WishlistResponse::from(s),
    )
}

/// Flips the wishlist overlay, closing the cart overlay.
pub fn toggle_wishlist(store: &StoreState) -> WishlistResponse {
    debug!("toggle_wishlist command");

    store.dispatch(CartAction::ToggleWishlist, |s| WishlistResponse::from(s))
}
