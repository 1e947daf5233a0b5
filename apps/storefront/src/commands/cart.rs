//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│ Payment  │       │
//! │  │  Cart    │     │          │     │   Form   │     │ (3s sim) │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │       ▲                │                                  │             │
//! │       │           add_to_cart                             │             │
//! │       │           update_quantity                         │             │
//! │       │           remove_from_cart                        │             │
//! │       │                │                                  │             │
//! │       │                ▼                                  │             │
//! │       └─────────── clear_cart ◄───────── payment completes┘             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Sizes arrive as strings and are parsed here. Adding in an unknown size is
//! rejected; removing or updating one matches no line and leaves the cart
//! unchanged.

use atelier_core::validation::validate_quantity;
use atelier_core::{CartAction, CartItem, CartState, Catalog, Money, Size};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::StoreState;

/// Totals shown in the cart overlay footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Σ quantity (the bag badge).
    pub item_count: i64,
    pub line_count: usize,
    pub total: Money,
}

/// Cart response including items and totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
    pub is_cart_open: bool,
    pub is_wishlist_open: bool,
}

impl From<&CartState> for CartResponse {
    fn from(state: &CartState) -> Self {
        CartResponse {
            items: state.items().to_vec(),
            totals: CartTotals {
                item_count: state.cart_item_count(),
                line_count: state.line_count(),
                total: state.cart_total(),
            },
            is_cart_open: state.is_cart_open(),
            is_wishlist_open: state.is_wishlist_open(),
        }
    }
}

fn parse_size(size: &str) -> Result<Size, ApiError> {
    Ok(size.parse::<Size>()?)
}

/// Gets the current cart contents.
pub fn get_cart(store: &StoreState) -> CartResponse {
    debug!("get_cart command");
    store.with_store(|s| CartResponse::from(s.state()))
}

/// Adds one unit of a product in a size.
///
/// ## Behavior
/// - Line `(product, size)` already in cart: quantity increases by 1
/// - Otherwise: appended as a new line with quantity 1
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Product detail: pick size "L", click "Add to Cart"                     │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  {"command": "add_to_cart", "productId": "wool-coat", "size": "L"}      │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  ┌────────────────────────────────────────────────────────────────┐    │
/// │  │  1. Parse size (reject unknown)                                │    │
/// │  │  2. Look the product up in the catalog                         │    │
/// │  │  3. Dispatch ADD_TO_CART                                       │    │
/// │  │  4. Return updated cart                                        │    │
/// │  └────────────────────────────────────────────────────────────────┘    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn add_to_cart(
    store: &StoreState,
    catalog: &Catalog,
    product_id: &str,
    size: &str,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, size = %size, "add_to_cart command");

    let size = parse_size(size)?;
    let product = catalog.require(product_id)?.clone();

    Ok(store.dispatch(CartAction::AddToCart { product, size }, |s| CartResponse::from(s)))
}

/// Removes a cart line. Absent lines are a no-op.
pub fn remove_from_cart(
    store: &StoreState,
    product_id: &str,
    size: &str,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, size = %size, "remove_from_cart command");

    let Ok(size) = size.parse::<Size>() else {
        return Ok(get_cart(store));
    };

    Ok(store.dispatch(
        CartAction::RemoveFromCart {
            id: product_id.to_string(),
            size,
        },
        |s| CartResponse::from(s),
    ))
}

/// Sets a line's quantity.
///
/// ## Behavior
/// - Quantity ≤ 0: removes the line
/// - Quantity above [`atelier_core::MAX_ITEM_QUANTITY`]: `VALIDATION_ERROR`
/// - No matching line (including an unknown size): no-op
pub fn update_quantity(
    store: &StoreState,
    product_id: &str,
    size: &str,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, size = %size, quantity = %quantity, "update_quantity command");

    validate_quantity(quantity)?;
    let Ok(size) = size.parse::<Size>() else {
        return Ok(get_cart(store));
    };

    Ok(store.dispatch(
        CartAction::UpdateQuantity {
            id: product_id.to_string(),
            size,
            quantity,
        },
        |s| CartResponse::from(s),
    ))
}

/// Clears all lines. The wishlist and overlay are untouched.
pub fn clear_cart(store: &StoreState) -> CartResponse {
    debug!("clear_cart command");

    store.dispatch(CartAction::ClearCart, |s| CartResponse::from(s))
}

/// Flips the cart overlay, closing the wishlist overlay.
pub fn toggle_cart(store: &StoreState) -> CartResponse {
    debug!("toggle_cart command");

    store.dispatch(CartAction::ToggleCart, |s| CartResponse::from(s))
}
