//! # Cart/Wishlist Store
//!
//! The authoritative client-side state for the shopping cart and wishlist,
//! and the sole means of mutating it.
//!
//! ## Structure
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Cart Store                                      │
//! │                                                                         │
//! │  caller ──► CartStore::add_to_cart(product, size)                      │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │             dispatch(CartAction::AddToCart { .. })                     │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │             reduce(&state, action) ──► new CartState                   │
//! │                                             │                           │
//! │  caller ◄── cart_total(), cart_item_count(), is_in_cart(..) ◄──┘       │
//! │             (selectors, recomputed on every call)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Cart lines are keyed by `(product id, size)`, wishlist entries by product
//! id. Display names play no part in identity.
//!
//! ## Example
//! ```rust
//! use atelier_core::store::CartStore;
//! use atelier_core::{Money, Product, Size};
//!
//! let tee = Product::new("tee", "Tee", Money::from_cents(2000), "tee.png", "CLASSIC");
//! let mut store = CartStore::new();
//!
//! store.add_to_cart(tee.clone(), Size::Medium);
//! store.add_to_cart(tee, Size::Medium);
//! assert_eq!(store.cart_total(), Money::from_cents(4000));
//! assert_eq!(store.cart_item_count(), 2);
//!
//! store.remove_from_cart("tee", Size::Medium);
//! assert!(store.state().is_empty());
//! ```

mod action;
mod reducer;
mod state;

pub use action::CartAction;
pub use reducer::{reduce, replay};
pub use state::{CartItem, CartState, Overlay};

use crate::money::Money;
use crate::types::{Product, Size};

/// Holds the current [`CartState`] and applies actions to it.
///
/// One instance exists per session. It is created by the application entry
/// point and handed to whatever needs it; there is no global instance.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    state: CartState,
}

impl CartStore {
    /// A store with an empty cart, empty wishlist and no overlay open.
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently committed state.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Runs the reducer and commits its result.
    pub fn dispatch(&mut self, action: CartAction) -> &CartState {
        self.state = reduce(&self.state, action);
        &self.state
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Appends a line with quantity 1, or bumps the existing
    /// `(product.id, size)` line by one.
    pub fn add_to_cart(&mut self, product: Product, size: Size) {
        self.dispatch(CartAction::AddToCart { product, size });
    }

    pub fn remove_from_cart(&mut self, product_id: &str, size: Size) {
        self.dispatch(CartAction::RemoveFromCart {
            id: product_id.to_string(),
            size,
        });
    }

    /// Sets a line's quantity; `quantity <= 0` removes the line.
    pub fn update_quantity(&mut self, product_id: &str, size: Size, quantity: i64) {
        self.dispatch(CartAction::UpdateQuantity {
            id: product_id.to_string(),
            size,
            quantity,
        });
    }

    /// Empties the cart. Wishlist and overlays are untouched.
    pub fn clear_cart(&mut self) {
        self.dispatch(CartAction::ClearCart);
    }

    /// Set-like insert keyed by product id.
    pub fn add_to_wishlist(&mut self, product: Product) {
        self.dispatch(CartAction::AddToWishlist { product });
    }

    pub fn remove_from_wishlist(&mut self, product_id: &str) {
        self.dispatch(CartAction::RemoveFromWishlist {
            id: product_id.to_string(),
        });
    }

    pub fn toggle_cart(&mut self) {
        self.dispatch(CartAction::ToggleCart);
    }

    pub fn toggle_wishlist(&mut self) {
        self.dispatch(CartAction::ToggleWishlist);
    }

    pub fn close_modals(&mut self) {
        self.dispatch(CartAction::CloseModals);
    }

    // =========================================================================
    // Selectors
    // =========================================================================

    pub fn cart_total(&self) -> Money {
        self.state.cart_total()
    }

    pub fn cart_item_count(&self) -> i64 {
        self.state.cart_item_count()
    }

    pub fn wishlist_count(&self) -> usize {
        self.state.wishlist_count()
    }

    pub fn is_in_wishlist(&self, product_id: &str) -> bool {
        self.state.is_in_wishlist(product_id)
    }

    pub fn is_in_cart(&self, product_id: &str, size: Size) -> bool {
        self.state.is_in_cart(product_id, size)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
