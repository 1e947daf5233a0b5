//! # Store State
//!
//! The session's single cart/wishlist store, shared between the command
//! loop and the payment task.
//!
//! ## Store Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store State Operations                               │
//! │                                                                         │
//! │  Frontend Action          Command                 Store Change          │
//! │  ───────────────          ───────                 ────────────          │
//! │                                                                         │
//! │  Click "Add to Cart" ────► add_to_cart() ────────► ADD_TO_CART          │
//! │                                                                         │
//! │  Change Quantity ────────► update_quantity() ────► UPDATE_QUANTITY      │
//! │                                                                         │
//! │  Click Heart ────────────► add_to_wishlist() ────► ADD_TO_WISHLIST      │
//! │                                                                         │
//! │  Click Bag Icon ─────────► toggle_cart() ────────► TOGGLE_CART          │
//! │                                                                         │
//! │  Payment Completes ──────► (payment task) ───────► CLEAR_CART           │
//! │                                                                         │
//! │  NOTE: Every operation holds the lock for exactly one dispatch.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use atelier_core::{CartAction, CartState, CartStore};
use tracing::debug;

/// Shared handle to the session's [`CartStore`].
///
/// Cloning the handle shares the same store; it never copies the cart.
#[derive(Debug, Clone, Default)]
pub struct StoreState {
    store: Arc<Mutex<CartStore>>,
}

impl StoreState {
    /// Creates the session store: empty cart, empty wishlist, overlays closed.
    pub fn new() -> Self {
        StoreState {
            store: Arc::new(Mutex::new(CartStore::new())),
        }
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust
    /// use storefront::state::StoreState;
    ///
    /// let store = StoreState::new();
    /// let count = store.with_store(|s| s.cart_item_count());
    /// assert_eq!(count, 0);
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CartStore) -> R,
    {
        // A poisoned lock still guards a fully reduced state.
        let store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&store)
    }

    /// Executes a function with write access to the store.
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CartStore) -> R,
    {
        let mut store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut store)
    }

    /// Dispatches one action and reads the resulting state under the same
    /// lock, so the view always matches the reduction it follows.
    pub fn dispatch<F, R>(&self, action: CartAction, view: F) -> R
    where
        F: FnOnce(&CartState) -> R,
    {
        debug!(action = action.kind(), "Dispatching");
        self.with_store_mut(|s| view(s.dispatch(action)))
    }
}

#[cfg(test)]
mod tests {
    use atelier_core::{Catalog, Size};

    use super::*;

    #[test]
    fn test_clones_share_one_store() {
        let catalog = Catalog::default();
        let store = StoreState::new();
        let payment_side = store.clone();

        store.with_store_mut(|s| {
            s.add_to_cart(catalog.get("wool-coat").unwrap().clone(), Size::Large)
        });

        assert!(payment_side.with_store(|s| s.is_in_cart("wool-coat", Size::Large)));

        payment_side.with_store_mut(CartStore::clear_cart);
        assert_eq!(store.with_store(CartStore::cart_item_count), 0);
    }

    #[test]
    fn test_dispatch_returns_view_of_new_state() {
        let store = StoreState::new();
        let coat = Catalog::default().get("wool-coat").unwrap().clone();

        let count = store.dispatch(
            CartAction::AddToCart {
                product: coat,
                size: Size::Small,
            },
            CartState::cart_item_count,
        );
        assert_eq!(count, 1);

        let open = store.dispatch(CartAction::ToggleWishlist, CartState::is_wishlist_open);
        assert!(open);
        assert!(store.with_store(|s| s.state().is_wishlist_open()));
    }
}
