//! # Navigation Commands
//!
//! What the header needs: badge counts and overlay visibility.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ATELIER                                          ♡ 2        👜 3        │
//! │                                                   │          │          │
//! │                                       wishlistCount          cartCount  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use atelier_core::{CartAction, CartState, Overlay};
use serde::Serialize;
use tracing::debug;

use crate::state::StoreState;

/// Header badge counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeCounts {
    /// Σ quantity across cart lines.
    pub cart_count: i64,
    pub wishlist_count: usize,
}

/// Which overlay is open after a visibility change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayResponse {
    pub overlay: Overlay,
    pub is_cart_open: bool,
    pub is_wishlist_open: bool,
}

impl From<&CartState> for OverlayResponse {
    fn from(state: &CartState) -> Self {
        OverlayResponse {
            overlay: state.overlay(),
            is_cart_open: state.is_cart_open(),
            is_wishlist_open: state.is_wishlist_open(),
        }
    }
}

pub fn get_badges(store: &StoreState) -> BadgeCounts {
    debug!("get_badges command");

    store.with_store(|s| BadgeCounts {
        cart_count: s.cart_item_count(),
        wishlist_count: s.wishlist_count(),
    })
}

/// Closes whichever overlay is open (backdrop click, route change).
pub fn close_modals(store: &StoreState) -> OverlayResponse {
    debug!("close_modals command");

    store.dispatch(CartAction::CloseModals, |s| OverlayResponse::from(s))
}

#[cfg(test)]
mod tests {
    use atelier_core::{Catalog, Size};

    use super::*;

    #[test]
    fn test_badges_count_quantities() {
        let store = StoreState::new();
        let catalog = Catalog::default();
        let boots = catalog.get("leather-boots").unwrap().clone();

        store.with_store_mut(|s| {
            s.add_to_cart(boots.clone(), Size::Large);
            s.add_to_cart(boots.clone(), Size::Large);
            s.add_to_cart(boots.clone(), Size::Small);
            s.add_to_wishlist(boots);
        });

        assert_eq!(
            get_badges(&store),
            BadgeCounts {
                cart_count: 3,
                wishlist_count: 1
            }
        );
    }

    #[test]
    fn test_close_modals_from_any_overlay() {
        let store = StoreState::new();
        store.with_store_mut(|s| s.toggle_cart());

        let overlay = close_modals(&store);
        assert_eq!(overlay.overlay, Overlay::None);
        assert!(!overlay.is_cart_open && !overlay.is_wishlist_open);

        let json = serde_json::to_value(overlay).unwrap();
        assert_eq!(json["overlay"], "none");
    }
}
