//! # Cart Reducer
//!
//! `(state, action) → new state`. Pure, total, and deterministic: the same
//! action sequence applied to the same starting state always yields the same
//! result, and no action can fail. Identifiers that match nothing turn the
//! action into a no-op. Quantities are clamped to [`MAX_ITEM_QUANTITY`].

use super::action::CartAction;
use super::state::{CartItem, CartState, Overlay};
use crate::MAX_ITEM_QUANTITY;

/// Applies one action to `state`, returning the next state.
pub fn reduce(state: &CartState, action: CartAction) -> CartState {
    let mut next = state.clone();

    match action {
        CartAction::AddToCart { product, size } => {
            match next
                .items
                .iter_mut()
                .find(|item| item.matches(&product.id, size))
            {
                Some(item) => item.quantity = (item.quantity + 1).min(MAX_ITEM_QUANTITY),
                None => next.items.push(CartItem::new(product, size)),
            }
        }

        CartAction::RemoveFromCart { id, size } => {
            next.items.retain(|item| !item.matches(&id, size));
        }

        CartAction::UpdateQuantity { id, size, quantity } => {
            if quantity <= 0 {
                next.items.retain(|item| !item.matches(&id, size));
            } else if let Some(item) = next.items.iter_mut().find(|item| item.matches(&id, size)) {
                item.quantity = quantity.min(MAX_ITEM_QUANTITY);
            }
        }

        CartAction::ClearCart => next.items.clear(),

        CartAction::AddToWishlist { product } => {
            if !next.is_in_wishlist(&product.id) {
                next.wishlist.push(product);
            }
        }

        CartAction::RemoveFromWishlist { id } => {
            next.wishlist.retain(|product| product.id != id);
        }

        CartAction::ToggleCart => next.overlay = next.overlay.toggle(Overlay::Cart),
        CartAction::ToggleWishlist => next.overlay = next.overlay.toggle(Overlay::Wishlist),
        CartAction::CloseModals => next.overlay = Overlay::None,
    }

    next
}

/// Folds `actions` over a fresh [`CartState`].
pub fn replay<I>(actions: I) -> CartState
where
    I: IntoIterator<Item = CartAction>,
{
    actions
        .into_iter()
        .fold(CartState::new(), |state, action| reduce(&state, action))
}

// =============================================================================
// Unit Tests
// =============================================================================
