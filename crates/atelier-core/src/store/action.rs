//! # Cart Actions
//!
//! The closed set of state transitions the store accepts. Each variant
//! carries exactly the payload its reducer branch needs.
//!
//! Actions serialize with a `type` tag so a session can be logged and
//! replayed:
//! ```json
//! { "type": "UPDATE_QUANTITY", "id": "cotton-tee", "size": "M", "quantity": 3 }
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Product, Size};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum CartAction {
    AddToCart { product: Product, size: Size },
    RemoveFromCart { id: String, size: Size },
    /// `quantity <= 0` removes the line.
    UpdateQuantity { id: String, size: Size, quantity: i64 },
    ClearCart,
    AddToWishlist { product: Product },
    RemoveFromWishlist { id: String },
    ToggleCart,
    ToggleWishlist,
    CloseModals,
}

impl CartAction {
    /// Wire name of the action, for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            CartAction::AddToCart { .. } => "ADD_TO_CART",
            CartAction::RemoveFromCart { .. } => "REMOVE_FROM_CART",
            CartAction::UpdateQuantity { .. } => "UPDATE_QUANTITY",
            CartAction::ClearCart => "CLEAR_CART",
            CartAction::AddToWishlist { .. } => "ADD_TO_WISHLIST",
            CartAction::RemoveFromWishlist { .. } => "REMOVE_FROM_WISHLIST",
            CartAction::ToggleCart => "TOGGLE_CART",
            CartAction::ToggleWishlist => "TOGGLE_WISHLIST",
            CartAction::CloseModals => "CLOSE_MODALS",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_serialized_tag() {
        let action = CartAction::UpdateQuantity {
            id: "cotton-tee".to_string(),
            size: Size::Medium,
            quantity: 3,
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["type"], action.kind());
        assert_eq!(json["size"], "M");
    }

    #[test]
    fn test_unit_actions_parse_from_tag_only() {
        let action: CartAction = serde_json::from_str(r#"{"type":"TOGGLE_WISHLIST"}"#).unwrap();
        assert_eq!(action, CartAction::ToggleWishlist);
    }
}
