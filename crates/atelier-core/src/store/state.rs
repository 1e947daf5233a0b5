//! # Store State
//!
//! The state value the reducer transitions, plus its derived selectors.
//!
//! Fields are private: the only way to obtain a changed state is
//! [`reduce`](super::reduce), so the invariants below hold for every
//! `CartState` a caller can observe.
//!
//! ## Invariants
//! - No two cart lines share a `(product id, size)` pair
//! - No two wishlist entries share a product id
//! - Every cart line has `quantity >= 1`
//! - At most one overlay panel is open (see [`Overlay`])

use serde::Serialize;
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Product, Size};

// =============================================================================
// Cart Item
// =============================================================================

/// One cart line: a product in a given size with a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,

    pub size: Size,

    /// Always at least 1.
    pub quantity: i64,
}

impl CartItem {
    pub(crate) fn new(product: Product, size: Size) -> Self {
        CartItem {
            product,
            size,
            quantity: 1,
        }
    }

    /// True if this line is the `(product_id, size)` line.
    #[inline]
    pub fn matches(&self, product_id: &str, size: Size) -> bool {
        self.product.id == product_id && self.size == size
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Overlay
// =============================================================================

/// Which overlay panel is showing.
///
/// ```text
///                toggle_cart                toggle_wishlist
///   ┌──────┐ ───────────────► ┌──────┐ ─────────────────► ┌──────────┐
///   │ None │                  │ Cart │                    │ Wishlist │
///   └──────┘ ◄─────────────── └──────┘ ◄───────────────── └──────────┘
///      ▲        toggle_cart                toggle_cart        │
///      │                                                      │
///      └────────────────────── toggle_wishlist ───────────────┘
///
///   close_modals: any ──► None
/// ```
///
/// "Both open" has no representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Overlay {
    #[default]
    None,
    Cart,
    Wishlist,
}

impl Overlay {
    /// Flips `panel`: closes it if it is the open one, otherwise opens it
    /// (which closes whichever other panel was open).
    pub(crate) fn toggle(self, panel: Overlay) -> Overlay {
        if self == panel {
            Overlay::None
        } else {
            panel
        }
    }
}

// =============================================================================
// Cart State
// =============================================================================

/// Cart lines, wishlist and overlay visibility for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    pub(super) items: Vec<CartItem>,
    pub(super) wishlist: Vec<Product>,
    pub(super) overlay: Overlay,
}

impl CartState {
    /// Empty cart, empty wishlist, no overlay open.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cart lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Wishlist entries in insertion order.
    pub fn wishlist(&self) -> &[Product] {
        &self.wishlist
    }

    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    pub fn is_cart_open(&self) -> bool {
        self.overlay == Overlay::Cart
    }

    pub fn is_wishlist_open(&self) -> bool {
        self.overlay == Overlay::Wishlist
    }

    // =========================================================================
    // Selectors
    // =========================================================================
    // Recomputed on every call; nothing here is cached.

    /// Σ price × quantity over all lines. Zero for an empty cart.
    pub fn cart_total(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Σ quantity over all lines (not the number of lines).
    pub fn cart_item_count(&self) -> i64 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    pub fn wishlist_count(&self) -> usize {
        self.wishlist.len()
    }

    pub fn is_in_wishlist(&self, product_id: &str) -> bool {
        self.wishlist.iter().any(|product| product.id == product_id)
    }

    pub fn is_in_cart(&self, product_id: &str, size: Size) -> bool {
        self.items.iter().any(|item| item.matches(product_id, size))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
