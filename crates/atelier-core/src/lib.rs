//! # atelier-core: Pure Business Logic for the Atelier Storefront
//!
//! This crate is the **heart** of the storefront. It contains the catalog,
//! the cart/wishlist store and checkout math as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Atelier Storefront Architecture                     │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (views & effects)                   │   │
//! │  │   Products ──► Detail ──► Cart overlay ──► Checkout ──► Payment │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON-lines IPC                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    storefront commands                          │   │
//! │  │    add_to_cart, toggle_wishlist, process_payment, etc.          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ atelier-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐  ┌─────────┐  ┌─────────┐  ┌──────────┐          │   │
//! │  │   │ catalog │  │  store  │  │checkout │  │validation│          │   │
//! │  │   │ Product │  │ reducer │  │ totals  │  │  forms   │          │   │
//! │  │   │  Size   │  │selectors│  │ confirm │  │  Luhn    │          │   │
//! │  │   └─────────┘  └─────────┘  └─────────┘  └──────────┘          │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO TIMERS • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, Size, TaxRate
//! - [`money`] - Money type with integer arithmetic
//! - [`catalog`] - The product collection and its queries
//! - [`store`] - Cart/wishlist state, actions, reducer and selectors
//! - [`checkout`] - Order totals, checkout forms, confirmations
//! - [`validation`] - Catalog and form validation rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use atelier_core::catalog::Catalog;
//! use atelier_core::checkout::{CheckoutRates, OrderSummary};
//! use atelier_core::store::CartStore;
//! use atelier_core::Size;
//!
//! let catalog = Catalog::default();
//! let mut store = CartStore::new();
//!
//! let tee = catalog.get("cotton-tee").unwrap().clone();
//! store.add_to_cart(tee, Size::Medium);
//!
//! let summary = OrderSummary::from_state(store.state(), &CheckoutRates::default());
//! assert_eq!(summary.subtotal.cents(), 14900);
//! assert_eq!(summary.total.cents(), 14900 + 999 + 1192);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod checkout;
pub mod error;
pub mod money;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Limits
// =============================================================================

/// Maximum quantity of a single cart line.
///
/// The reducer clamps to it, so line totals and the cart total stay far
/// from `i64` overflow.
pub const MAX_ITEM_QUANTITY: i64 = 999;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use store::{CartAction, CartItem, CartState, CartStore, Overlay};
pub use types::*;
