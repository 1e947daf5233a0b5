//! # Checkout
//!
//! Order totals, checkout forms and the confirmation produced by a
//! completed payment.
//!
//! ## Totals
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Subtotal   = CartState::cart_total()                    $299.00        │
//! │  Shipping   = flat rate                                    $9.99        │
//! │  Tax        = subtotal × tax rate (8%)                    $23.92        │
//! │  ─────────────────────────────────────────────────────────────          │
//! │  Total      = subtotal + shipping + tax                  $332.91        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! Tax applies to the subtotal only, never to shipping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::store::{CartItem, CartState};
use crate::types::TaxRate;

/// Flat shipping charged on every order ($9.99).
pub const DEFAULT_SHIPPING: Money = Money::from_cents(999);

/// Sales tax applied to the subtotal (8%).
pub const DEFAULT_TAX_RATE: TaxRate = TaxRate::from_bps(800);

// =============================================================================
// Rates
// =============================================================================

/// Shipping and tax settings used to price an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutRates {
    pub shipping: Money,
    pub tax_rate: TaxRate,
}

impl Default for CheckoutRates {
    fn default() -> Self {
        CheckoutRates {
            shipping: DEFAULT_SHIPPING,
            tax_rate: DEFAULT_TAX_RATE,
        }
    }
}

// =============================================================================
// Order Summary
// =============================================================================

/// The totals block shown beside the checkout and payment forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderSummary {
    pub subtotal: Money,
    pub shipping: Money,
    pub tax: Money,
    pub total: Money,
    /// Σ quantity.
    pub item_count: i64,
    /// Distinct cart lines.
    pub line_count: usize,
}

impl OrderSummary {
    /// Prices the current cart. Shipping is included even when the cart is
    /// empty, as the summary panel always shows it.
    pub fn from_state(state: &CartState, rates: &CheckoutRates) -> Self {
        let subtotal = state.cart_total();
        let tax = subtotal.calculate_tax(rates.tax_rate);

        OrderSummary {
            subtotal,
            shipping: rates.shipping,
            tax,
            total: subtotal + rates.shipping + tax,
            item_count: state.cart_item_count(),
            line_count: state.line_count(),
        }
    }

    /// Like [`from_state`](Self::from_state) but refuses an empty cart.
    pub fn payable(state: &CartState, rates: &CheckoutRates) -> CoreResult<Self> {
        if state.is_empty() {
            return Err(CoreError::EmptyCart);
        }
        Ok(Self::from_state(state, rates))
    }
}

// =============================================================================
// Checkout Forms
// =============================================================================

/// Where the order ships.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ShippingInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
}

/// Card details. The billing address is the shipping address when
/// `same_as_shipping` is set; the storefront collects no other address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BillingInfo {
    #[serde(default = "default_same_as_shipping")]
    pub same_as_shipping: bool,
    pub card_number: String,
    /// `MM/YY`
    pub expiry_date: String,
    pub cvv: String,
    pub name_on_card: String,
}

fn default_same_as_shipping() -> bool {
    true
}

impl BillingInfo {
    /// Last four digits of the card, for the confirmation screen.
    pub fn card_last_four(&self) -> String {
        let digits: Vec<char> = self.card_number.chars().filter(char::is_ascii_digit).collect();
        digits[digits.len().saturating_sub(4)..].iter().collect()
    }
}

// =============================================================================
// Order Confirmation
// =============================================================================

/// What a completed (simulated) payment produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderConfirmation {
    #[ts(as = "String")]
    pub order_id: Uuid,
    pub summary: OrderSummary,
    /// The lines that were paid for.
    pub items: Vec<CartItem>,
    #[ts(as = "String")]
    pub completed_at: DateTime<Utc>,
}

impl OrderConfirmation {
    /// Freezes the cart lines and totals under a fresh order id.
    pub fn new(items: Vec<CartItem>, summary: OrderSummary) -> Self {
        OrderConfirmation {
            order_id: Uuid::new_v4(),
            summary,
            items,
            completed_at: Utc::now(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
