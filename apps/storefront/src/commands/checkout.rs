//! # Checkout Commands
//!
//! Order summary, form submission and the simulated payment.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout → Payment                                   │
//! │                                                                         │
//! │  Cart overlay                                                           │
//! │       │ "Checkout"                                                      │
//! │       ▼                                                                 │
//! │  get_checkout_summary ──► { subtotal, shipping, tax, total }            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  submit_checkout(shipping, billing)                                     │
//! │       │   • validates both forms                                        │
//! │       │   • refuses an empty cart                                       │
//! │       ▼                                                                 │
//! │  process_payment ──► Processing ──(delay)──► Completed (cart cleared)   │
//! │       │                   │                                             │
//! │       │              cancel_payment ──────► Cancelled (cart intact)     │
//! │       ▼                                                                 │
//! │  payment_status (polled by the payment view)                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use atelier_core::checkout::{BillingInfo, OrderSummary, ShippingInfo};
use atelier_core::validation::{validate_billing, validate_shipping};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::payment::PaymentStatus;
use crate::state::{PaymentState, StoreState, StorefrontConfig};

/// Totals already rendered in the store currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedTotals {
    pub subtotal: String,
    pub shipping: String,
    pub tax: String,
    pub total: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub summary: OrderSummary,
    pub formatted: FormattedTotals,
    pub tax_rate_percent: f64,
}

impl SummaryResponse {
    fn new(summary: OrderSummary, config: &StorefrontConfig) -> Self {
        SummaryResponse {
            formatted: FormattedTotals {
                subtotal: config.format_currency(summary.subtotal.cents()),
                shipping: config.format_currency(summary.shipping.cents()),
                tax: config.format_currency(summary.tax.cents()),
                total: config.format_currency(summary.total.cents()),
            },
            tax_rate_percent: config.rates().tax_rate.percentage(),
            summary,
        }
    }
}

/// Accepted checkout, ready for payment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutAccepted {
    pub summary: SummaryResponse,
    pub card_last_four: String,
}

/// Prices the current cart. Works on an empty cart (shipping still shows).
pub fn get_checkout_summary(store: &StoreState, config: &StorefrontConfig) -> SummaryResponse {
    debug!("get_checkout_summary command");

    let rates = config.rates();
    let summary = store.with_store(|s| OrderSummary::from_state(s.state(), &rates));
    SummaryResponse::new(summary, config)
}

/// Validates the checkout forms against a non-empty cart.
///
/// ## Errors
/// - `VALIDATION_ERROR` for the first invalid field
/// - `CART_ERROR` when the cart is empty
pub fn submit_checkout(
    store: &StoreState,
    config: &StorefrontConfig,
    shipping: &ShippingInfo,
    billing: &BillingInfo,
) -> Result<CheckoutAccepted, ApiError> {
    debug!(email = %shipping.email, "submit_checkout command");

    validate_shipping(shipping)?;
    validate_billing(billing)?;

    let rates = config.rates();
    let summary = store.with_store(|s| OrderSummary::payable(s.state(), &rates))?;

    info!(total = %summary.total, "Checkout accepted");

    Ok(CheckoutAccepted {
        summary: SummaryResponse::new(summary, config),
        card_last_four: billing.card_last_four(),
    })
}

/// Starts the simulated payment for the current cart.
pub async fn process_payment(
    store: &StoreState,
    config: &StorefrontConfig,
    payments: &PaymentState,
) -> Result<PaymentStatus, ApiError> {
    debug!("process_payment command");
    payments
        .begin(store, config.rates(), config.payment_delay())
        .await
}

pub async fn payment_status(payments: &PaymentState) -> PaymentStatus {
    debug!("payment_status command");
    payments.status().await
}

pub async fn cancel_payment(payments: &PaymentState) -> Result<PaymentStatus, ApiError> {
    debug!("cancel_payment command");
    payments.cancel().await
}

#[cfg(test)]
mod tests {
    use atelier_core::{Catalog, Size};

    use super::*;
    use crate::error::ErrorCode;

    fn shipping() -> ShippingInfo {
        ShippingInfo {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@example.com".to_string(),
            address: "1 Navy Yard".to_string(),
            city: "Arlington".to_string(),
            zip_code: "22202".to_string(),
        }
    }

    fn billing() -> BillingInfo {
        BillingInfo {
            same_as_shipping: true,
            card_number: "4242-4242-4242-4242".to_string(),
            expiry_date: "11/30".to_string(),
            cvv: "321".to_string(),
            name_on_card: "Grace Hopper".to_string(),
        }
    }

    #[test]
    fn test_summary_formatting() {
        let store = StoreState::new();
        store.with_store_mut(|s| {
            s.add_to_cart(Catalog::default().get("signature-hoodie").unwrap().clone(), Size::Medium)
        });

        let response = get_checkout_summary(&store, &StorefrontConfig::default());
        assert_eq!(response.formatted.subtotal, "$299.00");
        assert_eq!(response.formatted.shipping, "$9.99");
        assert_eq!(response.formatted.tax, "$23.92");
        assert_eq!(response.formatted.total, "$332.91");
        assert_eq!(response.tax_rate_percent, 8.0);
    }

    #[test]
    fn test_empty_cart_summary_still_shows_shipping() {
        let response = get_checkout_summary(&StoreState::new(), &StorefrontConfig::default());
        assert_eq!(response.summary.subtotal.cents(), 0);
        assert_eq!(response.summary.total.cents(), 999);
    }

    #[test]
    fn test_submit_checkout() {
        let store = StoreState::new();
        let config = StorefrontConfig::default();

        let err = submit_checkout(&store, &config, &shipping(), &billing()).unwrap_err();
        assert_eq!(err.code, ErrorCode::CartError);

        store.with_store_mut(|s| {
            s.add_to_cart(Catalog::default().get("cotton-tee").unwrap().clone(), Size::Small)
        });

        let mut bad = billing();
        bad.cvv = "12".to_string();
        let err = submit_checkout(&store, &config, &shipping(), &bad).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let accepted = submit_checkout(&store, &config, &shipping(), &billing()).unwrap();
        assert_eq!(accepted.card_last_four, "4242");
        assert_eq!(accepted.summary.summary.subtotal.cents(), 14900);
    }
}
