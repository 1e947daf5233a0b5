//! # Payment State
//!
//! Holds the session's most recent payment. Only one payment may be
//! processing at a time; a finished payment stays in the slot so its
//! outcome can still be read.

use std::time::Duration;

use atelier_core::checkout::CheckoutRates;
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::ApiError;
use crate::payment::{self, PaymentHandle, PaymentStatus};
use crate::state::StoreState;

#[derive(Debug, Default)]
pub struct PaymentState {
    current: Mutex<Option<PaymentHandle>>,
}

impl PaymentState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a payment for the store's cart.
    ///
    /// ## Errors
    /// - `PAYMENT_ERROR` while another payment is processing
    /// - `CART_ERROR` when the cart is empty
    pub async fn begin(
        &self,
        store: &StoreState,
        rates: CheckoutRates,
        delay: Duration,
    ) -> Result<PaymentStatus, ApiError> {
        let mut slot = self.current.lock().await;

        if slot.as_ref().is_some_and(PaymentHandle::is_pending) {
            return Err(ApiError::payment("A payment is already in progress"));
        }

        let handle = payment::start(store.clone(), rates, delay)?;
        let status = handle.status();
        *slot = Some(handle);

        Ok(status)
    }

    /// Status of the most recent payment, or `Idle` if none was started.
    pub async fn status(&self) -> PaymentStatus {
        self.current
            .lock()
            .await
            .as_ref()
            .map(PaymentHandle::status)
            .unwrap_or(PaymentStatus::Idle)
    }

    /// Cancels the processing payment and returns its final status.
    ///
    /// The result is `Completed` if the payment finished before the cancel
    /// request reached it.
    pub async fn cancel(&self) -> Result<PaymentStatus, ApiError> {
        let mut slot = self.current.lock().await;

        match slot.as_mut() {
            Some(handle) if handle.is_pending() => {
                debug!("Cancelling payment");
                handle.cancel();
                Ok(handle.wait().await)
            }
            _ => Err(ApiError::payment("No payment in progress")),
        }
    }
}

#[cfg(test)]
mod tests {
    use atelier_core::{Catalog, Size};

    use super::*;
    use crate::error::ErrorCode;

    #[tokio::test(start_paused = true)]
    async fn test_single_pending_payment() {
        let store = StoreState::new();
        store.with_store_mut(|s| {
            s.add_to_cart(Catalog::default().get("cotton-tee").unwrap().clone(), Size::Small)
        });

        let payments = PaymentState::new();
        assert_eq!(payments.status().await, PaymentStatus::Idle);

        let delay = Duration::from_secs(3);
        let first = payments.begin(&store, CheckoutRates::default(), delay).await.unwrap();
        assert!(first.is_pending());

        let second = payments.begin(&store, CheckoutRates::default(), delay).await.unwrap_err();
        assert_eq!(second.code, ErrorCode::PaymentError);

        assert_eq!(payments.cancel().await.unwrap(), PaymentStatus::Cancelled);
        assert_eq!(payments.status().await, PaymentStatus::Cancelled);

        let again = payments.cancel().await.unwrap_err();
        assert_eq!(again.code, ErrorCode::PaymentError);
    }
}
