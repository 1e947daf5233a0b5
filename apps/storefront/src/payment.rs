//! # Payment Simulator
//!
//! Stands in for a card processor: a payment "processes" for a fixed delay
//! and then completes, unless it is cancelled first.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Simulated Payment                                    │
//! │                                                                         │
//! │  start() ──► snapshot cart + summary ──► spawn task                     │
//! │                                              │                          │
//! │                           ┌──────────────────┴──────────────────┐      │
//! │                           ▼                                     ▼      │
//! │                  sleep(delay) elapses                 cancel signal    │
//! │                           │                        (or handle dropped) │
//! │                           ▼                                     │      │
//! │                  CLEAR_CART dispatched                          │      │
//! │                           │                                     ▼      │
//! │                           ▼                               Cancelled    │
//! │                  Completed { confirmation }            (cart intact)   │
//! │                                                                         │
//! │  Status is published on a watch channel; readers never block the task. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The confirmation always describes the snapshot taken at `start()`. Cart
//! edits made while the payment is processing are discarded by the clear.

use std::time::Duration;

use atelier_core::checkout::{CheckoutRates, OrderConfirmation, OrderSummary};
use atelier_core::{CartAction, CoreResult};
use serde::Serialize;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info};

use crate::state::StoreState;

/// Where a payment stands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum PaymentStatus {
    /// No payment has been started this session.
    Idle,
    Processing {
        summary: OrderSummary,
    },
    Completed {
        confirmation: OrderConfirmation,
    },
    Cancelled,
}

impl PaymentStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, PaymentStatus::Processing { .. })
    }
}

/// Handle to a running (or finished) simulated payment.
///
/// Dropping the handle cancels a payment that is still processing.
#[derive(Debug)]
pub struct PaymentHandle {
    status_rx: watch::Receiver<PaymentStatus>,
    cancel_tx: mpsc::Sender<()>,
}

impl PaymentHandle {
    /// Latest published status.
    pub fn status(&self) -> PaymentStatus {
        self.status_rx.borrow().clone()
    }

    pub fn is_pending(&self) -> bool {
        self.status_rx.borrow().is_pending()
    }

    /// Requests cancellation. Has no effect once the payment has finished.
    pub fn cancel(&self) {
        // A full channel already holds a cancel request.
        let _ = self.cancel_tx.try_send(());
    }

    /// Waits until the payment leaves `Processing` and returns the final
    /// status.
    pub async fn wait(&mut self) -> PaymentStatus {
        let settled = self
            .status_rx
            .wait_for(|s| !s.is_pending())
            .await
            .map(|status| status.clone());

        match settled {
            Ok(status) => status,
            // The task is gone; whatever it last published is final.
            Err(_) => self.status_rx.borrow().clone(),
        }
    }
}

/// Starts a simulated payment for the current cart.
///
/// Fails with [`CoreError::EmptyCart`](atelier_core::CoreError::EmptyCart)
/// when there is nothing to pay for. Must be called inside a Tokio runtime.
pub fn start(store: StoreState, rates: CheckoutRates, delay: Duration) -> CoreResult<PaymentHandle> {
    let (items, summary) = store.with_store(|s| {
        let summary = OrderSummary::payable(s.state(), &rates)?;
        Ok::<_, atelier_core::CoreError>((s.state().items().to_vec(), summary))
    })?;

    info!(total = %summary.total, lines = summary.line_count, ?delay, "Payment processing");

    let (status_tx, status_rx) = watch::channel(PaymentStatus::Processing { summary });
    let (cancel_tx, mut cancel_rx) = mpsc::channel::<()>(1);

    tokio::spawn(async move {
        tokio::select! {
            _ = tokio::time::sleep(delay) => {
                store.dispatch(CartAction::ClearCart, |_| ());
                let confirmation = OrderConfirmation::new(items, summary);
                info!(
                    order_id = %confirmation.order_id,
                    total = %confirmation.summary.total,
                    "Payment completed"
                );
                status_tx.send_replace(PaymentStatus::Completed { confirmation });
            }
            // `None` means the handle was dropped.
            _ = cancel_rx.recv() => {
                info!("Payment cancelled");
                status_tx.send_replace(PaymentStatus::Cancelled);
            }
        }
        debug!("Payment task finished");
    });

    Ok(PaymentHandle { status_rx, cancel_tx })
}

#[cfg(test)]
mod tests {
    use atelier_core::{CartStore, Catalog, CoreError, Size};

    use super::*;

    fn store_with_hoodie() -> StoreState {
        let catalog = Catalog::default();
        let store = StoreState::new();
        store.with_store_mut(|s| {
            s.add_to_cart(catalog.get("signature-hoodie").unwrap().clone(), Size::Medium)
        });
        store
    }

    #[tokio::test(start_paused = true)]
    async fn test_payment_completes_and_clears_cart() {
        let store = store_with_hoodie();
        let mut handle = start(store.clone(), CheckoutRates::default(), Duration::from_secs(3)).unwrap();
        assert!(handle.is_pending());

        match handle.wait().await {
            PaymentStatus::Completed { confirmation } => {
                assert_eq!(confirmation.summary.total.cents(), 33291);
                assert_eq!(confirmation.items.len(), 1);
                assert_eq!(confirmation.items[0].product.id, "signature-hoodie");
            }
            other => panic!("expected completion, got {:?}", other),
        }

        assert_eq!(store.with_store(CartStore::cart_item_count), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_keeps_cart() {
        let store = store_with_hoodie();
        let mut handle = start(store.clone(), CheckoutRates::default(), Duration::from_secs(3)).unwrap();

        handle.cancel();
        assert_eq!(handle.wait().await, PaymentStatus::Cancelled);
        assert_eq!(store.with_store(CartStore::cart_item_count), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_cancels() {
        let store = store_with_hoodie();
        let handle = start(store.clone(), CheckoutRates::default(), Duration::from_secs(3)).unwrap();
        drop(handle);

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(store.with_store(CartStore::cart_item_count), 1);
    }

    #[tokio::test]
    async fn test_empty_cart_refused() {
        let err = start(StoreState::new(), CheckoutRates::default(), Duration::ZERO).unwrap_err();
        assert!(matches!(err, CoreError::EmptyCart));
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_value(PaymentStatus::Cancelled).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "cancelled" }));
    }
}
