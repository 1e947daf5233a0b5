//! # JSON-Lines IPC
//!
//! One request per input line, one response per output line.
//!
//! ```text
//! stdin:  {"command": "add_to_cart", "productId": "cotton-tee", "size": "M"}
//! stdout: {"ok": {"items": [...], "totals": {"itemCount": 1, ...}, ...}}
//!
//! stdin:  {"command": "add_to_cart", "productId": "cotton-tee", "size": "XXXL"}
//! stdout: {"error": {"code": "VALIDATION_ERROR", "message": "Unknown size: 'XXXL'"}}
//!
//! stdin:  not json
//! stdout: {"error": {"code": "INVALID_REQUEST", "message": "..."}}
//! ```
//!
//! Blank lines are skipped. The loop ends at end of input.

use atelier_core::checkout::{BillingInfo, ShippingInfo};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::commands::catalog::PriceSort;
use crate::commands::{cart, catalog, checkout, config, navigation, wishlist};
use crate::error::ApiError;
use crate::state::AppContext;

/// A command invocation as sent by the front-end.
#[derive(Debug, Clone, Deserialize)]
#[serde(
    tag = "command",
    rename_all = "snake_case",
    rename_all_fields = "camelCase"
)]
pub enum Request {
    GetCatalog {
        #[serde(default)]
        category: Option<String>,
        #[serde(default)]
        sort: Option<PriceSort>,
    },
    GetFeatured {
        count: usize,
    },
    GetProduct {
        product_id: String,
    },
    GetCart,
    AddToCart {
        product_id: String,
        size: String,
    },
    RemoveFromCart {
        product_id: String,
        size: String,
    },
    UpdateQuantity {
        product_id: String,
        size: String,
        quantity: i64,
    },
    ClearCart,
    GetWishlist,
    AddToWishlist {
        product_id: String,
    },
    RemoveFromWishlist {
        product_id: String,
    },
    ToggleCart,
    ToggleWishlist,
    CloseModals,
    GetBadges,
    GetCheckoutSummary,
    SubmitCheckout {
        shipping: ShippingInfo,
        billing: BillingInfo,
    },
    ProcessPayment,
    PaymentStatus,
    CancelPayment,
    GetConfig,
}

impl Request {
    /// Wire name of the command. Used for logging, since the request body
    /// may carry card details.
    pub fn command(&self) -> &'static str {
        match self {
            Request::GetCatalog { .. } => "get_catalog",
            Request::GetFeatured { .. } => "get_featured",
            Request::GetProduct { .. } => "get_product",
            Request::GetCart => "get_cart",
            Request::AddToCart { .. } => "add_to_cart",
            Request::RemoveFromCart { .. } => "remove_from_cart",
            Request::UpdateQuantity { .. } => "update_quantity",
            Request::ClearCart => "clear_cart",
            Request::GetWishlist => "get_wishlist",
            Request::AddToWishlist { .. } => "add_to_wishlist",
            Request::RemoveFromWishlist { .. } => "remove_from_wishlist",
            Request::ToggleCart => "toggle_cart",
            Request::ToggleWishlist => "toggle_wishlist",
            Request::CloseModals => "close_modals",
            Request::GetBadges => "get_badges",
            Request::GetCheckoutSummary => "get_checkout_summary",
            Request::SubmitCheckout { .. } => "submit_checkout",
            Request::ProcessPayment => "process_payment",
            Request::PaymentStatus => "payment_status",
            Request::CancelPayment => "cancel_payment",
            Request::GetConfig => "get_config",
        }
    }
}

/// One output line.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Response {
    Ok(Value),
    Error(ApiError),
}

impl From<Result<Value, ApiError>> for Response {
    fn from(result: Result<Value, ApiError>) -> Self {
        match result {
            Ok(value) => Response::Ok(value),
            Err(err) => Response::Error(err),
        }
    }
}

/// Routes a request to its command and serializes the result.
pub async fn dispatch(ctx: &AppContext, request: Request) -> Result<Value, ApiError> {
    let value = match request {
        Request::GetCatalog { category, sort } => {
            serde_json::to_value(catalog::get_catalog(ctx.catalog(), category.as_deref(), sort))?
        }
        Request::GetFeatured { count } => {
            serde_json::to_value(catalog::get_featured(ctx.catalog(), count))?
        }
        Request::GetProduct { product_id } => serde_json::to_value(catalog::get_product(
            ctx.store()?,
            ctx.catalog(),
            &product_id,
        )?)?,
        Request::GetCart => serde_json::to_value(cart::get_cart(ctx.store()?))?,
        Request::AddToCart { product_id, size } => serde_json::to_value(cart::add_to_cart(
            ctx.store()?,
            ctx.catalog(),
            &product_id,
            &size,
        )?)?,
        Request::RemoveFromCart { product_id, size } => serde_json::to_value(
            cart::remove_from_cart(ctx.store()?, &product_id, &size)?,
        )?,
        Request::UpdateQuantity {
            product_id,
            size,
            quantity,
        } => serde_json::to_value(cart::update_quantity(
            ctx.store()?,
            &product_id,
            &size,
            quantity,
        )?)?,
        Request::ClearCart => serde_json::to_value(cart::clear_cart(ctx.store()?))?,
        Request::GetWishlist => serde_json::to_value(wishlist::get_wishlist(ctx.store()?))?,
        Request::AddToWishlist { product_id } => serde_json::to_value(
            wishlist::add_to_wishlist(ctx.store()?, ctx.catalog(), &product_id)?,
        )?,
        Request::RemoveFromWishlist { product_id } => serde_json::to_value(
            wishlist::remove_from_wishlist(ctx.store()?, &product_id),
        )?,
        Request::ToggleCart => serde_json::to_value(cart::toggle_cart(ctx.store()?))?,
        Request::ToggleWishlist => serde_json::to_value(wishlist::toggle_wishlist(ctx.store()?))?,
        Request::CloseModals => serde_json::to_value(navigation::close_modals(ctx.store()?))?,
        Request::GetBadges => serde_json::to_value(navigation::get_badges(ctx.store()?))?,
        Request::GetCheckoutSummary => serde_json::to_value(checkout::get_checkout_summary(
            ctx.store()?,
            ctx.config(),
        ))?,
        Request::SubmitCheckout { shipping, billing } => {
            serde_json::to_value(checkout::submit_checkout(
                ctx.store()?,
                ctx.config(),
                &shipping,
                &billing,
            )?)?
        }
        Request::ProcessPayment => serde_json::to_value(
            checkout::process_payment(ctx.store()?, ctx.config(), ctx.payments()).await?,
        )?,
        Request::PaymentStatus => {
            serde_json::to_value(checkout::payment_status(ctx.payments()).await)?
        }
        Request::CancelPayment => {
            serde_json::to_value(checkout::cancel_payment(ctx.payments()).await?)?
        }
        Request::GetConfig => serde_json::to_value(config::get_config(ctx.config()))?,
    };

    Ok(value)
}

/// Parses and dispatches one input line.
pub async fn handle_line(ctx: &AppContext, line: &str) -> Response {
    let request: Request = match serde_json::from_str(line) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "Rejected request line");
            return Response::Error(ApiError::invalid_request(format!("Invalid request: {}", e)));
        }
    };

    let command = request.command();
    debug!(command, "Dispatching request");

    let result = dispatch(ctx, request).await;
    if let Err(ref e) = result {
        debug!(command, code = ?e.code, "Command failed");
    }
    result.into()
}

/// Serves requests until `reader` is exhausted.
pub async fn serve<R, W>(ctx: &AppContext, reader: R, mut writer: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = handle_line(ctx, line).await;
        let mut out = serde_json::to_vec(&response)?;
        out.push(b'\n');
        writer.write_all(&out).await?;
        writer.flush().await?;
    }

    info!("Input closed, stopping IPC loop");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_parsing() {
        let request: Request = serde_json::from_str(
            r#"{"command": "update_quantity", "productId": "wool-coat", "size": "L", "quantity": 3}"#,
        )
        .unwrap();
        assert!(matches!(
            request,
            Request::UpdateQuantity { ref product_id, quantity: 3, .. } if product_id == "wool-coat"
        ));

        let request: Request = serde_json::from_str(r#"{"command": "get_catalog"}"#).unwrap();
        assert!(matches!(request, Request::GetCatalog { category: None, sort: None }));

        assert!(serde_json::from_str::<Request>(r#"{"command": "launch_rockets"}"#).is_err());
        assert_eq!(request.command(), "get_catalog");
    }

    #[test]
    fn test_response_shape() {
        let ok = serde_json::to_value(Response::Ok(serde_json::json!(1))).unwrap();
        assert_eq!(ok, serde_json::json!({ "ok": 1 }));

        let err = serde_json::to_value(Response::Error(ApiError::internal("boom"))).unwrap();
        assert_eq!(err["error"]["code"], "INTERNAL");
    }
}
