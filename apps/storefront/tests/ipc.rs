//! End-to-end tests: JSON lines in, JSON lines out.

use std::time::Duration;

use atelier_core::Catalog;
use serde_json::{json, Value};
use storefront::ipc;
use storefront::state::{AppContext, StorefrontConfig};

/// Feeds `input` through the IPC loop and returns one parsed value per
/// response line.
async fn session(ctx: &AppContext, input: &str) -> Vec<Value> {
    let mut output: Vec<u8> = Vec::new();
    ipc::serve(ctx, input.as_bytes(), &mut output).await.unwrap();

    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

async fn call(ctx: &AppContext, request: Value) -> Value {
    let mut responses = session(ctx, &format!("{}\n", request)).await;
    assert_eq!(responses.len(), 1);
    responses.remove(0)
}

fn error_code(response: &Value) -> &str {
    response["error"]["code"].as_str().unwrap_or_default()
}

#[tokio::test]
async fn shopping_session_over_json_lines() {
    let ctx = AppContext::bootstrap(StorefrontConfig::default());

    let input = r#"
{"command": "add_to_cart", "productId": "cotton-tee", "size": "M"}
{"command": "add_to_cart", "productId": "cotton-tee", "size": "m"}

{"command": "add_to_cart", "productId": "cotton-tee", "size": "L"}
{"command": "add_to_wishlist", "productId": "wool-coat"}
{"command": "toggle_cart"}
{"command": "toggle_wishlist"}
{"command": "get_badges"}
"#;
    let responses = session(&ctx, input).await;
    assert_eq!(responses.len(), 7);

    let cart = &responses[2]["ok"];
    assert_eq!(cart["items"].as_array().unwrap().len(), 2);
    assert_eq!(cart["totals"]["itemCount"], 3);
    assert_eq!(cart["totals"]["total"], 44700);

    assert_eq!(responses[3]["ok"]["count"], 1);
    assert_eq!(responses[4]["ok"]["isCartOpen"], true);
    assert_eq!(responses[5]["ok"]["isWishlistOpen"], true);
    assert_eq!(
        responses[6]["ok"],
        json!({ "cartCount": 3, "wishlistCount": 1 })
    );

    let cart = call(&ctx, json!({ "command": "get_cart" })).await;
    assert_eq!(cart["ok"]["isCartOpen"], false);
    assert_eq!(cart["ok"]["isWishlistOpen"], true);
}

#[tokio::test]
async fn garbage_is_an_invalid_request() {
    let ctx = AppContext::bootstrap(StorefrontConfig::default());

    let responses = session(
        &ctx,
        "not json\n{\"command\": \"launch_rockets\"}\n{\"command\": \"get_cart\"}\n",
    )
    .await;

    assert_eq!(error_code(&responses[0]), "INVALID_REQUEST");
    assert_eq!(error_code(&responses[1]), "INVALID_REQUEST");
    assert!(responses[2].get("ok").is_some());
}

#[tokio::test]
async fn domain_errors_are_reported() {
    let ctx = AppContext::bootstrap(StorefrontConfig::default());

    let response = call(
        &ctx,
        json!({ "command": "add_to_cart", "productId": "cotton-tee", "size": "XXXL" }),
    )
    .await;
    assert_eq!(error_code(&response), "VALIDATION_ERROR");

    let response = call(&ctx, json!({ "command": "get_product", "productId": "ghost" })).await;
    assert_eq!(error_code(&response), "NOT_FOUND");

    let response = call(
        &ctx,
        json!({ "command": "update_quantity", "productId": "ghost", "size": "M", "quantity": 2 }),
    )
    .await;
    assert_eq!(response["ok"]["items"], json!([]));
}

#[tokio::test]
async fn unknown_size_leaves_cart_unchanged() {
    let ctx = AppContext::bootstrap(StorefrontConfig::default());
    call(
        &ctx,
        json!({ "command": "add_to_cart", "productId": "wool-coat", "size": "M" }),
    )
    .await;

    let input = r#"
{"command": "remove_from_cart", "productId": "wool-coat", "size": "XXXL"}
{"command": "update_quantity", "productId": "wool-coat", "size": "XXXL", "quantity": 3}
"#;
    for response in session(&ctx, input).await {
        let items = response["ok"]["items"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["size"], "M");
        assert_eq!(items[0]["quantity"], 1);
    }
}

#[tokio::test]
async fn oversized_quantity_is_rejected() {
    let ctx = AppContext::bootstrap(StorefrontConfig::default());

    let input = r#"
{"command": "add_to_cart", "productId": "wool-coat", "size": "M"}
{"command": "update_quantity", "productId": "wool-coat", "size": "M", "quantity": 1000000000000000}
{"command": "update_quantity", "productId": "wool-coat", "size": "M", "quantity": 999}
{"command": "add_to_cart", "productId": "wool-coat", "size": "M"}
{"command": "get_checkout_summary"}
"#;
    let responses = session(&ctx, input).await;
    assert_eq!(responses.len(), 5);

    assert_eq!(error_code(&responses[1]), "VALIDATION_ERROR");
    assert_eq!(responses[2]["ok"]["totals"]["itemCount"], 999);
    assert_eq!(responses[3]["ok"]["totals"]["itemCount"], 999);
    assert_eq!(responses[3]["ok"]["totals"]["total"], 59900 * 999);
    assert!(responses[4].get("ok").is_some());
}

#[tokio::test]
async fn missing_store_fails_fast() {
    let ctx = AppContext::new(StorefrontConfig::default(), Catalog::default());

    for command in ["get_cart", "toggle_cart", "get_badges", "process_payment"] {
        let response = call(&ctx, json!({ "command": command })).await;
        assert_eq!(error_code(&response), "STORE_NOT_INITIALIZED", "{}", command);
    }

    // Store-free commands still work.
    let response = call(&ctx, json!({ "command": "get_catalog", "category": "new" })).await;
    assert_eq!(response["ok"]["products"].as_array().unwrap().len(), 4);
}

#[tokio::test(start_paused = true)]
async fn payment_completes_and_clears_cart() {
    let ctx = AppContext::bootstrap(StorefrontConfig::default());

    let response = call(&ctx, json!({ "command": "process_payment" })).await;
    assert_eq!(error_code(&response), "CART_ERROR");

    call(
        &ctx,
        json!({ "command": "add_to_cart", "productId": "signature-hoodie", "size": "M" }),
    )
    .await;

    let response = call(&ctx, json!({ "command": "process_payment" })).await;
    assert_eq!(response["ok"]["status"], "processing");
    assert_eq!(response["ok"]["summary"]["total"], 33291);

    let response = call(&ctx, json!({ "command": "process_payment" })).await;
    assert_eq!(error_code(&response), "PAYMENT_ERROR");

    tokio::time::sleep(Duration::from_secs(5)).await;

    let response = call(&ctx, json!({ "command": "payment_status" })).await;
    assert_eq!(response["ok"]["status"], "completed");
    let confirmation = &response["ok"]["confirmation"];
    assert_eq!(confirmation["summary"]["total"], 33291);
    assert_eq!(confirmation["items"][0]["id"], "signature-hoodie");
    assert!(confirmation["orderId"].as_str().is_some());

    let response = call(&ctx, json!({ "command": "get_badges" })).await;
    assert_eq!(response["ok"]["cartCount"], 0);
}

#[tokio::test(start_paused = true)]
async fn cancelled_payment_keeps_cart() {
    let ctx = AppContext::bootstrap(StorefrontConfig::default());

    call(
        &ctx,
        json!({ "command": "add_to_cart", "productId": "trench-coat", "size": "S" }),
    )
    .await;
    call(&ctx, json!({ "command": "process_payment" })).await;

    let response = call(&ctx, json!({ "command": "cancel_payment" })).await;
    assert_eq!(response["ok"]["status"], "cancelled");

    tokio::time::sleep(Duration::from_secs(5)).await;

    let response = call(&ctx, json!({ "command": "payment_status" })).await;
    assert_eq!(response["ok"]["status"], "cancelled");

    let response = call(&ctx, json!({ "command": "get_badges" })).await;
    assert_eq!(response["ok"]["cartCount"], 1);

    // A new payment may start once the previous one is settled.
    let response = call(&ctx, json!({ "command": "process_payment" })).await;
    assert_eq!(response["ok"]["status"], "processing");
}

#[tokio::test]
async fn checkout_form_submission() {
    let ctx = AppContext::bootstrap(StorefrontConfig::default());
    call(
        &ctx,
        json!({ "command": "add_to_cart", "productId": "silk-blouse", "size": "XS" }),
    )
    .await;

    let request = json!({
        "command": "submit_checkout",
        "shipping": {
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "address": "12 St James's Square",
            "city": "London",
            "zipCode": "SW1Y 4JH"
        },
        "billing": {
            "cardNumber": "4242 4242 4242 4242",
            "expiryDate": "08/29",
            "cvv": "123",
            "nameOnCard": "Ada Lovelace"
        }
    });

    let response = call(&ctx, request.clone()).await;
    assert_eq!(response["ok"]["cardLastFour"], "4242");
    assert_eq!(response["ok"]["summary"]["formatted"]["subtotal"], "$189.00");

    let mut bad = request;
    bad["shipping"]["email"] = json!("not-an-email");
    let response = call(&ctx, bad).await;
    assert_eq!(error_code(&response), "VALIDATION_ERROR");
}
