//! Integration tests for the SuperMart engine API.
//!
//! This test suite covers every endpoint:
//! - Tax split (exclusive, inclusive, tax classes, shares)
//! - Line-item aggregation
//! - Till checkout with change and balance
//! - Stock classification and product margin
//! - Password strength and sign-up validation
//! - Tax class listing
//! - Error cases

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::str::FromStr;
use tower::ServiceExt;

use supermart_engine::api::{create_router, AppState};
use supermart_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/kenya").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

/// Normalize decimal string by removing trailing zeros after decimal point
fn normalize_decimal(s: &str) -> String {
    Decimal::from_str(s).unwrap().normalize().to_string()
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(create_router_for_test(), request).await
}

fn assert_amount(result: &Value, field: &str, expected: &str) {
    let actual = result[field]
        .as_str()
        .unwrap_or_else(|| panic!("field '{}' missing or not a string in {}", field, result));
    assert_eq!(
        normalize_decimal(actual),
        normalize_decimal(expected),
        "Expected {} {}, got {}",
        field,
        expected,
        actual
    );
}

fn line(quantity: &str, unit_rate: &str, tax_rate: &str) -> Value {
    json!({
        "description": "item",
        "quantity": quantity,
        "unit_rate": unit_rate,
        "tax_rate": tax_rate
    })
}

// =============================================================================
// SECTION 1: Tax split
// =============================================================================

#[tokio::test]
async fn test_vat_exclusive_1000() {
    let (status, result) = post_json(
        "/tax/split",
        json!({ "amount": "1000", "rate": "16", "mode": "exclusive" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["base_amount"], "1000.00");
    assert_eq!(result["tax_amount"], "160.00");
    assert_eq!(result["total_amount"], "1160.00");
}

#[tokio::test]
async fn test_vat_inclusive_1160() {
    let (status, result) = post_json(
        "/tax/split",
        json!({ "amount": 1160, "rate": 16, "mode": "inclusive" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_amount(&result, "base_amount", "1000");
    assert_amount(&result, "tax_amount", "160");
    assert_amount(&result, "total_amount", "1160");
}

#[tokio::test]
async fn test_mode_defaults_to_exclusive() {
    let (_, result) = post_json("/tax/split", json!({ "amount": 50, "rate": 16 })).await;

    assert_eq!(result["mode"], "exclusive");
    assert_amount(&result, "total_amount", "58");
}

#[tokio::test]
async fn test_rate_from_tax_class() {
    let (status, result) = post_json(
        "/tax/split",
        json!({ "amount": 1080, "tax_class": "reduced", "mode": "inclusive" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["tax_class"], "reduced");
    assert_amount(&result, "rate", "8");
    assert_amount(&result, "base_amount", "1000");
    assert_amount(&result, "tax_amount", "80");
}

#[tokio::test]
async fn test_explicit_rate_overrides_tax_class() {
    let (_, result) = post_json(
        "/tax/split",
        json!({ "amount": 100, "rate": 2, "tax_class": "standard" }),
    )
    .await;

    assert_amount(&result, "rate", "2");
    assert_amount(&result, "tax_amount", "2");
}

#[tokio::test]
async fn test_default_rate_when_none_given() {
    let (_, result) = post_json("/tax/split", json!({ "amount": 100 })).await;

    assert_amount(&result, "rate", "16");
    assert_amount(&result, "tax_amount", "16");
}

#[tokio::test]
async fn test_zero_rated_class() {
    let (_, result) = post_json(
        "/tax/split",
        json!({ "amount": 250, "tax_class": "zero_rated" }),
    )
    .await;

    assert_amount(&result, "tax_amount", "0");
    assert_amount(&result, "total_amount", "250");
}

#[tokio::test]
async fn test_shares_carry_odd_cent_to_state() {
    let (_, result) = post_json(
        "/tax/split",
        json!({ "amount": 100, "rate": 16, "mode": "inclusive" }),
    )
    .await;

    assert_amount(&result, "tax_amount", "13.79");
    assert_eq!(result["shares"]["central"], "6.89");
    assert_eq!(result["shares"]["state"], "6.90");
}

#[tokio::test]
async fn test_blank_amount_and_rate() {
    let (status, result) = post_json("/tax/split", json!({ "amount": "", "rate": "" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_amount(&result, "rate", "16");
    assert_eq!(result["base_amount"], "0.00");
    assert_eq!(result["total_amount"], "0.00");
}

#[tokio::test]
async fn test_result_carries_identification() {
    let (_, result) = post_json("/tax/split", json!({ "amount": 1, "rate": 16 })).await;

    assert!(result["calculation_id"].is_string());
    assert!(result["timestamp"].is_string());
    assert_eq!(result["engine_version"], env!("CARGO_PKG_VERSION"));
}

// =============================================================================
// SECTION 2: Line-item aggregation
// =============================================================================

#[tokio::test]
async fn test_two_item_cart() {
    let (status, result) = post_json(
        "/line-items/aggregate",
        json!({ "items": [line("2", "500", "16"), line("1", "300", "0")] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["item_count"], 2);
    assert_eq!(result["subtotal"], "1300.00");
    assert_eq!(result["total_tax"], "160.00");
    assert_eq!(result["grand_total"], "1460.00");
}

#[tokio::test]
async fn test_empty_items() {
    let (status, result) = post_json("/line-items/aggregate", json!({ "items": [] })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["subtotal"], "0.00");
    assert_eq!(result["total_tax"], "0.00");
    assert_eq!(result["grand_total"], "0.00");
}

#[tokio::test]
async fn test_partially_filled_rows() {
    let (status, result) = post_json(
        "/line-items/aggregate",
        json!({
            "items": [
                { "description": "Sugar 2kg", "quantity": 2, "unit_rate": 250, "tax_rate": 16 },
                { "description": "new row", "quantity": 1 },
                {}
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["item_count"], 3);
    assert_amount(&result, "grand_total", "580");
}

#[tokio::test]
async fn test_blank_text_fields_count_as_zero() {
    let (status, result) = post_json(
        "/line-items/aggregate",
        json!({ "items": [line("2", "", "16"), line("1", "300", "")] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["subtotal"], "300.00");
    assert_eq!(result["total_tax"], "0.00");
    assert_eq!(result["grand_total"], "300.00");
}

#[tokio::test]
async fn test_non_numeric_text_is_rejected() {
    let (status, error) = post_json(
        "/line-items/aggregate",
        json!({ "items": [line("two", "500", "16")] }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_negative_quantity_names_the_row() {
    let (status, error) = post_json(
        "/line-items/aggregate",
        json!({ "items": [line("1", "10", "16"), line("-1", "10", "16")] }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_ARGUMENT");
    assert_eq!(error["details"], "items[1].quantity");
}

#[tokio::test]
async fn test_missing_items_is_validation_error() {
    let (status, error) = post_json("/line-items/aggregate", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

// =============================================================================
// SECTION 3: Checkout
// =============================================================================

#[tokio::test]
async fn test_checkout_with_change() {
    let (status, result) = post_json(
        "/checkout",
        json!({
            "items": [
                { "name": "Bread", "quantity": 2, "unit_price": 65 },
                { "name": "Milk 500ml", "quantity": 3, "unit_price": 60 }
            ],
            "amount_tendered": 500
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["currency"], "KES");
    assert_amount(&result, "vat_rate", "16");
    assert_amount(&result, "subtotal", "310");
    assert_amount(&result, "vat_amount", "49.60");
    assert_amount(&result, "total", "359.60");
    assert_amount(&result, "change_due", "140.40");
    assert_amount(&result, "balance_due", "0");
}

#[tokio::test]
async fn test_checkout_short_tender() {
    let (_, result) = post_json(
        "/checkout",
        json!({
            "items": [{ "name": "Rice 5kg", "quantity": 1, "unit_price": 850 }],
            "amount_tendered": 900
        }),
    )
    .await;

    assert_amount(&result, "change_due", "0");
    assert_amount(&result, "balance_due", "86");
}

#[tokio::test]
async fn test_checkout_without_tender() {
    let (_, result) = post_json(
        "/checkout",
        json!({ "items": [{ "name": "Soap", "quantity": 1, "unit_price": 100 }] }),
    )
    .await;

    assert_amount(&result, "total", "116");
    assert!(result["change_due"].is_null());
    assert!(result["balance_due"].is_null());
}

#[tokio::test]
async fn test_checkout_blank_tender() {
    let (status, result) = post_json(
        "/checkout",
        json!({
            "items": [
                { "name": "Soap", "quantity": "1", "unit_price": "100" },
                { "name": "new line", "quantity": "", "unit_price": "" }
            ],
            "amount_tendered": ""
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_amount(&result, "total", "116");
    assert!(result["amount_tendered"].is_null());
    assert!(result["change_due"].is_null());
    assert!(result["balance_due"].is_null());
}

#[tokio::test]
async fn test_checkout_negative_tender() {
    let (status, error) = post_json(
        "/checkout",
        json!({ "items": [], "amount_tendered": -10 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["details"], "amount_tendered");
}

// =============================================================================
// SECTION 4: Stock and pricing
// =============================================================================

#[tokio::test]
async fn test_stock_boundaries() {
    for (current, expected) in [(0, "out-of-stock"), (5, "low-stock"), (6, "in-stock")] {
        let (status, result) = post_json(
            "/stock/classify",
            json!({ "current_stock": current, "minimum_stock": 5 }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(result["status"], expected, "current_stock {}", current);
        assert!(result.get("fill_percentage").is_none());
    }
}

#[tokio::test]
async fn test_stock_with_capacity() {
    let (_, result) = post_json(
        "/stock/classify",
        json!({ "current_stock": 30, "minimum_stock": 10, "maximum_stock": 120 }),
    )
    .await;

    assert_eq!(result["status"], "in-stock");
    assert_eq!(result["label"], "in stock");
    assert_amount(&result, "fill_percentage", "25");
}

#[tokio::test]
async fn test_stock_over_capacity_clamps() {
    let (_, result) = post_json(
        "/stock/classify",
        json!({ "current_stock": 500, "minimum_stock": 10, "maximum_stock": 100 }),
    )
    .await;

    assert_amount(&result, "fill_percentage", "100");
}

#[tokio::test]
async fn test_stock_negative_count() {
    let (status, error) = post_json(
        "/stock/classify",
        json!({ "current_stock": -1, "minimum_stock": 5 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_ARGUMENT");
}

#[tokio::test]
async fn test_stock_maximum_below_minimum() {
    let (status, error) = post_json(
        "/stock/classify",
        json!({ "current_stock": 1, "minimum_stock": 10, "maximum_stock": 5 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["details"], "maximum_stock");
}

#[tokio::test]
async fn test_product_margin() {
    let (status, result) = post_json(
        "/pricing/margin",
        json!({ "selling_price": 100, "cost_price": "30" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_amount(&result, "display_margin", "233.3");
}

#[tokio::test]
async fn test_product_margin_blank_cost_is_zero() {
    let (status, result) = post_json(
        "/pricing/margin",
        json!({ "selling_price": "150", "cost_price": "" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_amount(&result, "margin", "0");
}

#[tokio::test]
async fn test_product_margin_negative_cost() {
    let (status, error) = post_json(
        "/pricing/margin",
        json!({ "selling_price": 150, "cost_price": -5 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_ARGUMENT");
    assert_eq!(error["details"], "cost_price");
}

// =============================================================================
// SECTION 5: Password and sign-up
// =============================================================================

#[tokio::test]
async fn test_password_scores() {
    for (password, score, label) in [
        ("", 0, ""),
        ("abcdefgh", 2, "Weak"),
        ("Abcd123!", 5, "Strong"),
    ] {
        let (status, result) = post_json("/password/strength", json!({ "password": password })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(result["score"], score, "password {:?}", password);
        assert_eq!(result["label"], label);
    }
}

#[tokio::test]
async fn test_signup_valid_form() {
    let (status, result) = post_json(
        "/signup/validate",
        json!({
            "first_name": "Achieng",
            "last_name": "Otieno",
            "username": "aotieno",
            "email": "achieng@example.co.ke",
            "password": "Soko2024",
            "password2": "Soko2024",
            "company_name": "Otieno Mini Mart",
            "company_size": "1-10",
            "phone_number": "+254 700 000000",
            "agree_to_terms": true
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["valid"], true);
    assert_eq!(result["errors"], json!({}));
}

#[tokio::test]
async fn test_signup_reports_field_errors() {
    let (status, result) = post_json(
        "/signup/validate",
        json!({
            "email": "nope",
            "password": "short",
            "password2": "different"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["valid"], false);
    assert_eq!(result["errors"]["email"], "Please enter a valid email address");
    assert_eq!(
        result["errors"]["password"],
        "Password must be at least 8 characters"
    );
    assert_eq!(result["errors"]["password2"], "Passwords do not match");
    assert_eq!(
        result["errors"]["terms"],
        "You must agree to the terms and conditions"
    );
}

// =============================================================================
// SECTION 6: Tax classes
// =============================================================================

#[tokio::test]
async fn test_list_tax_classes() {
    let request = Request::builder()
        .method("GET")
        .uri("/tax-classes")
        .body(Body::empty())
        .unwrap();
    let (status, result) = send(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["jurisdiction"], "KE");
    assert_amount(&result, "vat_rate", "16");

    let codes: Vec<&str> = result["tax_classes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|class| class["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["exempt", "reduced", "standard", "zero_rated"]);
}

// =============================================================================
// SECTION 7: Error cases
// =============================================================================

#[tokio::test]
async fn test_malformed_json() {
    let request = Request::builder()
        .method("POST")
        .uri("/checkout")
        .header("Content-Type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, error) = send(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_content_type() {
    let request = Request::builder()
        .method("POST")
        .uri("/tax/split")
        .body(Body::from(r#"{"amount": 1}"#))
        .unwrap();
    let (status, error) = send(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "MISSING_CONTENT_TYPE");
}

#[tokio::test]
async fn test_wrong_type_is_malformed() {
    let (status, error) = post_json("/tax/split", json!({ "amount": "lots" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_unknown_tax_class() {
    let (status, error) = post_json(
        "/tax/split",
        json!({ "amount": 10, "tax_class": "luxury" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "TAX_CLASS_NOT_FOUND");
}
