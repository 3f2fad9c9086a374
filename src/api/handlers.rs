//! HTTP request handlers for the SuperMart engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    aggregate_line_items, classify_stock, compute_checkout, compute_tax_split, product_margin,
    score_password, split_tax_shares, validate_signup,
};
use crate::error::EngineError;
use crate::models::{SignUpForm, StockLevel};

use super::request::{
    AggregateRequest, CheckoutRequest, MarginRequest, PasswordRequest, StockRequest,
    TaxSplitRequest,
};
use super::response::{
    AggregateResponse, ApiError, ApiErrorResponse, CheckoutResponse, MarginResponse, ResultMeta,
    SignUpResponse, StockResponse, TaxClassEntry, TaxClassesResponse, TaxSplitResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/tax/split", post(tax_split_handler))
        .route("/line-items/aggregate", post(aggregate_handler))
        .route("/checkout", post(checkout_handler))
        .route("/stock/classify", post(stock_handler))
        .route("/pricing/margin", post(margin_handler))
        .route("/password/strength", post(password_handler))
        .route("/signup/validate", post(signup_handler))
        .route("/tax-classes", get(tax_classes_handler))
        .with_state(state)
}

/// Handler for POST /tax/split.
///
/// Resolves the rate from the request or configured tax class and splits
/// the amount.
async fn tax_split_handler(
    State(state): State<AppState>,
    payload: Result<Json<TaxSplitRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing tax split request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let result = state
        .config()
        .resolve_rate(request.rate, request.tax_class.as_deref())
        .and_then(|rate| {
            let breakdown = compute_tax_split(request.amount, rate, request.mode)?;
            let shares = split_tax_shares(breakdown.tax_amount)?;
            Ok(TaxSplitResponse {
                meta: ResultMeta::new(),
                mode: request.mode,
                rate,
                tax_class: request.tax_class.clone(),
                breakdown,
                shares,
            })
        });

    match result {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                mode = request.mode.as_str(),
                rate = %response.rate,
                tax_amount = %response.breakdown.tax_amount,
                duration_us = start_time.elapsed().as_micros(),
                "Tax split completed successfully"
            );
            json_response(StatusCode::OK, response)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /line-items/aggregate.
async fn aggregate_handler(payload: Result<Json<AggregateRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing line item aggregation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match aggregate_line_items(&request.items) {
        Ok(totals) => {
            info!(
                correlation_id = %correlation_id,
                items_count = request.items.len(),
                grand_total = %totals.grand_total,
                duration_us = start_time.elapsed().as_micros(),
                "Aggregation completed successfully"
            );
            json_response(
                StatusCode::OK,
                AggregateResponse {
                    meta: ResultMeta::new(),
                    item_count: request.items.len(),
                    totals,
                },
            )
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /checkout.
///
/// Charges VAT at the configured jurisdiction rate.
async fn checkout_handler(
    State(state): State<AppState>,
    payload: Result<Json<CheckoutRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing checkout request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let config = state.config();
    let start_time = Instant::now();
    match compute_checkout(&request.items, config.vat_rate(), request.amount_tendered) {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                items_count = request.items.len(),
                total = %summary.total,
                duration_us = start_time.elapsed().as_micros(),
                "Checkout completed successfully"
            );
            json_response(
                StatusCode::OK,
                CheckoutResponse {
                    meta: ResultMeta::new(),
                    currency: config.jurisdiction().currency.clone(),
                    summary,
                },
            )
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /stock/classify.
async fn stock_handler(payload: Result<Json<StockRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let result = match request.maximum_stock {
        Some(maximum) => StockLevel::new(request.current_stock, request.minimum_stock, maximum)
            .map(|level| (level.status(), Some(level.fill_percentage()))),
        None => classify_stock(request.current_stock, request.minimum_stock)
            .map(|status| (status, None)),
    };

    match result {
        Ok((status, fill_percentage)) => {
            info!(
                correlation_id = %correlation_id,
                status = status.label(),
                "Stock classified"
            );
            json_response(
                StatusCode::OK,
                StockResponse {
                    status,
                    label: status.label().to_string(),
                    fill_percentage,
                },
            )
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /pricing/margin.
async fn margin_handler(payload: Result<Json<MarginRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match product_margin(request.selling_price, request.cost_price) {
        Ok(margin) => {
            info!(correlation_id = %correlation_id, margin = %margin, "Margin computed");
            json_response(
                StatusCode::OK,
                MarginResponse {
                    margin,
                    display_margin: margin.round_dp(1),
                },
            )
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /password/strength.
///
/// The password itself is never logged.
async fn password_handler(payload: Result<Json<PasswordRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let strength = score_password(&request.password);
    info!(correlation_id = %correlation_id, score = strength.score, "Password scored");
    json_response(StatusCode::OK, strength)
}

/// Handler for POST /signup/validate.
async fn signup_handler(payload: Result<Json<SignUpForm>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();

    let form = match payload {
        Ok(Json(form)) => form,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let validation = validate_signup(&form);
    info!(
        correlation_id = %correlation_id,
        error_count = validation.errors.len(),
        "Sign-up form validated"
    );
    json_response(
        StatusCode::OK,
        SignUpResponse {
            valid: validation.is_valid(),
            errors: validation.errors,
        },
    )
}

/// Handler for GET /tax-classes.
async fn tax_classes_handler(State(state): State<AppState>) -> Response {
    let config = state.config();
    let jurisdiction = config.jurisdiction();

    let tax_classes = config
        .tax_classes()
        .into_iter()
        .map(|(code, class)| TaxClassEntry {
            code: code.to_string(),
            name: class.name.clone(),
            rate: class.rate,
            description: class.description.clone(),
            examples: class.examples.clone(),
        })
        .collect();

    json_response(
        StatusCode::OK,
        TaxClassesResponse {
            jurisdiction: jurisdiction.code.clone(),
            currency: jurisdiction.currency.clone(),
            vat_rate: jurisdiction.vat_rate,
            tax_classes,
        },
    )
}

/// Serializes a body with an explicit JSON content type.
fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Maps an engine error to its HTTP status and error body.
fn engine_error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Calculation failed"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

/// Turns a body that could not be read as the expected JSON into a 400.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the problem
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}
