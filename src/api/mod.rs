//! HTTP API module for the SuperMart engine.
//!
//! This module exposes the tax, line-item, checkout, stock, pricing,
//! password and sign-up calculations as JSON endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AggregateRequest, CheckoutRequest, MarginRequest, PasswordRequest, StockRequest,
    TaxSplitRequest,
};
pub use response::{
    AggregateResponse, ApiError, ApiErrorResponse, CheckoutResponse, MarginResponse, ResultMeta,
    SignUpResponse, StockResponse, TaxClassEntry, TaxClassesResponse, TaxSplitResponse,
};
pub use state::AppState;
