//! Tax and line-item calculation engine for SuperMart point of sale
//!
//! This crate provides the arithmetic behind the till, billing and tax
//! calculator screens of a Kenyan supermarket: VAT splits, cart and bill
//! totals, stock status and password strength, plus a JSON API over them.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
