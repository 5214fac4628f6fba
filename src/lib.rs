//! Policy Code Validation & Timestamp Adjustment Engine
//!
//! This crate validates short alphanumeric policy codes against a static
//! registry and computes deterministic timestamp adjustments for the
//! time-related capability classes those codes grant.

#![warn(missing_docs)]

pub mod api;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod registry;
