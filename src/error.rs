//! Error types for the policy code engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during code validation and
//! timestamp adjustment.

use thiserror::Error;

use crate::registry::CapabilityClass;

/// The main error type for the policy code engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use policy_engine::error::EngineError;
///
/// let error = EngineError::CodeNotFound {
///     code: "zz9999".to_string(),
/// };
/// assert_eq!(error.to_string(), "Policy code not found: zz9999");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The presented code has no registry entry.
    #[error("Policy code not found: {code}")]
    CodeNotFound {
        /// The code that was not found.
        code: String,
    },

    /// The code is recognized but its class has no temporal rule.
    #[error("Policy code '{code}' (class {class}) is not applicable to timestamp adjustment")]
    NotTimeApplicable {
        /// The recognized code.
        code: String,
        /// The capability class the code grants.
        class: CapabilityClass,
    },

    /// A base timestamp failed to parse.
    #[error("Invalid timestamp '{value}': {message}")]
    InvalidTimestamp {
        /// The raw input that failed to parse.
        value: String,
        /// A description of the parse failure.
        message: String,
    },

    /// A registry entry failed validation at construction time.
    ///
    /// This is a startup configuration defect and is fatal to process
    /// initialization; it is never surfaced at request time.
    #[error("Malformed registry entry '{code}': {message}")]
    MalformedRegistryEntry {
        /// The code of the offending entry.
        code: String,
        /// A description of what made the entry invalid.
        message: String,
    },

    /// A general adjustment error occurred.
    #[error("Adjustment error: {message}")]
    AdjustmentError {
        /// A description of the adjustment error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
