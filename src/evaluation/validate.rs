//! Code validation entry point.

use crate::models::CodeValidation;
use crate::registry::CodeRegistry;

/// Resolves registry membership and class for a presented code.
///
/// An unrecognized code yields `valid = false` rather than an error; this
/// operation has no failure modes. It neither requires nor accepts a
/// timestamp.
///
/// # Example
///
/// ```
/// use policy_engine::evaluation::validate_code;
/// use policy_engine::registry::CodeRegistry;
///
/// let registry = CodeRegistry::builtin().unwrap();
/// assert!(validate_code(&registry, "ts2024").valid);
/// assert!(!validate_code(&registry, "zz9999").valid);
/// ```
pub fn validate_code(registry: &CodeRegistry, code: &str) -> CodeValidation {
    match registry.lookup(code) {
        Ok(policy) => CodeValidation::matched(policy),
        Err(_) => CodeValidation::unrecognized(),
    }
}
