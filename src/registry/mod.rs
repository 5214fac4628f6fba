//! Policy code registry for the engine.
//!
//! This module holds the authoritative mapping from code string to policy
//! descriptor. The table is compile-time constant data, validated once at
//! process start and never mutated afterwards.
//!
//! # Example
//!
//! ```
//! use policy_engine::registry::CodeRegistry;
//!
//! let registry = CodeRegistry::builtin().unwrap();
//! let policy = registry.lookup("ts2024").unwrap();
//! println!("{}: {}", policy.code, policy.description);
//! ```

mod table;
mod types;

pub use table::CodeRegistry;
pub use types::{CapabilityClass, PolicyCode};
