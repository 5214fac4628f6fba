//! Application state for the policy engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::evaluation::{Clock, SystemClock};
use crate::registry::CodeRegistry;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// immutable policy code registry and the clock used when a request omits
/// its base time.
#[derive(Clone)]
pub struct AppState {
    registry: Arc<CodeRegistry>,
    clock: Arc<dyn Clock>,
}

impl AppState {
    /// Creates application state backed by the system clock.
    pub fn new(registry: CodeRegistry) -> Self {
        Self::with_clock(registry, Arc::new(SystemClock))
    }

    /// Creates application state with an explicit clock, for tests.
    pub fn with_clock(registry: CodeRegistry, clock: Arc<dyn Clock>) -> Self {
        Self {
            registry: Arc::new(registry),
            clock,
        }
    }

    /// Returns a reference to the policy code registry.
    pub fn registry(&self) -> &CodeRegistry {
        &self.registry
    }

    /// Returns the clock used for defaulted base times.
    pub fn clock(&self) -> &dyn Clock {
        &*self.clock
    }
}
