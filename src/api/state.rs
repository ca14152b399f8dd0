//! Application state for the payroll API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::PolicyLoader;

/// Shared application state.
///
/// Holds the loaded policy and holiday calendar. Requests that do not carry
/// their own policy are priced under this one.
#[derive(Clone)]
pub struct AppState {
    config: Arc<PolicyLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: PolicyLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &PolicyLoader {
        &self.config
    }
}
