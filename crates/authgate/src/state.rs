//! Application state for the gateway.

use std::sync::Arc;

use authgate_core::ClientFactory;

use crate::config::Config;

/// Shared state for handlers: the capability factory and the static config.
///
/// No cross-request mutable state lives here; the only carried state of the
/// whole system is the session artifact held by the caller.
#[derive(Clone)]
pub struct AppState {
    pub factory: Arc<dyn ClientFactory>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(factory: Arc<dyn ClientFactory>, config: Config) -> Self {
        Self {
            factory,
            config: Arc::new(config),
        }
    }
}
