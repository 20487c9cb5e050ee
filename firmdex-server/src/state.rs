//! Application state management

use firmdex::core::CompanyRegistry;

use crate::config::ServerConfig;

/// Application state shared across all handlers
///
/// The registry is stateless orchestration over the shared store, so the
/// whole state is cheap to share behind an `Arc` with no extra locking.
#[derive(Debug)]
pub struct AppState {
    /// Company registry (relevance gate + search scoring over storage)
    pub registry: CompanyRegistry,

    /// Server configuration
    pub config: ServerConfig,
}

impl AppState {
    /// Create new application state
    pub fn new(registry: CompanyRegistry, config: ServerConfig) -> Self {
        Self { registry, config }
    }
}
