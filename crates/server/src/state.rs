use std::sync::Arc;
use sortbox_core::{Config, Placer};

/// Shared application state
///
/// Configuration and the placer (with its rule set) are built once at
/// startup and immutable afterwards; handlers only ever read from here.
pub struct AppState {
    config: Config,
    placer: Arc<dyn Placer>,
}

impl AppState {
    pub fn new(config: Config, placer: Arc<dyn Placer>) -> Self {
        Self { config, placer }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn placer(&self) -> &dyn Placer {
        self.placer.as_ref()
    }
}
