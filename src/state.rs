use std::sync::Arc;

use crate::config::Config;
use crate::infrastructure::backend::LoginBackend;

/// Shared state injected into every handler.
///
/// Immutable after startup; per-page form state lives in a controller owned
/// by the request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub backend: Arc<dyn LoginBackend>,
}

impl AppState {
    pub fn new(config: Config, backend: Arc<dyn LoginBackend>) -> Self {
        Self {
            config: Arc::new(config),
            backend,
        }
    }
}
