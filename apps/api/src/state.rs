use crate::config::Config;

/// Shared application state injected into route handlers via Axum extractors.
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
