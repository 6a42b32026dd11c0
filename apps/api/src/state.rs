use crate::config::Config;

/// Shared application state injected into all route handlers via Axum
/// extractors. The engine itself is stateless; the only process-wide data it
/// reads is the immutable content pool registry.
#[derive(Clone)]
pub struct AppState {
    /// Reserved for handler-level settings (selection caps, rule-set choice).
    #[allow(dead_code)]
    pub config: Config,
}
