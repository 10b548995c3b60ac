use crate::generation::service::GatewayService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Wraps the single long-lived model handle; cheap to clone per request.
    pub gateway: GatewayService,
}
