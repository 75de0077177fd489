//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Nothing in it is mutable: the responder and the service name are built
//! once at startup and shared by every request.

use std::sync::Arc;

use crate::services::responder::Responder;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub responder: Arc<Responder>,
    pub service_name: Arc<str>,
}

impl AppState {
    #[must_use]
    pub fn new(responder: Responder, service_name: &str) -> Self {
        Self { responder: Arc::new(responder), service_name: Arc::from(service_name) }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::config::DEFAULT_SERVICE_NAME;
    use crate::llm::LlmChat;

    /// App state whose responder calls `llm`.
    #[must_use]
    pub fn test_app_state_with_llm(llm: Arc<dyn LlmChat>) -> AppState {
        AppState::new(Responder::new(Some(llm)), DEFAULT_SERVICE_NAME)
    }

    /// App state in fallback-only mode.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(Responder::new(None), DEFAULT_SERVICE_NAME)
    }
}
