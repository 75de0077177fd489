mod config;
mod llm;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use services::responder::Responder;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let server = config::ServerConfig::from_env().expect("invalid server config");
    let llm_config = llm::LlmConfig::from_env().expect("invalid LLM config");

    if llm_config.has_api_key() {
        tracing::info!("OpenRouter API key set");
    } else {
        tracing::warn!("OPENROUTER_API_KEY not set — remote calls will fail and fallback replies will be used");
    }

    // Non-fatal: without an HTTP client the responder serves fallback replies only.
    let llm: Option<Arc<dyn llm::LlmChat>> = match llm::OpenRouterClient::new(llm_config) {
        Ok(client) => {
            tracing::info!(model = client.model(), "LLM client initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "LLM client not available — fallback replies only");
            None
        }
    };

    let state = state::AppState::new(Responder::new(llm), &server.service_name);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(server.bind_addr())
        .await
        .expect("failed to bind");

    tracing::info!(addr = %server.bind_addr(), service = %server.service_name, "agent listening");
    axum::serve(listener, app).await.expect("server failed");
}
