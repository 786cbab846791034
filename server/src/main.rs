use skillet_core::llm::create_provider_from_env;
use skillet_server::store::MemStore;
use skillet_server::{api, app, telemetry, AppState};
use std::env;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Check for --openapi flag to dump spec and exit
    if env::args().any(|arg| arg == "--openapi") {
        let spec = api::openapi().to_pretty_json().unwrap();
        println!("{}", spec);
        return;
    }

    telemetry::init_telemetry();

    let llm = match create_provider_from_env() {
        Ok(provider) => {
            tracing::info!(
                provider = provider.provider_name(),
                model = provider.model_name(),
                "AI provider configured"
            );
            Some(Arc::from(provider))
        }
        Err(e) => {
            tracing::warn!("AI provider not configured ({}), fallbacks only", e);
            None
        }
    };

    let state = AppState {
        store: Arc::new(MemStore::seeded()),
        llm,
    };

    let app = app(state);

    let addr = env::var("SKILLET_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    tracing::info!("Server listening on {}", listener.local_addr().unwrap());
    tracing::info!("Swagger UI available at http://localhost:3000/swagger-ui/");
    tracing::info!("OpenAPI spec available at http://localhost:3000/api-docs/openapi.json");

    axum::serve(listener, app).await.unwrap();
}
