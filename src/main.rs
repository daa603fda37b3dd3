mod agent;
mod config_manager;
mod error;
mod handlers;
mod routes;
mod state;
mod translate;

use anyhow::Result;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use agent::StatelessLLMFactory;
use config_manager::Config;
use state::AppState;
use translate::TranslationHandler;

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; real environment variables take precedence
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("translator_backend=debug,tower_http=debug")),
        )
        .init();

    let (config, _) = Config::discover(&Config::candidate_paths())?;

    // The credential is checked exactly once, here. Without it the server never starts.
    let llm = match StatelessLLMFactory::create_llm(&config.translator_config, |name| std::env::var(name).ok()) {
        Ok(llm) => llm,
        Err(e) => {
            error!("{}", e);
            return Err(e.into());
        }
    };
    let translator = TranslationHandler::new(llm);

    let addr = config.system_config.socket_addr()?;
    let app_state = AppState::new(config, translator);

    // Build application
    let app = Router::new()
        .merge(routes::create_routes(&app_state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(app_state);

    // Start server
    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
