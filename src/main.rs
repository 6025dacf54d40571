use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use anuvad::config::Config;
use anuvad::routes;
use anuvad::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("anuvad=debug,tower_http=debug")),
        )
        .init();

    // Optional config file; environment variables always win
    let config_path = std::env::var("CONFIG_PATH").ok();
    let config = Config::load(config_path.as_deref())?;

    match &config_path {
        Some(path) => info!("Loaded configuration from {} and environment", path),
        None => info!("Loaded configuration from environment"),
    }
    info!(
        "Model: {}, max input chars: {}, max output tokens: {}",
        config.model_name, config.max_input_chars, config.max_output_tokens
    );

    if !config.frontend_dir.join("index.html").exists() {
        tracing::warn!(
            "No index.html in {}; the frontend will not be served",
            config.frontend_dir.display()
        );
    }

    let host = config.host.clone();
    let port = config.port;

    // Initialize app state
    let app_state = AppState::new(config)?;
    let app = routes::build_app(app_state);

    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    info!("Starting server on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
