mod config;
mod routes;

use config::{ConfigError, ServerConfig};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "startup failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ConfigError> {
    let config = ServerConfig::from_env()?;
    let leptos_options = routes::leptos_options()?;
    let addr = config.listen_addr(leptos_options.site_addr);

    let app = routes::app(leptos_options, config);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ConfigError::Bind { addr, source })?;

    tracing::info!(%addr, compress = config.compress, "folio listening");
    axum::serve(listener, app).await.map_err(ConfigError::Serve)
}
