//! Primer API server binary.

use clap::Parser;
use tracing::info;

use primer_api::config::ApiConfig;

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "primer_server", about = "Primer teaching API server")]
struct Args {
    /// Address to bind the HTTP listener.
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:5000")]
    bind_addr: String,

    /// Gemini model for the chatbot proxy.
    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-2.5-flash-lite")]
    gemini_model: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,primer_api=debug,primer_core=debug".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    let config = ApiConfig {
        bind_addr: args.bind_addr,
        gemini_api_key: std::env::var("GEMINI_API_KEY").ok(),
        gemini_model: args.gemini_model,
    };

    if config.gemini_api_key.is_none() {
        info!("GEMINI_API_KEY not set; /ai routes will answer 502");
    }

    let state = primer_api::AppState::new(config.clone());
    let app = primer_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;

    info!(addr = %local_addr, "REST API listening");

    axum::serve(listener, app).await?;

    Ok(())
}
