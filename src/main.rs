use anyhow::{Context, Result};
use clap::Parser;
use summary_relay::config::DEFAULT_CONFIG_PATH;
use summary_relay::{create_router, AppState, Config};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "summary-relay")]
#[command(about = "Meeting transcript summarization and email relay")]
struct Args {
    /// Config file (extension optional); environment variables override it
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; real environment wins
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("summary_relay=info,tower_http=info")),
        )
        .init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;

    info!("Summary relay v{}", env!("CARGO_PKG_VERSION"));
    info!("Completion model: {} ({})", cfg.llm.model, cfg.llm.base_url);
    info!(
        "SMTP relay: {}:{} (secure={})",
        cfg.smtp.host, cfg.smtp.port, cfg.smtp.secure
    );
    if cfg.llm.api_key.is_none() {
        warn!("GROQ_API_KEY is not set; /summarize will fail until it is configured");
    }
    if cfg.smtp.sender().is_none() {
        warn!("Neither FROM_EMAIL nor SMTP_USER is set; /send-email will fail");
    }

    let address = cfg.server.address();
    let app = create_router(AppState::from_config(&cfg));

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!("Backend running on http://{}", address);
    info!("Browser client at http://{}/app/", address);

    axum::serve(listener, app)
        .await
        .context("HTTP server terminated")?;

    Ok(())
}
