use anyhow::Result;
use clap::Parser;
use signbridge::{create_router, AppState, Config, PipelineOrchestrator};
use tracing::info;

#[derive(Parser)]
#[command(name = "signbridge", about = "Speech-to-sign-language translation pipeline service")]
struct Cli {
    /// Path to the configuration file (without extension)
    #[arg(long, default_value = "config/signbridge")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let cfg = Config::load(&cli.config)?;

    info!("Signbridge v0.1.0");
    info!("Loaded config: {}", cfg.service.name);
    info!(
        "Languages: {} -> {}",
        cfg.languages.spoken, cfg.languages.signed
    );

    let orchestrator = PipelineOrchestrator::from_config(&cfg)?;
    let state = AppState::new(orchestrator);
    let app = create_router(state);

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
