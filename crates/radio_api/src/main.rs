use clap::Parser;
use radio_api::create_app;
use radio_core::{Radio, RadioConfig};
use std::path::PathBuf;
use std::sync::Arc;

/// Command line arguments for the piradio-web server
#[derive(Parser, Debug)]
#[command(name = "piradio-web")]
#[command(about = "Web control surface for the piradio tuner")]
struct Args {
    /// Path to the radio configuration JSON file (defaults apply when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to bind the server to
    #[arg(short, long, default_value = "3000")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt().pretty().init();

    // Load radio configuration, falling back to the stock piradio install
    let config: RadioConfig = match &args.config {
        Some(path) => {
            let content = tokio::fs::read_to_string(path).await.map_err(|e| {
                format!("Failed to read config file '{}': {}", path.display(), e)
            })?;
            serde_json::from_str(&content).map_err(|e| {
                format!("Failed to parse config file '{}': {}", path.display(), e)
            })?
        }
        None => RadioConfig::default(),
    };

    tracing::info!(
        "Using radio executable {} with a {}s invocation timeout",
        config.radio_path.display(),
        config.timeout_secs
    );

    // Build our application with routes
    let radio = Arc::new(Radio::new(&config));
    let app = create_app(radio);

    // Run our app with hyper
    let bind_addr = format!("0.0.0.0:{}", args.port);
    tracing::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", bind_addr, e))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| format!("Server error: {}", e))?;

    Ok(())
}
