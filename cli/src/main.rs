use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use briefing_core::Settings;

#[tokio::main]
async fn main() {
    // Logs go to stderr; stdout carries only the briefing.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    if let Err(e) = run().await {
        error!("Briefing failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    info!("Daily briefing starting...");
    let settings = Settings::from_env();
    let briefing = briefing_core::connect(&settings);

    let story = briefing.run().await?;
    println!("{}", story);
    Ok(())
}
