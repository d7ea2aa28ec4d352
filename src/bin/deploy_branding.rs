use std::path::PathBuf;
use std::process::ExitCode;

use branding_deploy::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// `usage: deploy-branding <metadata.json>`
#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error updating branding: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

/// Loads configuration and metadata, then submits the branding update.
async fn run() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .ok_or("usage: deploy-branding <metadata.json>")?;

    let config = DeployConfig::from_env()?;
    let authority = config.keypair()?;

    let metadata: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    let record = BrandingRecord::from_image_metadata(&metadata)?;

    tracing::info!(
        rpc_url = %config.rpc_url,
        program_id = %config.program_id,
        token_state = %config.token_state,
        "Deploying branding for {} ({})",
        record.name,
        record.symbol
    );

    let client = BrandingClient::from_config(&config);
    let signature = client
        .update_branding(&record, &config.token_state, &authority)
        .await?;

    println!("Branding updated successfully!");
    println!("Transaction signature: {signature}");
    println!("Token image: {}", record.images.token);
    Ok(())
}
