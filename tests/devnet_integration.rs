//! Devnet Integration Tests for the branding SDK
//!
//! These tests talk to a live cluster.
//! Requires:
//! 1. Network access to SOLANA_RPC_URL (defaults to devnet)
//! 2. For the submission test: PRIVATE_KEY, PROGRAM_ID and TOKEN_STATE_ADDRESS
//!    in a .env file, with the key holding the branding authority
//!
//! Run: cargo test --test devnet_integration -- --nocapture --ignored

use branding_deploy::prelude::*;
use serde_json::json;
use std::env;
use std::time::Duration;

fn rpc_url() -> String {
    dotenvy::dotenv().ok();
    env::var("SOLANA_RPC_URL").unwrap_or_else(|_| DEFAULT_RPC_URL.to_string())
}

#[tokio::test]
#[ignore]
async fn test_fetch_latest_blockhash() {
    let url = rpc_url();
    let mut session = RpcSession::open(&url, Duration::from_secs(30)).unwrap();

    let first = session.get_latest_blockhash().await.unwrap();
    println!("Latest finalized blockhash at {}: {}", url, first);
    assert_ne!(first, solana_hash::Hash::default());
}

#[tokio::test]
#[ignore]
async fn test_update_branding_on_devnet() {
    dotenvy::dotenv().ok();
    let config = match DeployConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            println!("Skipping: {}", e);
            return;
        }
    };
    let authority = config.keypair().unwrap();

    let metadata = json!({
        "name": "Wally",
        "symbol": "WLY",
        "description": "Integration test branding",
        "images": {
            "token": "https://example.com/wally.png",
            "twitter": "", "telegram": "", "discord": "",
            "favicon": "", "high_res": ""
        },
        "colors": {
            "primary": "#1A2B3C", "secondary": "#FFFFFF",
            "accent": "#FF8800", "background": "#000000"
        },
        "official_links": {
            "website": "https://example.com", "twitter": "", "telegram": "", "discord": ""
        }
    });
    let record = BrandingRecord::from_image_metadata(&metadata).unwrap();

    let client = BrandingClient::from_config(&config);
    let signature = client
        .update_branding(&record, &config.token_state, &authority)
        .await
        .unwrap();
    println!("Branding updated: {}", signature);
}
