//! # Branding Deploy SDK
//!
//! A Rust SDK for publishing token branding to a Solana program through its
//! `update_branding` instruction.
//!
//! ## Modules
//!
//! - [`program`]: Record types, instruction encoding, transaction assembly
//!   and the submission client
//! - [`rpc`]: Scoped JSON-RPC session (`getLatestBlockhash`, `sendTransaction`)
//! - [`config`]: Environment-based deploy configuration
//! - [`error`]: Error taxonomy shared by every step
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use branding_deploy::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DeployConfig::from_env()?;
//!     let authority = config.keypair()?;
//!
//!     let metadata: serde_json::Value = serde_json::from_str(&std::fs::read_to_string("metadata.json")?)?;
//!     let record = BrandingRecord::from_image_metadata(&metadata)?;
//!
//!     let client = BrandingClient::from_config(&config);
//!     let signature = client.update_branding(&record, &config.token_state, &authority).await?;
//!     println!("Transaction signature: {}", signature);
//!     Ok(())
//! }
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// On-chain program interaction module.
/// Contains the encoder, transaction builder and client for the branding program.
pub mod program;

/// Unified SDK error types.
pub mod error;

/// Deploy configuration (environment variables).
pub mod config;

/// Network URL constants (RPC endpoints, timeouts).
pub mod network;

/// Keypair loading from raw private key bytes.
#[cfg(feature = "native-auth")]
pub mod signing;

/// JSON-RPC transport for blockhash fetch and transaction submission.
#[cfg(feature = "http")]
pub mod rpc;

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use branding_deploy::prelude::*;
/// ```
pub mod prelude {
    // Program module exports
    pub use crate::program::{
        // Record types
        BrandingColors, BrandingImages, BrandingRecord, OfficialLinks,
        // Encoding
        decode_update_branding, encode_update_branding, EncodedInstruction,
        // Instruction builders
        build_update_branding_ix, update_branding_accounts,
        // Constants
        BRANDING_FIELD_COUNT, SYSTEM_PROGRAM_ID, UPDATE_BRANDING_DISCRIMINATOR,
    };

    #[cfg(feature = "native-auth")]
    pub use crate::program::{build_signed_transaction, serialize_transaction};

    // Client (conditionally exported)
    #[cfg(all(feature = "http", feature = "native-auth"))]
    pub use crate::program::BrandingClient;

    #[cfg(feature = "http")]
    pub use crate::rpc::RpcSession;

    #[cfg(feature = "native-auth")]
    pub use crate::signing::{keypair_from_bytes, keypair_from_hex};

    // Errors
    pub use crate::error::{RpcError, RpcStep, SdkError, SdkResult};

    // Config + network constants
    pub use crate::config::DeployConfig;
    pub use crate::network::{DEFAULT_RPC_URL, MAINNET_RPC_URL};
}
