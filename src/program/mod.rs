//! On-chain program interaction module.
//!
//! This module provides the instruction encoding, transaction assembly and
//! submission client for the branding program's `update_branding`
//! instruction.

#[cfg(all(feature = "http", feature = "native-auth"))]
pub mod client;
pub mod constants;
pub mod instructions;
#[cfg(feature = "native-auth")]
pub mod transaction;
pub mod types;
pub mod utils;

// Re-export commonly used items
#[cfg(all(feature = "http", feature = "native-auth"))]
pub use client::BrandingClient;
pub use constants::*;
pub use instructions::*;
#[cfg(feature = "native-auth")]
pub use transaction::{build_signed_transaction, serialize_transaction};
pub use types::*;
pub use utils::*;
