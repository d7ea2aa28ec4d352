//! Native signing: keypair loading from raw key bytes.
//!
//! Only available with the `native-auth` feature.

use solana_keypair::Keypair;

use crate::error::{SdkError, SdkResult};
use crate::program::constants::{KEYPAIR_LENGTH, SECRET_KEY_LENGTH};

/// Build a keypair from raw bytes.
///
/// Accepts either the 64-byte keypair form (the Solana CLI layout, whose
/// public half must match the secret) or a bare 32-byte seed.
pub fn keypair_from_bytes(bytes: &[u8]) -> SdkResult<Keypair> {
    match bytes.len() {
        KEYPAIR_LENGTH => {
            Keypair::try_from(bytes).map_err(|e| SdkError::Signing(format!("invalid keypair: {}", e)))
        }
        SECRET_KEY_LENGTH => {
            let mut seed = [0u8; SECRET_KEY_LENGTH];
            seed.copy_from_slice(bytes);
            Ok(Keypair::new_from_array(seed))
        }
        other => Err(SdkError::Signing(format!(
            "private key must be {} or {} bytes, got {}",
            KEYPAIR_LENGTH, SECRET_KEY_LENGTH, other
        ))),
    }
}

/// Build a keypair from a hex-encoded private key.
pub fn keypair_from_hex(hex_key: &str) -> SdkResult<Keypair> {
    let bytes = hex::decode(hex_key.trim().trim_start_matches("0x"))
        .map_err(|e| SdkError::Signing(format!("private key is not valid hex: {}", e)))?;
    keypair_from_bytes(&bytes)
}
