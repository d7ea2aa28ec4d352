//! Deploy configuration loaded from environment variables.
//!
//! The CLI loads a `.env` file first; the library only reads the process
//! environment (or any lookup function, for tests).

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use solana_pubkey::Pubkey;

use crate::error::{SdkError, SdkResult};
use crate::network::{DEFAULT_RPC_TIMEOUT_SECS, DEFAULT_RPC_URL};
use crate::program::constants::{KEYPAIR_LENGTH, SECRET_KEY_LENGTH};

pub const RPC_URL_VAR: &str = "SOLANA_RPC_URL";
pub const PRIVATE_KEY_VAR: &str = "PRIVATE_KEY";
pub const PROGRAM_ID_VAR: &str = "PROGRAM_ID";
pub const TOKEN_STATE_VAR: &str = "TOKEN_STATE_ADDRESS";
pub const RPC_TIMEOUT_VAR: &str = "RPC_TIMEOUT_SECS";

/// Everything needed to submit a branding update.
#[derive(Clone)]
pub struct DeployConfig {
    pub rpc_url: String,
    /// Raw private key bytes (decoded from hex).
    pub private_key: Vec<u8>,
    pub program_id: Pubkey,
    pub token_state: Pubkey,
    pub timeout: Duration,
}

impl DeployConfig {
    /// Load from the process environment.
    pub fn from_env() -> SdkResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> SdkResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let require = |key: &str| {
            get(key).ok_or_else(|| SdkError::Config(format!("{} is not set", key)))
        };

        let rpc_url = get(RPC_URL_VAR).unwrap_or_else(|| DEFAULT_RPC_URL.to_string());

        let private_key = hex::decode(require(PRIVATE_KEY_VAR)?.trim_start_matches("0x"))
            .map_err(|e| SdkError::Config(format!("{} is not valid hex: {}", PRIVATE_KEY_VAR, e)))?;
        if private_key.len() != KEYPAIR_LENGTH && private_key.len() != SECRET_KEY_LENGTH {
            return Err(SdkError::Signing(format!(
                "private key must be {} or {} bytes, got {}",
                KEYPAIR_LENGTH,
                SECRET_KEY_LENGTH,
                private_key.len()
            )));
        }

        let program_id = parse_pubkey(PROGRAM_ID_VAR, &require(PROGRAM_ID_VAR)?)?;
        let token_state = parse_pubkey(TOKEN_STATE_VAR, &require(TOKEN_STATE_VAR)?)?;

        let timeout = match get(RPC_TIMEOUT_VAR) {
            Some(secs) => {
                let secs = secs.parse::<u64>().map_err(|e| {
                    SdkError::Config(format!("{} must be a whole number of seconds: {}", RPC_TIMEOUT_VAR, e))
                })?;
                if secs == 0 {
                    return Err(SdkError::Config(format!("{} must be at least 1", RPC_TIMEOUT_VAR)));
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_RPC_TIMEOUT_SECS),
        };

        Ok(Self {
            rpc_url,
            private_key,
            program_id,
            token_state,
            timeout,
        })
    }

    /// Build the signer keypair from the configured private key.
    #[cfg(feature = "native-auth")]
    pub fn keypair(&self) -> SdkResult<solana_keypair::Keypair> {
        crate::signing::keypair_from_bytes(&self.private_key)
    }
}

impl fmt::Debug for DeployConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeployConfig")
            .field("rpc_url", &self.rpc_url)
            .field("private_key", &"<redacted>")
            .field("program_id", &self.program_id)
            .field("token_state", &self.token_state)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn parse_pubkey(var: &str, value: &str) -> SdkResult<Pubkey> {
    Pubkey::from_str(value).map_err(|e| SdkError::InvalidPubkey(format!("{}={}: {}", var, value, e)))
}
