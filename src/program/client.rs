//! Async client for submitting `update_branding` transactions.
//!
//! Each submission opens its own [`RpcSession`], runs
//! blockhash → assemble → sign → serialize → send strictly in order, and
//! drops the session before returning. Nothing is retried.

use std::time::Duration;

use serde_json::Value;
use solana_instruction::{AccountMeta, Instruction};
use solana_keypair::Keypair;
use solana_pubkey::Pubkey;
use solana_signature::Signature;
use solana_signer::Signer;

use crate::config::DeployConfig;
use crate::error::SdkResult;
use crate::network::{DEFAULT_RPC_TIMEOUT_SECS, DEFAULT_RPC_URL};
use crate::program::instructions::{
    encode_update_branding, update_branding_accounts, EncodedInstruction,
};
use crate::program::transaction::{build_signed_transaction, serialize_transaction};
use crate::program::types::BrandingRecord;
use crate::rpc::RpcSession;

/// Client for submitting branding updates to the branding program.
#[derive(Debug, Clone)]
pub struct BrandingClient {
    rpc_url: String,
    program_id: Pubkey,
    timeout: Duration,
}

impl BrandingClient {
    /// Create a new client for `program_id` on the given RPC endpoint.
    pub fn new(rpc_url: &str, program_id: Pubkey) -> Self {
        Self {
            rpc_url: rpc_url.trim_end_matches('/').to_string(),
            program_id,
            timeout: Duration::from_secs(DEFAULT_RPC_TIMEOUT_SECS),
        }
    }

    /// Create a new client on the default (devnet) endpoint.
    pub fn devnet(program_id: Pubkey) -> Self {
        Self::new(DEFAULT_RPC_URL, program_id)
    }

    /// Create a client from a loaded deploy configuration.
    pub fn from_config(config: &DeployConfig) -> Self {
        Self::new(&config.rpc_url, config.program_id).with_timeout(config.timeout)
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    // ========================================================================
    // Submission
    // ========================================================================

    /// Submit one instruction to the program and return its signature.
    pub async fn submit(
        &self,
        data: &EncodedInstruction,
        accounts: Vec<AccountMeta>,
        signer: &Keypair,
    ) -> SdkResult<Signature> {
        let instruction = Instruction {
            program_id: self.program_id,
            accounts,
            data: data.as_bytes().to_vec(),
        };

        let mut session = RpcSession::open(&self.rpc_url, self.timeout)?;

        let blockhash = session.get_latest_blockhash().await?;
        let transaction = build_signed_transaction(instruction, signer, &blockhash)?;
        let wire = serialize_transaction(&transaction)?;

        tracing::debug!(
            program_id = %self.program_id,
            bytes = wire.len(),
            "Submitting transaction"
        );
        let signature = session.send_transaction(&wire, &blockhash).await?;

        tracing::info!(%signature, "Transaction submitted");
        Ok(signature)
    }

    /// Encode `record` and submit it as `update_branding`, signed by the
    /// update authority.
    pub async fn update_branding(
        &self,
        record: &BrandingRecord,
        token_state: &Pubkey,
        authority: &Keypair,
    ) -> SdkResult<Signature> {
        let data = encode_update_branding(record)?;
        let accounts = update_branding_accounts(token_state, &authority.pubkey());
        self.submit(&data, accounts, authority).await
    }

    /// Build a record from a JSON document and submit it.
    ///
    /// The document is validated before any network call.
    pub async fn update_branding_from_json(
        &self,
        record: &Value,
        token_state: &Pubkey,
        authority: &Keypair,
    ) -> SdkResult<Signature> {
        let record = BrandingRecord::from_json(record)?;
        self.update_branding(&record, token_state, authority).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let program_id = Pubkey::new_unique();
        let client = BrandingClient::new("https://api.devnet.solana.com/", program_id);
        assert_eq!(client.rpc_url(), "https://api.devnet.solana.com");
        assert_eq!(client.program_id(), &program_id);
        assert_eq!(client.timeout(), Duration::from_secs(DEFAULT_RPC_TIMEOUT_SECS));
    }

    #[test]
    fn test_client_with_timeout() {
        let client = BrandingClient::devnet(Pubkey::new_unique()).with_timeout(Duration::from_secs(5));
        assert_eq!(client.rpc_url(), DEFAULT_RPC_URL);
        assert_eq!(client.timeout(), Duration::from_secs(5));
    }
}
