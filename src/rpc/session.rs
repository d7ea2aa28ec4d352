//! Per-submission JSON-RPC session.
//!
//! An [`RpcSession`] owns its own `reqwest::Client` with idle pooling
//! disabled. It lives for exactly one submission and is released when it
//! goes out of scope, on success, on error, or when the enclosing future is
//! dropped.

use std::str::FromStr;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use solana_commitment_config::CommitmentConfig;
use solana_hash::Hash;
use solana_signature::Signature;

use crate::error::{RpcError, RpcStep, SdkError, SdkResult};
use crate::rpc::wire::{
    LatestBlockhash, RpcContextual, RpcRequest, RpcResponse, SendTransactionConfig,
    JSONRPC_VERSION,
};

/// Scoped JSON-RPC session bound to a single endpoint.
pub struct RpcSession {
    endpoint: String,
    client: Client,
    next_id: u64,
}

impl RpcSession {
    /// Open a session. No network traffic happens until the first call.
    pub fn open(endpoint: &str, timeout: Duration) -> SdkResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| SdkError::rpc(RpcStep::Connect, e))?;

        Ok(Self {
            endpoint: endpoint.to_string(),
            client,
            next_id: 1,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the latest `finalized` blockhash.
    pub async fn get_latest_blockhash(&mut self) -> SdkResult<Hash> {
        let response: RpcContextual<LatestBlockhash> = self
            .call("getLatestBlockhash", [CommitmentConfig::finalized()])
            .await
            .map_err(|e| SdkError::rpc(RpcStep::FetchBlockhash, e))?;

        let blockhash = Hash::from_str(&response.value.blockhash).map_err(|e| {
            SdkError::rpc(
                RpcStep::FetchBlockhash,
                RpcError::MalformedResponse(format!(
                    "invalid blockhash {:?}: {}",
                    response.value.blockhash, e
                )),
            )
        })?;

        tracing::debug!(
            %blockhash,
            last_valid_block_height = response.value.last_valid_block_height,
            "Fetched latest blockhash"
        );
        Ok(blockhash)
    }

    /// Submit a serialized transaction, base58-encoded, with `confirmed`
    /// preflight commitment.
    ///
    /// `blockhash` is the one the transaction was signed with; it only labels
    /// a [`SdkError::StaleBlockhash`].
    pub async fn send_transaction(
        &mut self,
        transaction: &[u8],
        blockhash: &Hash,
    ) -> SdkResult<Signature> {
        let encoded = bs58::encode(transaction).into_string();
        let result: SdkResult<String> = self
            .call("sendTransaction", (encoded, SendTransactionConfig::default()))
            .await
            .map_err(|e| match e {
                RpcError::Remote { message, data, .. }
                    if is_blockhash_not_found(&message, data.as_ref()) =>
                {
                    SdkError::StaleBlockhash {
                        blockhash: blockhash.to_string(),
                        message,
                    }
                }
                other => SdkError::rpc(RpcStep::SendTransaction, other),
            });

        let signature = result?;
        Signature::from_str(&signature).map_err(|e| {
            SdkError::rpc(
                RpcStep::SendTransaction,
                RpcError::MalformedResponse(format!("invalid signature {:?}: {}", signature, e)),
            )
        })
    }

    /// Issue one JSON-RPC call and unwrap `result`.
    async fn call<P: Serialize, T: DeserializeOwned>(
        &mut self,
        method: &str,
        params: P,
    ) -> Result<T, RpcError> {
        let id = self.next_id;
        self.next_id += 1;

        let request = RpcRequest {
            jsonrpc: JSONRPC_VERSION,
            id,
            method,
            params,
        };

        tracing::debug!(method, id, endpoint = %self.endpoint, "JSON-RPC request");

        let response = self.client.post(&self.endpoint).json(&request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(RpcError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: RpcResponse<T> = serde_json::from_str(&body)
            .map_err(|e| RpcError::MalformedResponse(format!("{}: {}", method, e)))?;

        if let Some(error) = parsed.error {
            tracing::warn!(method, code = error.code, error = %error.message, "JSON-RPC error");
            return Err(RpcError::Remote {
                code: error.code,
                message: error.message,
                data: error.data,
            });
        }

        parsed.result.ok_or_else(|| {
            RpcError::MalformedResponse(format!("{}: response has neither result nor error", method))
        })
    }
}

/// Whether an RPC error object reports an expired or unknown blockhash.
///
/// Matches the preflight `err` tag or the node's message text.
pub(crate) fn is_blockhash_not_found(message: &str, data: Option<&Value>) -> bool {
    let tagged = data
        .and_then(|d| d.get("err"))
        .and_then(Value::as_str)
        .map(|err| err == "BlockhashNotFound")
        .unwrap_or(false);

    tagged || message.to_ascii_lowercase().contains("blockhash not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blockhash_not_found_by_tag() {
        let data = json!({ "err": "BlockhashNotFound", "logs": [] });
        assert!(is_blockhash_not_found("Transaction simulation failed", Some(&data)));
    }

    #[test]
    fn test_blockhash_not_found_by_message() {
        assert!(is_blockhash_not_found(
            "Transaction simulation failed: Blockhash not found",
            None
        ));
    }

    #[test]
    fn test_other_errors_are_not_stale() {
        let data = json!({ "err": { "InstructionError": [0, { "Custom": 6000 }] } });
        assert!(!is_blockhash_not_found(
            "Transaction simulation failed: Error processing Instruction 0",
            Some(&data)
        ));
        assert!(!is_blockhash_not_found("Node is behind by 42 slots", None));
    }

    #[tokio::test]
    async fn test_https_endpoint_reaches_connect() {
        let mut session = RpcSession::open("https://127.0.0.1:1", Duration::from_secs(5)).unwrap();

        match session.get_latest_blockhash().await {
            Err(SdkError::Rpc {
                step: RpcStep::FetchBlockhash,
                source: RpcError::Transport(e),
            }) => {
                let detail = format!("{:?}", e);
                assert!(!detail.contains("scheme is not http"), "{}", detail);
                assert!(e.is_connect(), "{}", detail);
            }
            other => panic!("expected a connect failure, got {:?}", other),
        }
    }

    #[test]
    fn test_open_does_not_touch_network() {
        let session = RpcSession::open("http://127.0.0.1:1", Duration::from_secs(1)).unwrap();
        assert_eq!(session.endpoint(), "http://127.0.0.1:1");
    }
}
