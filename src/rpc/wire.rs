//! JSON-RPC 2.0 wire types for the two Solana methods the SDK calls.

use serde::{Deserialize, Serialize};
use solana_commitment_config::CommitmentLevel;

/// JSON-RPC protocol version sent with every request.
pub const JSONRPC_VERSION: &str = "2.0";

/// Request envelope.
#[derive(Debug, Serialize)]
pub struct RpcRequest<'a, P> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: P,
}

/// Response envelope. Exactly one of `result` / `error` is expected.
#[derive(Debug, Deserialize)]
pub struct RpcResponse<T> {
    pub result: Option<T>,
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

/// Error object returned by the node.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

/// `{ context, value }` wrapper used by slot-contextual methods.
#[derive(Debug, Deserialize)]
pub struct RpcContextual<T> {
    pub value: T,
}

/// `getLatestBlockhash` value.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestBlockhash {
    pub blockhash: String,
    #[serde(default)]
    pub last_valid_block_height: u64,
}

/// Encoding of the transaction string passed to `sendTransaction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionEncoding {
    Base58,
}

/// `sendTransaction` configuration object.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTransactionConfig {
    pub encoding: TransactionEncoding,
    pub preflight_commitment: CommitmentLevel,
}

impl Default for SendTransactionConfig {
    fn default() -> Self {
        Self {
            encoding: TransactionEncoding::Base58,
            preflight_commitment: CommitmentLevel::Confirmed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use solana_commitment_config::CommitmentConfig;

    #[test]
    fn test_get_latest_blockhash_request_shape() {
        let request = RpcRequest {
            jsonrpc: JSONRPC_VERSION,
            id: 1,
            method: "getLatestBlockhash",
            params: [CommitmentConfig::finalized()],
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "getLatestBlockhash",
                "params": [{ "commitment": "finalized" }]
            })
        );
    }

    #[test]
    fn test_send_transaction_request_shape() {
        let request = RpcRequest {
            jsonrpc: JSONRPC_VERSION,
            id: 2,
            method: "sendTransaction",
            params: ("3xyz", SendTransactionConfig::default()),
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "jsonrpc": "2.0",
                "id": 2,
                "method": "sendTransaction",
                "params": ["3xyz", { "encoding": "base58", "preflightCommitment": "confirmed" }]
            })
        );
    }

    #[test]
    fn test_parse_latest_blockhash_response() {
        let body = r#"{
            "jsonrpc": "2.0",
            "id": 1,
            "result": {
                "context": { "slot": 2792 },
                "value": {
                    "blockhash": "EkSnNWid2cvwEVnVx9aBqawnmiCNiDgp3gUdkDPTKN1N",
                    "lastValidBlockHeight": 3090
                }
            }
        }"#;

        let parsed: RpcResponse<RpcContextual<LatestBlockhash>> = serde_json::from_str(body).unwrap();
        let value = parsed.result.unwrap().value;
        assert_eq!(value.blockhash, "EkSnNWid2cvwEVnVx9aBqawnmiCNiDgp3gUdkDPTKN1N");
        assert_eq!(value.last_valid_block_height, 3090);
        assert!(parsed.error.is_none());
    }

    #[test]
    fn test_parse_error_response() {
        let body = r#"{
            "jsonrpc": "2.0",
            "id": 2,
            "error": {
                "code": -32002,
                "message": "Transaction simulation failed: Blockhash not found",
                "data": { "err": "BlockhashNotFound", "logs": [] }
            }
        }"#;

        let parsed: RpcResponse<String> = serde_json::from_str(body).unwrap();
        assert!(parsed.result.is_none());
        let error = parsed.error.unwrap();
        assert_eq!(error.code, -32002);
        assert_eq!(error.data.unwrap()["err"], "BlockhashNotFound");
    }
}
