//! Unified SDK error types.

use std::fmt;

use thiserror::Error;

/// Top-level SDK error.
///
/// Every variant names the step that failed; nothing is retried or recovered
/// inside the SDK.
#[derive(Error, Debug)]
pub enum SdkError {
    /// A required key is absent from the input record (dotted path).
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// A field value cannot be encoded into the instruction payload.
    #[error("Encoding error in `{field}`: {reason}")]
    Encoding { field: String, reason: String },

    /// Malformed key material or signer failure.
    #[error("Signing error: {0}")]
    Signing(String),

    /// Transport failure, non-2xx status or RPC error object.
    #[error("RPC error during {step}: {source}")]
    Rpc {
        step: RpcStep,
        #[source]
        source: RpcError,
    },

    /// The node rejected the transaction because its blockhash expired.
    #[error("Blockhash {blockhash} expired before submission: {message}")]
    StaleBlockhash { blockhash: String, message: String },

    /// Instruction data does not start with the expected discriminator.
    #[error("Invalid instruction discriminator: expected {expected}, got {actual}")]
    InvalidDiscriminator { expected: String, actual: String },

    /// Instruction data is truncated or has trailing bytes.
    #[error("Invalid data length: expected {expected}, got {actual}")]
    InvalidDataLength { expected: usize, actual: usize },

    /// Address string is not a valid base58 public key.
    #[error("Invalid pubkey: {0}")]
    InvalidPubkey(String),

    /// Missing or malformed configuration value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transaction serialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl SdkError {
    /// Wrap an [`RpcError`] with the step it happened in.
    pub fn rpc(step: RpcStep, source: impl Into<RpcError>) -> Self {
        SdkError::Rpc {
            step,
            source: source.into(),
        }
    }
}

/// Result type alias for SDK operations.
pub type SdkResult<T> = Result<T, SdkError>;

/// The network step a [`SdkError::Rpc`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpcStep {
    /// Opening the HTTP session.
    Connect,
    /// `getLatestBlockhash`.
    FetchBlockhash,
    /// `sendTransaction`.
    SendTransaction,
}

impl RpcStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            RpcStep::Connect => "connect",
            RpcStep::FetchBlockhash => "getLatestBlockhash",
            RpcStep::SendTransaction => "sendTransaction",
        }
    }
}

impl fmt::Display for RpcStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON-RPC transport errors.
#[derive(Error, Debug)]
pub enum RpcError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    /// Error object returned by the node, passed through unchanged.
    #[error("Remote error {code}: {message}")]
    Remote {
        code: i64,
        message: String,
        data: Option<serde_json::Value>,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}
