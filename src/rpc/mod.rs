//! JSON-RPC transport: a scoped session plus the wire types it speaks.
//!
//! The session speaks only `getLatestBlockhash` and `sendTransaction`, and
//! never retries.

pub mod session;
pub mod wire;

pub use session::RpcSession;
pub use wire::{SendTransactionConfig, TransactionEncoding, JSONRPC_VERSION};
