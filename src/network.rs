//! Network URL constants for the branding deployer.

/// Default Solana JSON-RPC endpoint (devnet).
pub const DEFAULT_RPC_URL: &str = "https://api.devnet.solana.com";

/// Solana mainnet-beta JSON-RPC endpoint.
pub const MAINNET_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

/// Default timeout for a single JSON-RPC request, in seconds.
pub const DEFAULT_RPC_TIMEOUT_SECS: u64 = 30;
