//! Constants for the branding program.
//!
//! This module contains the instruction discriminator, field orders and size
//! constants matching the on-chain program exactly. Changing any of them is a
//! wire-format break and requires a new discriminator.

use solana_pubkey::Pubkey;

// ============================================================================
// Program IDs
// ============================================================================

/// System Program ID
pub const SYSTEM_PROGRAM_ID: Pubkey = solana_sdk_ids::system_program::ID;

// ============================================================================
// Instruction Discriminators (8 bytes each)
// ============================================================================

/// `update_branding` instruction discriminator.
pub const UPDATE_BRANDING_DISCRIMINATOR: [u8; 8] = [186, 41, 124, 13, 85, 110, 52, 23];

/// Discriminator size in bytes
pub const DISCRIMINATOR_SIZE: usize = 8;

/// Length prefix size in bytes (u32 LE)
pub const LENGTH_PREFIX_SIZE: usize = 4;

// ============================================================================
// Key Material
// ============================================================================

/// Length of an ed25519 secret seed.
pub const SECRET_KEY_LENGTH: usize = 32;

/// Length of a full keypair (secret seed ++ public key).
pub const KEYPAIR_LENGTH: usize = 64;

// ============================================================================
// Field Order
// ============================================================================

/// Top-level string fields, in wire order.
pub const RECORD_FIELDS: [&str; 4] = ["name", "symbol", "description", "logo_uri"];

/// Image keys, in wire order.
pub const IMAGE_KEYS: [&str; 6] = ["token", "twitter", "telegram", "discord", "favicon", "high_res"];

/// Color keys, in wire order.
pub const COLOR_KEYS: [&str; 4] = ["primary", "secondary", "accent", "background"];

/// Official link keys, in wire order.
pub const LINK_KEYS: [&str; 4] = ["website", "twitter", "telegram", "discord"];

/// Total number of length-prefixed strings in an `update_branding` payload.
pub const BRANDING_FIELD_COUNT: usize =
    RECORD_FIELDS.len() + IMAGE_KEYS.len() + COLOR_KEYS.len() + LINK_KEYS.len();

/// Size of an `update_branding` payload whose strings are all empty.
pub const MIN_UPDATE_BRANDING_SIZE: usize =
    DISCRIMINATOR_SIZE + BRANDING_FIELD_COUNT * LENGTH_PREFIX_SIZE;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_count() {
        assert_eq!(BRANDING_FIELD_COUNT, 18);
        assert_eq!(MIN_UPDATE_BRANDING_SIZE, 80);
    }

    #[test]
    fn test_system_program_id() {
        assert_eq!(SYSTEM_PROGRAM_ID.to_string(), "11111111111111111111111111111111");
    }
}
