//! Instruction builder for the `update_branding` instruction.
//!
//! Payload layout:
//! - [0..8]  discriminator
//! - then 18 strings, each `[len: u32 LE][utf-8 bytes]`, in this order:
//!   name, symbol, description, logo_uri,
//!   images {token, twitter, telegram, discord, favicon, high_res},
//!   colors {primary, secondary, accent, background},
//!   official_links {website, twitter, telegram, discord}

use solana_instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use crate::error::{SdkError, SdkResult};
use crate::program::constants::{
    DISCRIMINATOR_SIZE, MIN_UPDATE_BRANDING_SIZE, SYSTEM_PROGRAM_ID,
    UPDATE_BRANDING_DISCRIMINATOR,
};
use crate::program::types::{BrandingColors, BrandingImages, BrandingRecord, OfficialLinks};
use crate::program::utils::{deserialize_string, write_string};

// ============================================================================
// Encoded Payload
// ============================================================================

/// Encoded `update_branding` instruction data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedInstruction(Vec<u8>);

impl EncodedInstruction {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The leading 8-byte discriminator.
    pub fn discriminator(&self) -> &[u8] {
        &self.0[..DISCRIMINATOR_SIZE.min(self.0.len())]
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for EncodedInstruction {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

// ============================================================================
// Encoding
// ============================================================================

/// Encode a branding record into `update_branding` instruction data.
pub fn encode_update_branding(record: &BrandingRecord) -> SdkResult<EncodedInstruction> {
    let fields = record.fields();
    let capacity = MIN_UPDATE_BRANDING_SIZE + fields.iter().map(|(_, s)| s.len()).sum::<usize>();

    let mut data = Vec::with_capacity(capacity);
    data.extend_from_slice(&UPDATE_BRANDING_DISCRIMINATOR);
    for (field, value) in fields {
        write_string(&mut data, field, value)?;
    }

    Ok(EncodedInstruction(data))
}

/// Decode `update_branding` instruction data back into a record.
///
/// Rejects a wrong discriminator, truncated data and trailing bytes.
pub fn decode_update_branding(data: &[u8]) -> SdkResult<BrandingRecord> {
    if data.len() < MIN_UPDATE_BRANDING_SIZE {
        return Err(SdkError::InvalidDataLength {
            expected: MIN_UPDATE_BRANDING_SIZE,
            actual: data.len(),
        });
    }

    if data[..DISCRIMINATOR_SIZE] != UPDATE_BRANDING_DISCRIMINATOR {
        return Err(SdkError::InvalidDiscriminator {
            expected: hex::encode(UPDATE_BRANDING_DISCRIMINATOR),
            actual: hex::encode(&data[..DISCRIMINATOR_SIZE]),
        });
    }

    let mut offset = DISCRIMINATOR_SIZE;
    let mut next = || -> SdkResult<String> {
        let (s, consumed) = deserialize_string(&data[offset..])?;
        offset += consumed;
        Ok(s)
    };

    let record = BrandingRecord {
        name: next()?,
        symbol: next()?,
        description: next()?,
        logo_uri: next()?,
        images: BrandingImages {
            token: next()?,
            twitter: next()?,
            telegram: next()?,
            discord: next()?,
            favicon: next()?,
            high_res: next()?,
        },
        colors: BrandingColors {
            primary: next()?,
            secondary: next()?,
            accent: next()?,
            background: next()?,
        },
        official_links: OfficialLinks {
            website: next()?,
            twitter: next()?,
            telegram: next()?,
            discord: next()?,
        },
    };

    if offset != data.len() {
        return Err(SdkError::InvalidDataLength {
            expected: offset,
            actual: data.len(),
        });
    }

    Ok(record)
}

// ============================================================================
// Instruction Builders
// ============================================================================

/// Account list for `update_branding`.
///
/// Accounts:
/// 0. token_state (mut) - Branding state account
/// 1. authority (signer) - Update authority
/// 2. system_program (readonly)
pub fn update_branding_accounts(token_state: &Pubkey, authority: &Pubkey) -> Vec<AccountMeta> {
    vec![
        AccountMeta::new(*token_state, false),
        AccountMeta::new_readonly(*authority, true),
        AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
    ]
}

/// Build UpdateBranding instruction.
pub fn build_update_branding_ix(
    record: &BrandingRecord,
    token_state: &Pubkey,
    authority: &Pubkey,
    program_id: &Pubkey,
) -> SdkResult<Instruction> {
    let data = encode_update_branding(record)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: update_branding_accounts(token_state, authority),
        data: data.into_inner(),
    })
}
