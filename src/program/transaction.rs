//! Transaction assembly, signing and wire serialization.

use solana_hash::Hash;
use solana_instruction::Instruction;
use solana_keypair::Keypair;
use solana_signer::Signer;
use solana_transaction::Transaction;

use crate::error::{SdkError, SdkResult};

/// Build a single-instruction transaction paid for and signed by `signer`.
///
/// Fails with [`SdkError::Signing`] when the instruction requires a signer
/// other than `signer`.
pub fn build_signed_transaction(
    instruction: Instruction,
    signer: &Keypair,
    recent_blockhash: &Hash,
) -> SdkResult<Transaction> {
    let mut transaction = Transaction::new_with_payer(&[instruction], Some(&signer.pubkey()));
    transaction
        .try_sign(&[signer], recent_blockhash.clone())
        .map_err(|e| SdkError::Signing(e.to_string()))?;
    Ok(transaction)
}

/// Serialize a signed transaction into its wire format
/// (shortvec signatures ++ message).
pub fn serialize_transaction(transaction: &Transaction) -> SdkResult<Vec<u8>> {
    bincode::serialize(transaction).map_err(|e| SdkError::Serialization(e.to_string()))
}
