//! Transfer payload decoding.
//!
//! A transfer payload starts with the principal amount as a 32-byte
//! big-endian word; whatever follows (recipient length, recipient, ...) is
//! owned by the asset handler and ignored here.

use soroban_sdk::Bytes;

use crate::errors::FeeError;
use crate::fee_math::Principal;

/// Width of the leading amount word.
pub const AMOUNT_WORD_LEN: u32 = 32;

/// Read the principal amount from the head of `payload`.
pub fn decode_principal(payload: &Bytes) -> Result<Principal, FeeError> {
    if payload.len() < AMOUNT_WORD_LEN {
        return Err(FeeError::MalformedPayload);
    }
    let mut word = [0u8; AMOUNT_WORD_LEN as usize];
    payload.slice(0..AMOUNT_WORD_LEN).copy_into_slice(&mut word);
    Ok(Principal::from_be_bytes(&word))
}
