//! # Fee Treasury
//!
//! Admin withdrawal of accrued fees. The handler's token balance is the
//! ledger: collection credits it, withdrawal debits it, nothing else moves
//! it. A batch is planned and validated in full (arity, amounts, total
//! against the held balance) before the first transfer, so it either pays
//! every recipient or none.

use soroban_sdk::{log, token, Address, BytesN, Env, Vec};

use crate::access_control::AdminClaim;
use crate::errors::FeeError;
use crate::events;
use crate::resources;

/// Current custody balance of the asset bound to `resource`.
pub fn custody_balance(env: &Env, resource: &BytesN<32>) -> Result<i128, FeeError> {
    let asset = resources::require_resource_asset(env, resource)?;
    Ok(token::Client::new(env, &asset.token).balance(&env.current_contract_address()))
}

/// Sum of a withdrawal batch; rejects negative entries and overflow.
pub fn batch_total(amounts: &Vec<i128>) -> Result<i128, FeeError> {
    let mut total: i128 = 0;
    for amount in amounts.iter() {
        if amount < 0 {
            return Err(FeeError::InvalidAmount);
        }
        total = total
            .checked_add(amount)
            .ok_or(FeeError::FeeArithmeticOverflow)?;
    }
    Ok(total)
}

/// Pay `amounts[i]` of the resource's asset to `recipients[i]`, in order.
///
/// Returns the total withdrawn.
pub fn withdraw(
    env: &Env,
    claim: &AdminClaim,
    resource: &BytesN<32>,
    recipients: &Vec<Address>,
    amounts: &Vec<i128>,
) -> Result<i128, FeeError> {
    if recipients.len() != amounts.len() {
        return Err(FeeError::ArityMismatch);
    }
    let asset = resources::require_resource_asset(env, resource)?;
    let total = batch_total(amounts)?;

    let custody = env.current_contract_address();
    let client = token::Client::new(env, &asset.token);
    let held = client.balance(&custody);
    if total > held {
        log!(env, "withdrawal exceeds custody", total, held);
        return Err(FeeError::InsufficientTreasuryBalance);
    }

    for (recipient, amount) in recipients.iter().zip(amounts.iter()) {
        client.transfer(&custody, &recipient, &amount);
        events::emit_fee_distributed(env, resource, &asset.token, &recipient, amount, claim.admin());
    }
    Ok(total)
}
