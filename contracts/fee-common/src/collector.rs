//! # Fee Collection
//!
//! Invoked by the transfer orchestrator immediately before a transfer is
//! executed. Every check runs before any token moves, so a rejected
//! collection leaves the custody balance and the payer untouched and the
//! orchestrator aborts the transfer.
//!
//! | Asset kind | Supplied value        | Funds move by                       |
//! |------------|-----------------------|-------------------------------------|
//! | `Native`   | must equal the fee    | `transfer` authorized by the payer  |
//! | `Token`    | must be zero          | `transfer_from` on the allowance    |
//!
//! A zero fee is accepted without touching custody or emitting anything.

use soroban_sdk::{log, token, Address, BytesN, Env};

use crate::errors::FeeError;
use crate::events;
use crate::handler;
use crate::resources::{self, FeeAssetKind};

/// Parameters of one transfer attempt, as seen by the fee step.
#[derive(Clone, Debug)]
pub struct TransferRequest {
    pub payer: Address,
    pub origin_domain: u32,
    pub destination_domain: u32,
    pub resource: BytesN<32>,
}

/// Accept exactly `fee` from the payer into the handler's custody.
///
/// Returns the amount collected.
pub fn collect(
    env: &Env,
    request: &TransferRequest,
    fee: i128,
    supplied_value: i128,
) -> Result<i128, FeeError> {
    handler::require_bridge(env)?;
    let asset = resources::require_resource_asset(env, &request.resource)?;

    let expected_value = match asset.kind {
        FeeAssetKind::Native => fee,
        FeeAssetKind::Token => 0,
    };
    if supplied_value != expected_value {
        log!(env, "fee value mismatch", expected_value, supplied_value);
        return Err(FeeError::FeeValueMismatch);
    }
    if fee == 0 {
        return Ok(0);
    }

    let custody = env.current_contract_address();
    let client = token::Client::new(env, &asset.token);
    if client.balance(&request.payer) < fee {
        return Err(FeeError::FeeTransferFailed);
    }
    match asset.kind {
        FeeAssetKind::Native => {
            request.payer.require_auth();
            client.transfer(&request.payer, &custody, &fee);
        }
        FeeAssetKind::Token => {
            if client.allowance(&request.payer, &custody) < fee {
                return Err(FeeError::FeeTransferFailed);
            }
            client.transfer_from(&custody, &request.payer, &custody, &fee);
        }
    }

    events::emit_fee_collected(env, request, &asset.token, fee);
    Ok(fee)
}
