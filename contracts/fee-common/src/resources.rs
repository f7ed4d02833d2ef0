//! Binding between resource identifiers and the token contract their fees
//! are paid in.

use soroban_sdk::{contracttype, Address, BytesN, Env};

use crate::access_control::AdminClaim;
use crate::errors::FeeError;
use crate::events;

/// How the fee for a resource reaches the handler.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum FeeAssetKind {
    /// Fee travels with the call as attached value of the chain's native
    /// asset; the supplied value must equal the fee exactly.
    Native = 0,
    /// Fee is pulled from the payer's allowance to the handler; no value may
    /// be attached.
    Token = 1,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeAsset {
    /// Token contract holding the fee balance.
    pub token: Address,
    pub kind: FeeAssetKind,
}

#[contracttype]
#[derive(Clone)]
pub enum ResourceKey {
    Asset(BytesN<32>),
}

pub fn get_resource_asset(env: &Env, resource: &BytesN<32>) -> Option<FeeAsset> {
    env.storage()
        .instance()
        .get(&ResourceKey::Asset(resource.clone()))
}

pub fn require_resource_asset(env: &Env, resource: &BytesN<32>) -> Result<FeeAsset, FeeError> {
    get_resource_asset(env, resource).ok_or(FeeError::ResourceNotRegistered)
}

pub fn set_resource_asset(
    env: &Env,
    claim: &AdminClaim,
    resource: &BytesN<32>,
    asset: &FeeAsset,
) -> Result<(), FeeError> {
    if get_resource_asset(env, resource).as_ref() == Some(asset) {
        return Err(FeeError::NoOpChange);
    }
    env.storage()
        .instance()
        .set(&ResourceKey::Asset(resource.clone()), asset);

    events::emit_resource_asset_set(env, resource, asset, claim.admin());
    Ok(())
}
