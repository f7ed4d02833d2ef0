//! # Percentage Fee Handler with Bounds
//!
//! Bridge fee handler that charges a percentage of the transferred principal,
//! configured independently per resource identifier, then clamps the result
//! into an optional `[minimum_fee, maximum_fee]` range for that resource.
//!
//! The transfer orchestrator (bridge) calls [`PercentFeeHandler::collect_fee`]
//! before executing a transfer; a failed collection aborts the transfer.
//! Administrators configure fees per resource and withdraw the accrued
//! custody balance.

#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Bytes, BytesN, Env, Vec};

use bridge_fee_common::{
    access_control, collector, fee_math, handler, payload, registry, resources, treasury,
    FeeAsset, FeeConfig, FeeError, RegistryKey, TransferRequest,
};

#[cfg(test)]
mod withdraw_fees_test;

#[contract]
pub struct PercentFeeHandler;

fn fee_key(resource: &BytesN<32>) -> RegistryKey {
    RegistryKey::Resource(resource.clone())
}

fn quote(env: &Env, resource: &BytesN<32>, transfer_payload: &Bytes) -> Result<i128, FeeError> {
    let principal = payload::decode_principal(transfer_payload)?;
    fee_math::compute_fee(principal, &registry::get_config(env, &fee_key(resource)))
}

#[contractimpl]
#[allow(clippy::too_many_arguments)]
impl PercentFeeHandler {
    // ── Initialization ──────────────────────────────────────────────

    /// One-time initialization. `admin` becomes the only admin-role holder
    /// and `bridge` the only address allowed to drive fee collection.
    pub fn initialize(env: Env, admin: Address, bridge: Address) -> Result<(), FeeError> {
        handler::initialize(&env, &admin, &bridge)
    }

    // ── Admin: Fee configuration ────────────────────────────────────

    /// Bind a resource to the token its fees are paid in.
    pub fn set_resource_asset(
        env: Env,
        caller: Address,
        resource: BytesN<32>,
        asset: FeeAsset,
    ) -> Result<(), FeeError> {
        let claim = access_control::require_admin(&env, &caller)?;
        resources::set_resource_asset(&env, &claim, &resource, &asset)
    }

    /// Set the fee percentage (bps, 0–10 000) for `resource`.
    pub fn set_fee_percent(
        env: Env,
        caller: Address,
        resource: BytesN<32>,
        percent_bps: u32,
    ) -> Result<(), FeeError> {
        let claim = access_control::require_admin(&env, &caller)?;
        registry::set_fee_percent(&env, &claim, &fee_key(&resource), percent_bps)
    }

    /// Set the fee floor for `resource`. Must not exceed a stored maximum.
    pub fn set_minimum_fee(
        env: Env,
        caller: Address,
        resource: BytesN<32>,
        amount: i128,
    ) -> Result<(), FeeError> {
        let claim = access_control::require_admin(&env, &caller)?;
        registry::set_minimum_fee(&env, &claim, &fee_key(&resource), amount)
    }

    /// Set the fee ceiling for `resource`. Must not be below a stored minimum.
    pub fn set_maximum_fee(
        env: Env,
        caller: Address,
        resource: BytesN<32>,
        amount: i128,
    ) -> Result<(), FeeError> {
        let claim = access_control::require_admin(&env, &caller)?;
        registry::set_maximum_fee(&env, &claim, &fee_key(&resource), amount)
    }

    /// Replace both bounds for `resource` at once.
    pub fn set_fee_bounds(
        env: Env,
        caller: Address,
        resource: BytesN<32>,
        minimum: i128,
        maximum: i128,
    ) -> Result<(), FeeError> {
        let claim = access_control::require_admin(&env, &caller)?;
        registry::set_fee_bounds(&env, &claim, &fee_key(&resource), minimum, maximum)
    }

    // ── Transfer pipeline ───────────────────────────────────────────

    /// Fee owed for a transfer of `transfer_payload` through `resource`.
    ///
    /// Read-only; safe to call as a preview. Returns `(fee, extra_data)`,
    /// where `extra_data` is always empty for this handler.
    pub fn calculate_fee(
        env: Env,
        origin_domain: u32,
        destination_domain: u32,
        resource: BytesN<32>,
        transfer_payload: Bytes,
        fee_data: Bytes,
    ) -> Result<(i128, Bytes), FeeError> {
        // Domains and fee data do not affect percentage pricing.
        let _ = (origin_domain, destination_domain, fee_data);
        let fee = quote(&env, &resource, &transfer_payload)?;
        Ok((fee, Bytes::new(&env)))
    }

    /// Collect the fee for one transfer attempt. Bridge-only.
    ///
    /// `supplied_value` is the value attached to the transfer: the exact fee
    /// for native-style assets, zero for token-style assets.
    pub fn collect_fee(
        env: Env,
        payer: Address,
        origin_domain: u32,
        destination_domain: u32,
        resource: BytesN<32>,
        transfer_payload: Bytes,
        fee_data: Bytes,
        supplied_value: i128,
    ) -> Result<i128, FeeError> {
        let _ = fee_data;
        let fee = quote(&env, &resource, &transfer_payload)?;
        let request = TransferRequest {
            payer,
            origin_domain,
            destination_domain,
            resource,
        };
        collector::collect(&env, &request, fee, supplied_value)
    }

    // ── Admin: Treasury ─────────────────────────────────────────────

    /// Pay accrued fees of `resource` to `recipients`, all or nothing.
    pub fn withdraw_fees(
        env: Env,
        caller: Address,
        resource: BytesN<32>,
        recipients: Vec<Address>,
        amounts: Vec<i128>,
    ) -> Result<i128, FeeError> {
        let claim = access_control::require_admin(&env, &caller)?;
        treasury::withdraw(&env, &claim, &resource, &recipients, &amounts)
    }

    // ── Read-only queries ───────────────────────────────────────────

    /// Fee configuration of `resource` (zero configuration if never set).
    pub fn get_config(env: Env, resource: BytesN<32>) -> FeeConfig {
        registry::get_config(&env, &fee_key(&resource))
    }

    pub fn get_resource_asset(env: Env, resource: BytesN<32>) -> Option<FeeAsset> {
        resources::get_resource_asset(&env, &resource)
    }

    /// Accrued fees held for `resource`.
    pub fn get_custody_balance(env: Env, resource: BytesN<32>) -> Result<i128, FeeError> {
        treasury::custody_balance(&env, &resource)
    }

    pub fn is_admin(env: Env, account: Address) -> bool {
        access_control::is_admin(&env, &account)
    }

    pub fn get_bridge(env: Env) -> Result<Address, FeeError> {
        handler::get_bridge(&env)
    }
}
