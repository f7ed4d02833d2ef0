//! # Basic Percentage Fee Handler
//!
//! Bridge fee handler that charges one global percentage of the transferred
//! principal for every resource. No minimum or maximum applies.
//!
//! Collection and treasury behave exactly as in the bounded handler: the
//! bridge calls [`BasicPercentFeeHandler::collect_fee`] before executing a
//! transfer, and admins withdraw accrued fees per resource asset.

#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Bytes, BytesN, Env, Vec};

use bridge_fee_common::{
    access_control, collector, fee_math, handler, payload, registry, resources, treasury,
    FeeAsset, FeeConfig, FeeError, RegistryKey, TransferRequest,
};


#[contract]
pub struct BasicPercentFeeHandler;

fn quote(env: &Env, transfer_payload: &Bytes) -> Result<i128, FeeError> {
    let principal = payload::decode_principal(transfer_payload)?;
    let percent_bps = registry::get_config(env, &RegistryKey::Global).percent_bps;
    fee_math::percent_of(principal, percent_bps)
}

#[contractimpl]
#[allow(clippy::too_many_arguments)]
impl BasicPercentFeeHandler {
    // ── Initialization ──────────────────────────────────────────────

    pub fn initialize(env: Env, admin: Address, bridge: Address) -> Result<(), FeeError> {
        handler::initialize(&env, &admin, &bridge)
    }

    // ── Admin: Fee configuration ────────────────────────────────────

    pub fn set_resource_asset(
        env: Env,
        caller: Address,
        resource: BytesN<32>,
        asset: FeeAsset,
    ) -> Result<(), FeeError> {
        let claim = access_control::require_admin(&env, &caller)?;
        resources::set_resource_asset(&env, &claim, &resource, &asset)
    }

    /// Set the global fee percentage (bps, 0–10 000).
    pub fn set_fee_percent(env: Env, caller: Address, percent_bps: u32) -> Result<(), FeeError> {
        let claim = access_control::require_admin(&env, &caller)?;
        registry::set_fee_percent(&env, &claim, &RegistryKey::Global, percent_bps)
    }

    // ── Transfer pipeline ───────────────────────────────────────────

    /// `floor(principal × percent_bps ÷ 10 000)`; `resource` and the domains
    /// are accepted for interface parity with the bounded handler.
    pub fn calculate_fee(
        env: Env,
        origin_domain: u32,
        destination_domain: u32,
        resource: BytesN<32>,
        transfer_payload: Bytes,
        fee_data: Bytes,
    ) -> Result<(i128, Bytes), FeeError> {
        let _ = (origin_domain, destination_domain, resource, fee_data);
        let fee = quote(&env, &transfer_payload)?;
        Ok((fee, Bytes::new(&env)))
    }

    /// Collect the fee for one transfer attempt. Bridge-only.
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
        let fee = quote(&env, &transfer_payload)?;
        let request = TransferRequest {
            payer,
            origin_domain,
            destination_domain,
            resource,
        };
        collector::collect(&env, &request, fee, supplied_value)
    }

    // ── Admin: Treasury ─────────────────────────────────────────────

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

    /// Global configuration; bounds are always `None` for this handler.
    pub fn get_config(env: Env) -> FeeConfig {
        registry::get_config(&env, &RegistryKey::Global)
    }

    pub fn get_resource_asset(env: Env, resource: BytesN<32>) -> Option<FeeAsset> {
        resources::get_resource_asset(&env, &resource)
    }

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
