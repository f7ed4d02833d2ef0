//! # Structured Event Emissions for Fee Handlers
//!
//! Events are the audit trail of the fee module: every configuration change,
//! collection and withdrawal publishes one. Off-chain bookkeeping rebuilds
//! accrued balances per resource from `fee_col` and `fee_dst`.
//!
//! | Topic     | Emitted when                                   |
//! |-----------|------------------------------------------------|
//! | `init`    | handler initialized                            |
//! | `fee_chg` | fee percentage changed                         |
//! | `fee_bnd` | minimum and/or maximum fee changed             |
//! | `res_set` | resource bound to its fee asset                |
//! | `fee_col` | fee collected ahead of a transfer              |
//! | `fee_dst` | accrued fee paid out to one recipient          |

use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env, Symbol};

use crate::collector::TransferRequest;
use crate::registry::{FeeConfig, RegistryKey};
use crate::resources::{FeeAsset, FeeAssetKind};

// ════════════════════════════════════════════════════════════════════
//  Event Topics
// ════════════════════════════════════════════════════════════════════

pub const TOPIC_INITIALIZED: Symbol = symbol_short!("init");
pub const TOPIC_FEE_PERCENT: Symbol = symbol_short!("fee_chg");
pub const TOPIC_FEE_BOUNDS: Symbol = symbol_short!("fee_bnd");
pub const TOPIC_RESOURCE_ASSET: Symbol = symbol_short!("res_set");
pub const TOPIC_FEE_COLLECTED: Symbol = symbol_short!("fee_col");
pub const TOPIC_FEE_DISTRIBUTED: Symbol = symbol_short!("fee_dst");

// ════════════════════════════════════════════════════════════════════
//  Event Data Structures
// ════════════════════════════════════════════════════════════════════

#[contracttype]
#[derive(Clone, Debug)]
pub struct InitializedEvent {
    pub admin: Address,
    pub bridge: Address,
}

/// `resource` is `None` for the global percentage of the flat handler.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeePercentChangedEvent {
    pub resource: Option<BytesN<32>>,
    pub percent_bps: u32,
    pub changed_by: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeBoundsChangedEvent {
    pub resource: Option<BytesN<32>>,
    pub minimum_fee: Option<i128>,
    pub maximum_fee: Option<i128>,
    pub changed_by: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResourceAssetSetEvent {
    pub resource: BytesN<32>,
    pub token: Address,
    pub kind: FeeAssetKind,
    pub changed_by: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeCollectedEvent {
    pub payer: Address,
    pub origin_domain: u32,
    pub destination_domain: u32,
    pub resource: BytesN<32>,
    pub token: Address,
    pub fee: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeDistributedEvent {
    pub resource: BytesN<32>,
    pub token: Address,
    pub recipient: Address,
    pub amount: i128,
    pub withdrawn_by: Address,
}

// ════════════════════════════════════════════════════════════════════
//  Event Emission Functions
// ════════════════════════════════════════════════════════════════════

pub fn emit_initialized(env: &Env, admin: &Address, bridge: &Address) {
    let event = InitializedEvent {
        admin: admin.clone(),
        bridge: bridge.clone(),
    };
    env.events().publish((TOPIC_INITIALIZED,), event);
}

pub fn emit_fee_percent_changed(
    env: &Env,
    resource: &Option<BytesN<32>>,
    percent_bps: u32,
    changed_by: &Address,
) {
    let event = FeePercentChangedEvent {
        resource: resource.clone(),
        percent_bps,
        changed_by: changed_by.clone(),
    };
    env.events().publish((TOPIC_FEE_PERCENT,), event);
}

/// Publishes the bounds as stored after the change.
pub fn emit_fee_bounds_changed(
    env: &Env,
    key: &RegistryKey,
    config: &FeeConfig,
    changed_by: &Address,
) {
    let event = FeeBoundsChangedEvent {
        resource: key.resource(),
        minimum_fee: config.minimum_fee,
        maximum_fee: config.maximum_fee,
        changed_by: changed_by.clone(),
    };
    env.events().publish((TOPIC_FEE_BOUNDS,), event);
}

pub fn emit_resource_asset_set(
    env: &Env,
    resource: &BytesN<32>,
    asset: &FeeAsset,
    changed_by: &Address,
) {
    let event = ResourceAssetSetEvent {
        resource: resource.clone(),
        token: asset.token.clone(),
        kind: asset.kind,
        changed_by: changed_by.clone(),
    };
    env.events()
        .publish((TOPIC_RESOURCE_ASSET, resource.clone()), event);
}

pub fn emit_fee_collected(env: &Env, request: &TransferRequest, token: &Address, fee: i128) {
    let event = FeeCollectedEvent {
        payer: request.payer.clone(),
        origin_domain: request.origin_domain,
        destination_domain: request.destination_domain,
        resource: request.resource.clone(),
        token: token.clone(),
        fee,
    };
    env.events()
        .publish((TOPIC_FEE_COLLECTED, request.resource.clone()), event);
}

pub fn emit_fee_distributed(
    env: &Env,
    resource: &BytesN<32>,
    token: &Address,
    recipient: &Address,
    amount: i128,
    withdrawn_by: &Address,
) {
    let event = FeeDistributedEvent {
        resource: resource.clone(),
        token: token.clone(),
        recipient: recipient.clone(),
        amount,
        withdrawn_by: withdrawn_by.clone(),
    };
    env.events()
        .publish((TOPIC_FEE_DISTRIBUTED, resource.clone()), event);
}
