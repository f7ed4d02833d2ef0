//! # Fee Registry
//!
//! Configuration store for fee parameters. The flat handler keeps one record
//! under [`RegistryKey::Global`]; the bounded handler keeps one record per
//! resource identifier under [`RegistryKey::Resource`].
//!
//! Records are created implicitly: an unknown key reads as the zero
//! configuration (0 bps, no bounds). Each setter overwrites exactly one
//! field, except [`set_fee_bounds`] which replaces both bounds at once.
//!
//! ## Bounds invariant
//!
//! When both bounds are set, `minimum_fee <= maximum_fee`. The single-field
//! setters validate the proposed value against the *stored* opposite bound,
//! so narrowing a range must be sequenced after widening it, or done through
//! [`set_fee_bounds`].

use soroban_sdk::{contracttype, BytesN, Env};

use crate::access_control::AdminClaim;
use crate::errors::FeeError;
use crate::events;
use crate::fee_math::BASIS_POINTS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RegistryKey {
    /// Single record shared by every resource.
    Global,
    /// Record owned by one resource identifier.
    Resource(BytesN<32>),
}

impl RegistryKey {
    pub fn resource(&self) -> Option<BytesN<32>> {
        match self {
            RegistryKey::Global => None,
            RegistryKey::Resource(id) => Some(id.clone()),
        }
    }
}

/// Fee parameters for one registry key.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FeeConfig {
    /// Fee as basis points of the transferred principal.
    pub percent_bps: u32,
    /// Floor applied after the percentage; `None` is non-binding.
    pub minimum_fee: Option<i128>,
    /// Ceiling applied after the percentage; `None` is unbounded.
    pub maximum_fee: Option<i128>,
}

pub fn get_config(env: &Env, key: &RegistryKey) -> FeeConfig {
    env.storage().instance().get(key).unwrap_or_default()
}

fn store_config(env: &Env, key: &RegistryKey, config: &FeeConfig) {
    env.storage().instance().set(key, config);
}

pub fn set_fee_percent(
    env: &Env,
    claim: &AdminClaim,
    key: &RegistryKey,
    percent_bps: u32,
) -> Result<(), FeeError> {
    if percent_bps > BASIS_POINTS {
        return Err(FeeError::FeePercentOutOfRange);
    }
    let mut config = get_config(env, key);
    if config.percent_bps == percent_bps {
        return Err(FeeError::NoOpChange);
    }
    config.percent_bps = percent_bps;
    store_config(env, key, &config);

    events::emit_fee_percent_changed(env, &key.resource(), percent_bps, claim.admin());
    Ok(())
}

pub fn set_minimum_fee(
    env: &Env,
    claim: &AdminClaim,
    key: &RegistryKey,
    amount: i128,
) -> Result<(), FeeError> {
    if amount < 0 {
        return Err(FeeError::InvalidAmount);
    }
    let mut config = get_config(env, key);
    if config.minimum_fee == Some(amount) {
        return Err(FeeError::NoOpChange);
    }
    if matches!(config.maximum_fee, Some(max) if amount > max) {
        return Err(FeeError::BoundsViolation);
    }
    config.minimum_fee = Some(amount);
    store_config(env, key, &config);

    events::emit_fee_bounds_changed(env, key, &config, claim.admin());
    Ok(())
}

pub fn set_maximum_fee(
    env: &Env,
    claim: &AdminClaim,
    key: &RegistryKey,
    amount: i128,
) -> Result<(), FeeError> {
    if amount < 0 {
        return Err(FeeError::InvalidAmount);
    }
    let mut config = get_config(env, key);
    if config.maximum_fee == Some(amount) {
        return Err(FeeError::NoOpChange);
    }
    if matches!(config.minimum_fee, Some(min) if amount < min) {
        return Err(FeeError::BoundsViolation);
    }
    config.maximum_fee = Some(amount);
    store_config(env, key, &config);

    events::emit_fee_bounds_changed(env, key, &config, claim.admin());
    Ok(())
}

/// Replace both bounds in one step, validated against each other rather
/// than against the stored values.
pub fn set_fee_bounds(
    env: &Env,
    claim: &AdminClaim,
    key: &RegistryKey,
    minimum: i128,
    maximum: i128,
) -> Result<(), FeeError> {
    if minimum < 0 || maximum < 0 {
        return Err(FeeError::InvalidAmount);
    }
    if minimum > maximum {
        return Err(FeeError::BoundsViolation);
    }
    let mut config = get_config(env, key);
    if config.minimum_fee == Some(minimum) && config.maximum_fee == Some(maximum) {
        return Err(FeeError::NoOpChange);
    }
    config.minimum_fee = Some(minimum);
    config.maximum_fee = Some(maximum);
    store_config(env, key, &config);

    events::emit_fee_bounds_changed(env, key, &config, claim.admin());
    Ok(())
}
