//! One-time setup shared by both fee handlers: the deployer becomes the sole
//! admin and the transfer orchestrator (bridge) address is bound.

use soroban_sdk::{contracttype, Address, Env};

use crate::access_control::{self, ROLE_ADMIN};
use crate::errors::FeeError;
use crate::events;

#[contracttype]
#[derive(Clone)]
pub enum HandlerKey {
    /// Transfer orchestrator allowed to drive fee collection.
    Bridge,
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&HandlerKey::Bridge)
}

pub fn require_initialized(env: &Env) -> Result<(), FeeError> {
    if is_initialized(env) {
        Ok(())
    } else {
        Err(FeeError::NotInitialized)
    }
}

/// Record `admin` as the only admin-role holder and bind `bridge`.
///
/// The caller must authorize as `admin`.
pub fn initialize(env: &Env, admin: &Address, bridge: &Address) -> Result<(), FeeError> {
    if is_initialized(env) {
        return Err(FeeError::AlreadyInitialized);
    }
    admin.require_auth();

    env.storage().instance().set(&HandlerKey::Bridge, bridge);
    access_control::grant_role(env, admin, ROLE_ADMIN);

    events::emit_initialized(env, admin, bridge);
    Ok(())
}

pub fn get_bridge(env: &Env) -> Result<Address, FeeError> {
    env.storage()
        .instance()
        .get(&HandlerKey::Bridge)
        .ok_or(FeeError::NotInitialized)
}

/// Read + require_auth on the bound orchestrator in one step.
pub fn require_bridge(env: &Env) -> Result<Address, FeeError> {
    let bridge = get_bridge(env)?;
    bridge.require_auth();
    Ok(bridge)
}
