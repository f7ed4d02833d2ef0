//! # Admin Role Gate
//!
//! Role membership is stored per address as a bitmap, mirroring the layout
//! used across the bridge contracts. Fee handlers only know one role,
//! `ROLE_ADMIN`, granted to the deployer at initialization. Membership
//! changes are owned by the bridge's role-management tooling; this module
//! only answers "does this address hold the role".
//!
//! Every mutating entry point obtains an [`AdminClaim`] through
//! [`require_admin`] and hands it to the registry or treasury. The claim has
//! no public constructor, so holding one is proof the check ran.

use soroban_sdk::{contracttype, Address, Env};

use crate::errors::FeeError;

/// Role identifiers as bit flags
pub const ROLE_ADMIN: u32 = 1 << 0;

/// Storage keys for access control
#[contracttype]
#[derive(Clone)]
pub enum AccessControlKey {
    /// Role bitmap for an address
    Roles(Address),
}

/// Proof that the wrapped address authorized the call and holds `ROLE_ADMIN`.
#[derive(Clone, Debug)]
pub struct AdminClaim {
    admin: Address,
}

impl AdminClaim {
    pub fn admin(&self) -> &Address {
        &self.admin
    }
}

/// Get the role bitmap for an address. Returns 0 if no roles assigned.
pub fn get_roles(env: &Env, account: &Address) -> u32 {
    env.storage()
        .instance()
        .get(&AccessControlKey::Roles(account.clone()))
        .unwrap_or(0)
}

pub fn has_role(env: &Env, account: &Address, role: u32) -> bool {
    (get_roles(env, account) & role) != 0
}

pub fn is_admin(env: &Env, account: &Address) -> bool {
    has_role(env, account, ROLE_ADMIN)
}

/// Grant a role to an address (additive).
pub(crate) fn grant_role(env: &Env, account: &Address, role: u32) {
    let current = get_roles(env, account);
    env.storage()
        .instance()
        .set(&AccessControlKey::Roles(account.clone()), &(current | role));
}

/// Require that `caller` authorized this invocation and holds `ROLE_ADMIN`.
pub fn require_admin(env: &Env, caller: &Address) -> Result<AdminClaim, FeeError> {
    crate::handler::require_initialized(env)?;
    caller.require_auth();
    if !is_admin(env, caller) {
        return Err(FeeError::Unauthorized);
    }
    Ok(AdminClaim {
        admin: caller.clone(),
    })
}
