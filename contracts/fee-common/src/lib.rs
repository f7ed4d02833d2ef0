//! Shared fee-policy machinery for the bridge fee handlers.
//!
//! Both handler contracts (flat percentage and percentage-with-bounds) are
//! thin entry points over the modules here: a configuration registry, the
//! fee arithmetic, the collection hook the transfer orchestrator calls, and
//! the admin treasury.

#![cfg_attr(not(test), no_std)]

pub mod access_control;
pub mod collector;
pub mod errors;
pub mod events;
pub mod fee_math;
pub mod handler;
pub mod payload;
pub mod registry;
pub mod resources;
pub mod treasury;


pub use access_control::{AdminClaim, ROLE_ADMIN};
pub use collector::TransferRequest;
pub use errors::FeeError;
pub use fee_math::{Principal, BASIS_POINTS};
pub use registry::{FeeConfig, RegistryKey};
pub use resources::{FeeAsset, FeeAssetKind};
