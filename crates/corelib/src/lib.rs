//! Checksum-type registry and dispatch for the kcksum toolkit.
//!
//! The registry maps numeric checksum-type codes and names (including
//! deprecated aliases) onto descriptors; the dispatcher executes a
//! descriptor's compute/verify strategy against caller-supplied key
//! material and a message. Hash and cipher primitives live behind the
//! provider traits in [`crypto`].

use serde::Serialize;

pub mod crypto;
pub mod dispatch;
pub mod errors;
pub mod registry;

pub use dispatch::{compute, verify, Verified};
pub use errors::{ChecksumError, RegistryError};
pub use registry::{default_registry, ChecksumFlags, ChecksumType, Registry, RegistryOptions};

/// Public checksum-type info for enumeration/negotiation APIs.
#[derive(Debug, Clone, Serialize)]
pub struct ChecksumInfo {
    pub code: i32,
    pub name: &'static str,
    pub unkeyed: bool,
    pub not_collision_proof: bool,
    pub length: usize,
}

/// API: list the checksum types in the default registry.
pub fn list_checksum_types() -> Vec<ChecksumInfo> {
    default_registry().iter().map(ChecksumInfo::from).collect()
}

impl From<&ChecksumType> for ChecksumInfo {
    fn from(t: &ChecksumType) -> Self {
        Self {
            code: t.code,
            name: t.name,
            unkeyed: t.flags.unkeyed,
            not_collision_proof: t.flags.not_collision_proof,
            length: t.trunc_len,
        }
    }
}

/// Version helper for CLI
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
