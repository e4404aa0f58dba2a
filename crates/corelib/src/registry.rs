//! Checksum-type table and code/name lookup.
//!
//! The table is fixed at construction and never mutated afterwards, so a
//! `Lazy` static serves concurrent readers without locking.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;

use crate::crypto::{aes, camellia, crc32, des, dk, md4, md5, sha1};
use crate::crypto::{BlockCipherProvider, HashProvider, MacProvider};
use crate::dispatch::{self, Verified};
use crate::errors::{ChecksumError, RegistryError};

/// How a descriptor computes and verifies a checksum. The strategy set is
/// closed, and each variant carries exactly the providers it needs.
#[derive(Clone, Copy)]
pub enum Strategy {
    /// Plain hash of the message; integrity only, no authentication.
    UnkeyedHash { hash: &'static dyn HashProvider },
    /// Final block of the CBC encryption of the message.
    CbcMac {
        cipher: &'static dyn BlockCipherProvider,
    },
    /// Random confounder prepended, hashed with the message, and the pair
    /// CBC-encrypted under a variant of the key.
    ConfounderMac {
        cipher: &'static dyn BlockCipherProvider,
        hash: &'static dyn HashProvider,
    },
    /// Microsoft RC4 family: HMAC of the message digest under a signature
    /// key derived from the session key.
    HmacMd5 {
        hash: &'static dyn HashProvider,
        mac: &'static dyn MacProvider,
    },
    /// DK family: HMAC under a checksum subkey derived from the base key.
    DerivedHmac { mac: &'static dyn MacProvider },
}

impl Strategy {
    pub fn kind(&self) -> &'static str {
        match self {
            Strategy::UnkeyedHash { .. } => "unkeyed-hash",
            Strategy::CbcMac { .. } => "cbc-mac",
            Strategy::ConfounderMac { .. } => "confounder-mac",
            Strategy::HmacMd5 { .. } => "hmac-md5",
            Strategy::DerivedHmac { .. } => "derived-hmac",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChecksumFlags {
    /// No key material required; any supplied key is ignored.
    pub unkeyed: bool,
    /// Algorithm known weak against deliberate collision construction.
    pub not_collision_proof: bool,
}

const KEYED: ChecksumFlags = ChecksumFlags {
    unkeyed: false,
    not_collision_proof: false,
};

const UNKEYED: ChecksumFlags = ChecksumFlags {
    unkeyed: true,
    not_collision_proof: false,
};

/// One checksum-type descriptor. Immutable after registry construction.
pub struct ChecksumType {
    /// Wire code. The RC4 family uses negative codes.
    pub code: i32,
    pub name: &'static str,
    /// Deprecated/alternate names, each unique across the registry.
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub strategy: Strategy,
    /// Native output size of the underlying primitive, in bytes.
    pub output_len: usize,
    /// Bytes actually emitted and compared; leading bytes of the native
    /// output.
    pub trunc_len: usize,
    pub flags: ChecksumFlags,
}

impl ChecksumType {
    pub fn is_keyed(&self) -> bool {
        !self.flags.unkeyed
    }

    /// Exact key length demanded by the cipher, if the strategy uses one.
    /// `None` for unkeyed types and for the HMAC families, which accept
    /// keys of any length.
    pub fn fixed_key_len(&self) -> Option<usize> {
        match self.strategy {
            Strategy::CbcMac { cipher } | Strategy::ConfounderMac { cipher, .. } => {
                Some(cipher.key_len())
            }
            Strategy::UnkeyedHash { .. }
            | Strategy::HmacMd5 { .. }
            | Strategy::DerivedHmac { .. } => None,
        }
    }

    pub fn compute(&self, key: Option<&[u8]>, msg: &[u8]) -> Result<Vec<u8>, ChecksumError> {
        dispatch::compute(self, key, msg)
    }

    pub fn verify(
        &self,
        key: Option<&[u8]>,
        msg: &[u8],
        candidate: &[u8],
    ) -> Result<Verified, ChecksumError> {
        dispatch::verify(self, key, msg, candidate)
    }
}

/// Options selecting which descriptor groups the registry includes.
/// Mirrors the build-option gating of the original table as a runtime flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryOptions {
    /// Include the AES CBC-MAC types (off by default).
    pub with_cbc_modes: bool,
}

/// Read-only set of checksum-type descriptors.
pub struct Registry {
    types: Vec<ChecksumType>,
}

impl Registry {
    /// Build a registry from an explicit descriptor list, rejecting any
    /// violation of the uniqueness and truncation invariants. A duplicate
    /// name or alias would silently shadow one type with another, so it is
    /// an error even though lookups scan in order.
    pub fn new(types: Vec<ChecksumType>) -> Result<Self, RegistryError> {
        let mut codes = BTreeSet::new();
        let mut names = BTreeSet::new();
        for t in &types {
            if !codes.insert(t.code) {
                return Err(RegistryError::DuplicateCode(t.code));
            }
            for name in std::iter::once(&t.name).chain(t.aliases) {
                if !names.insert(*name) {
                    return Err(RegistryError::DuplicateName(name.to_string()));
                }
            }
            if t.trunc_len > t.output_len {
                return Err(RegistryError::BadTruncation {
                    name: t.name,
                    trunc: t.trunc_len,
                    output: t.output_len,
                });
            }
        }
        Ok(Self { types })
    }

    /// Build the builtin table.
    pub fn builtin(options: RegistryOptions) -> Result<Self, RegistryError> {
        let mut types = builtin_types();
        if options.with_cbc_modes {
            types.extend(cbc_mode_types());
        }
        Self::new(types)
    }

    pub fn find_by_code(&self, code: i32) -> Result<&ChecksumType, RegistryError> {
        self.types
            .iter()
            .find(|t| t.code == code)
            .ok_or(RegistryError::UnknownCode(code))
    }

    /// Exact, case-sensitive match against canonical names first, then
    /// against every alias.
    pub fn find_by_name(&self, name: &str) -> Result<&ChecksumType, RegistryError> {
        if let Some(t) = self.types.iter().find(|t| t.name == name) {
            return Ok(t);
        }
        self.types
            .iter()
            .find(|t| t.aliases.contains(&name))
            .ok_or_else(|| RegistryError::UnknownName(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChecksumType> {
        self.types.iter()
    }
}

static DEFAULT: Lazy<Registry> = Lazy::new(|| {
    Registry::builtin(RegistryOptions::default()).expect("builtin checksum table is consistent")
});

/// The process-wide registry with default options.
pub fn default_registry() -> &'static Registry {
    &DEFAULT
}

fn builtin_types() -> Vec<ChecksumType> {
    vec![
        ChecksumType {
            code: 1,
            name: "crc32",
            aliases: &[],
            description: "CRC-32",
            strategy: Strategy::UnkeyedHash {
                hash: &crc32::CRC32,
            },
            output_len: 4,
            trunc_len: 4,
            flags: ChecksumFlags {
                unkeyed: true,
                not_collision_proof: true,
            },
        },
        ChecksumType {
            code: 2,
            name: "md4",
            aliases: &[],
            description: "RSA-MD4",
            strategy: Strategy::UnkeyedHash { hash: &md4::MD4 },
            output_len: 16,
            trunc_len: 16,
            flags: UNKEYED,
        },
        ChecksumType {
            code: 3,
            name: "md4-des",
            aliases: &[],
            description: "RSA-MD4 with DES cbc mode",
            strategy: Strategy::ConfounderMac {
                cipher: &des::DES,
                hash: &md4::MD4,
            },
            output_len: 24,
            trunc_len: 24,
            flags: KEYED,
        },
        ChecksumType {
            code: 4,
            name: "des-cbc",
            aliases: &[],
            description: "DES cbc mode",
            strategy: Strategy::CbcMac { cipher: &des::DES },
            output_len: 8,
            trunc_len: 8,
            flags: KEYED,
        },
        ChecksumType {
            code: 7,
            name: "md5",
            aliases: &[],
            description: "RSA-MD5",
            strategy: Strategy::UnkeyedHash { hash: &md5::MD5 },
            output_len: 16,
            trunc_len: 16,
            flags: UNKEYED,
        },
        ChecksumType {
            code: 8,
            name: "md5-des",
            aliases: &[],
            description: "RSA-MD5 with DES cbc mode",
            strategy: Strategy::ConfounderMac {
                cipher: &des::DES,
                hash: &md5::MD5,
            },
            output_len: 24,
            trunc_len: 24,
            flags: KEYED,
        },
        ChecksumType {
            code: 9,
            name: "sha",
            aliases: &[],
            description: "NIST-SHA",
            strategy: Strategy::UnkeyedHash { hash: &sha1::SHA1 },
            output_len: 20,
            trunc_len: 20,
            flags: UNKEYED,
        },
        ChecksumType {
            code: 12,
            name: "hmac-sha1-des3",
            aliases: &["hmac-sha1-des3-kd"],
            description: "HMAC-SHA1 DES3 key",
            strategy: Strategy::DerivedHmac {
                mac: &dk::HMAC_SHA1,
            },
            output_len: 20,
            trunc_len: 20,
            flags: KEYED,
        },
        ChecksumType {
            code: -138,
            name: "hmac-md5-rc4",
            aliases: &["hmac-md5-enc", "hmac-md5-earcfour"],
            description: "Microsoft HMAC MD5 (RC4 key)",
            strategy: Strategy::HmacMd5 {
                hash: &md5::MD5,
                mac: &dk::HMAC_MD5,
            },
            output_len: 16,
            trunc_len: 16,
            flags: KEYED,
        },
        ChecksumType {
            code: 15,
            name: "hmac-sha1-96-aes128",
            aliases: &[],
            description: "HMAC-SHA1 AES128 key",
            strategy: Strategy::DerivedHmac {
                mac: &dk::HMAC_SHA1,
            },
            output_len: 20,
            trunc_len: 12,
            flags: KEYED,
        },
        ChecksumType {
            code: 16,
            name: "hmac-sha1-96-aes256",
            aliases: &[],
            description: "HMAC-SHA1 AES256 key",
            strategy: Strategy::DerivedHmac {
                mac: &dk::HMAC_SHA1,
            },
            output_len: 20,
            trunc_len: 12,
            flags: KEYED,
        },
        ChecksumType {
            code: -137,
            name: "md5-hmac-rc4",
            aliases: &[],
            description: "Microsoft MD5 HMAC (RC4 key)",
            strategy: Strategy::HmacMd5 {
                hash: &md5::MD5,
                mac: &dk::HMAC_MD5,
            },
            output_len: 16,
            trunc_len: 16,
            flags: KEYED,
        },
        ChecksumType {
            code: 17,
            name: "hmac-sha1-96-camellia128",
            aliases: &[],
            description: "HMAC-SHA1 Camellia128 key",
            strategy: Strategy::DerivedHmac {
                mac: &dk::HMAC_SHA1,
            },
            output_len: 20,
            trunc_len: 12,
            flags: KEYED,
        },
        ChecksumType {
            code: 18,
            name: "hmac-sha1-96-camellia256",
            aliases: &[],
            description: "HMAC-SHA1 Camellia256 key",
            strategy: Strategy::DerivedHmac {
                mac: &dk::HMAC_SHA1,
            },
            output_len: 20,
            trunc_len: 12,
            flags: KEYED,
        },
        ChecksumType {
            code: 21,
            name: "camellia128-cbc",
            aliases: &[],
            description: "CBC Camellia128 key",
            strategy: Strategy::CbcMac {
                cipher: &camellia::CAMELLIA128,
            },
            output_len: 16,
            trunc_len: 16,
            flags: KEYED,
        },
        ChecksumType {
            code: 22,
            name: "camellia256-cbc",
            aliases: &[],
            description: "CBC Camellia256 key",
            strategy: Strategy::CbcMac {
                cipher: &camellia::CAMELLIA256,
            },
            output_len: 16,
            trunc_len: 16,
            flags: KEYED,
        },
    ]
}

/// AES CBC-MAC types, included only on request.
fn cbc_mode_types() -> Vec<ChecksumType> {
    vec![
        ChecksumType {
            code: 19,
            name: "aes128-cbc",
            aliases: &[],
            description: "CBC AES128 key",
            strategy: Strategy::CbcMac {
                cipher: &aes::AES128,
            },
            output_len: 16,
            trunc_len: 16,
            flags: KEYED,
        },
        ChecksumType {
            code: 20,
            name: "aes256-cbc",
            aliases: &[],
            description: "CBC AES256 key",
            strategy: Strategy::CbcMac {
                cipher: &aes::AES256,
            },
            output_len: 16,
            trunc_len: 16,
            flags: KEYED,
        },
    ]
}
