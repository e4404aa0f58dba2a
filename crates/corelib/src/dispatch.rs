//! Checksum compute/verify against a resolved descriptor.
//!
//! Keying and length preconditions are enforced here so the primitive
//! providers never have to re-check them. Both entry points are
//! stateless; scratch buffers live and die inside a single call.

use rand::rngs::OsRng;
use rand::RngCore;
use subtle::ConstantTimeEq;

use crate::crypto::hash::digest_with_prefix;
use crate::crypto::{dk, BlockCipherProvider, HashProvider};
use crate::errors::ChecksumError;
use crate::registry::{ChecksumType, Strategy};

/// Outcome of a verification. A mismatch is an expected result, not an
/// error; protocol validators reject the message and keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verified {
    Valid,
    Invalid,
}

impl Verified {
    pub fn is_valid(self) -> bool {
        self == Verified::Valid
    }
}

/// Compute the checksum of `msg`, truncated to the descriptor's emitted
/// length. Keyed types fail with `MissingKey` when no key material is
/// supplied; unkeyed types ignore any key they are given.
pub fn compute(
    t: &ChecksumType,
    key: Option<&[u8]>,
    msg: &[u8],
) -> Result<Vec<u8>, ChecksumError> {
    let mut native = match t.strategy {
        Strategy::UnkeyedHash { hash } => hash.digest(msg),
        Strategy::CbcMac { cipher } => cipher.cbc_mac(keyed(t, key)?, msg)?,
        Strategy::ConfounderMac { cipher, hash } => {
            let mut confounder = vec![0u8; cipher.block_len()];
            OsRng.fill_bytes(&mut confounder);
            confounder_seal(cipher, hash, keyed(t, key)?, &confounder, msg)?
        }
        Strategy::HmacMd5 { hash, mac } => {
            let signing = dk::signing_key(mac, keyed(t, key)?);
            mac.mac(&signing, &hash.digest(msg))
        }
        Strategy::DerivedHmac { mac } => dk::derive_and_mac(mac, keyed(t, key)?, msg),
    };
    debug_assert_eq!(native.len(), t.output_len, "{}", t.name);
    native.truncate(t.trunc_len);
    Ok(native)
}

/// Verify `candidate` against `msg`. Wrong-length candidates are rejected
/// before any primitive runs; matching is constant-time.
pub fn verify(
    t: &ChecksumType,
    key: Option<&[u8]>,
    msg: &[u8],
    candidate: &[u8],
) -> Result<Verified, ChecksumError> {
    if candidate.len() != t.trunc_len {
        return Err(ChecksumError::LengthMismatch {
            expected: t.trunc_len,
            got: candidate.len(),
        });
    }
    // Recompute-and-compare cannot check a confounder checksum: the
    // confounder is random per call and only recoverable by decrypting
    // the candidate itself.
    if let Strategy::ConfounderMac { cipher, hash } = t.strategy {
        return confounder_verify(cipher, hash, keyed(t, key)?, msg, candidate);
    }
    let expected = compute(t, key, msg)?;
    Ok(ct_eq(&expected, candidate))
}

// Unkeyed strategies never reach this; surplus key material passed for
// them is simply never read.
fn keyed<'a>(t: &ChecksumType, key: Option<&'a [u8]>) -> Result<&'a [u8], ChecksumError> {
    key.ok_or(ChecksumError::MissingKey(t.name))
}

fn ct_eq(expected: &[u8], candidate: &[u8]) -> Verified {
    if bool::from(expected.ct_eq(candidate)) {
        Verified::Valid
    } else {
        Verified::Invalid
    }
}

/// The confounder construction encrypts under a variant of the key, not
/// the key itself.
fn variant_key(key: &[u8]) -> Vec<u8> {
    key.iter().map(|b| b ^ 0xf0).collect()
}

/// hash(confounder || msg), then CBC-encrypt (confounder || digest) under
/// the variant key.
fn confounder_seal(
    cipher: &dyn BlockCipherProvider,
    hash: &dyn HashProvider,
    key: &[u8],
    confounder: &[u8],
    msg: &[u8],
) -> Result<Vec<u8>, ChecksumError> {
    let digest = digest_with_prefix(hash, confounder, msg);
    let mut plain = Vec::with_capacity(confounder.len() + digest.len());
    plain.extend_from_slice(confounder);
    plain.extend_from_slice(&digest);
    Ok(cipher.cbc_encrypt(&variant_key(key), &plain)?)
}

/// Decrypt the candidate, recover the confounder, and recompute the digest
/// over it. This checks integrity of the confounder itself, which a naive
/// recompute-and-compare cannot.
fn confounder_verify(
    cipher: &dyn BlockCipherProvider,
    hash: &dyn HashProvider,
    key: &[u8],
    msg: &[u8],
    candidate: &[u8],
) -> Result<Verified, ChecksumError> {
    let plain = cipher.cbc_decrypt(&variant_key(key), candidate)?;
    let (confounder, digest) = plain.split_at(cipher.block_len());
    let expected = digest_with_prefix(hash, confounder, msg);
    Ok(ct_eq(&expected, digest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::default_registry;

    fn find(name: &str) -> &'static ChecksumType {
        default_registry().find_by_name(name).unwrap()
    }

    fn test_key(t: &ChecksumType) -> Vec<u8> {
        vec![0x42; t.fixed_key_len().unwrap_or(16)]
    }

    #[test]
    fn keyed_type_without_key_is_rejected() {
        let t = find("des-cbc");
        assert!(matches!(
            compute(t, None, b"msg"),
            Err(ChecksumError::MissingKey("des-cbc"))
        ));
        assert!(matches!(
            verify(t, None, b"msg", &[0u8; 8]),
            Err(ChecksumError::MissingKey("des-cbc"))
        ));
    }

    #[test]
    fn unkeyed_type_ignores_surplus_key() {
        let t = find("md5");
        let bare = compute(t, None, b"msg").unwrap();
        let with_key = compute(t, Some(&[1, 2, 3]), b"msg").unwrap();
        assert_eq!(bare, with_key);
    }

    #[test]
    fn wrong_length_candidate_is_a_length_mismatch() {
        let t = find("crc32");
        let err = verify(t, None, b"msg", &[0u8; 5]).unwrap_err();
        assert!(matches!(
            err,
            ChecksumError::LengthMismatch {
                expected: 4,
                got: 5
            }
        ));
    }

    #[test]
    fn crc32_over_abc_is_reproducible() {
        let t = find("crc32");
        let first = compute(t, None, b"abc").unwrap();
        assert_eq!(first, vec![0xc2, 0x41, 0x24, 0x35]);
        assert_eq!(first, compute(t, None, b"abc").unwrap());
    }

    #[test]
    fn hmac_types_truncate_to_96_bits() {
        let t = find("hmac-sha1-96-aes128");
        let sum = compute(t, Some(&[7u8; 16]), b"msg").unwrap();
        assert_eq!(sum.len(), 12);
        // Truncation keeps the leading bytes of the native output.
        let full = dk::derive_and_mac(&dk::HMAC_SHA1, &[7u8; 16], b"msg");
        assert_eq!(sum.as_slice(), &full[..12]);
    }

    #[test]
    fn confounder_checksum_is_randomized_but_verifiable() {
        let t = find("md5-des");
        let key = test_key(t);
        let a = compute(t, Some(&key), b"msg").unwrap();
        let b = compute(t, Some(&key), b"msg").unwrap();
        assert_ne!(a, b, "confounder must randomize the checksum");
        assert!(verify(t, Some(&key), b"msg", &a).unwrap().is_valid());
        assert!(verify(t, Some(&key), b"msg", &b).unwrap().is_valid());
    }

    #[test]
    fn confounder_checksum_rejects_wrong_key() {
        let t = find("md5-des");
        let sum = compute(t, Some(&[0x42; 8]), b"msg").unwrap();
        let got = verify(t, Some(&[0x43; 8]), b"msg", &sum).unwrap();
        assert_eq!(got, Verified::Invalid);
    }

    #[test]
    fn cipher_key_length_violation_is_a_primitive_failure() {
        let t = find("des-cbc");
        assert!(matches!(
            compute(t, Some(&[0u8; 3]), b"msg"),
            Err(ChecksumError::Primitive(_))
        ));
    }

    #[test]
    fn mismatch_is_invalid_not_an_error() {
        let t = find("hmac-sha1-des3");
        let key = test_key(t);
        let mut sum = compute(t, Some(&key), b"msg").unwrap();
        sum[0] ^= 0x01;
        assert_eq!(verify(t, Some(&key), b"msg", &sum).unwrap(), Verified::Invalid);
    }
}
