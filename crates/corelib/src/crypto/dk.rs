//! Keyed-MAC providers and key derivation for the HMAC checksum families.
//!
//! Two derivations feed the dispatcher: the DK family derives a
//! per-purpose checksum subkey from the base key before HMACing the
//! message, and the RC4 family hashes through a fixed signature key.
//! Both stay opaque to the registry; descriptors only pick the MAC.

use hmac::{Hmac, Mac};
use md5::Md5;
use sha1::Sha1;

/// Keyed MAC with a fixed, provider-defined output size. HMAC accepts keys
/// of any length, so there is no key-length contract to violate here.
pub trait MacProvider: Sync {
    fn name(&self) -> &'static str;
    fn output_len(&self) -> usize;
    fn mac(&self, key: &[u8], msg: &[u8]) -> Vec<u8>;
}

pub struct HmacMd5Provider;
pub struct HmacSha1Provider;

pub static HMAC_MD5: HmacMd5Provider = HmacMd5Provider;
pub static HMAC_SHA1: HmacSha1Provider = HmacSha1Provider;

impl MacProvider for HmacMd5Provider {
    fn name(&self) -> &'static str {
        "hmac-md5"
    }

    fn output_len(&self) -> usize {
        16
    }

    fn mac(&self, key: &[u8], msg: &[u8]) -> Vec<u8> {
        let mut m = Hmac::<Md5>::new_from_slice(key).expect("hmac accepts any key length");
        m.update(msg);
        m.finalize().into_bytes().to_vec()
    }
}

impl MacProvider for HmacSha1Provider {
    fn name(&self) -> &'static str {
        "hmac-sha1"
    }

    fn output_len(&self) -> usize {
        20
    }

    fn mac(&self, key: &[u8], msg: &[u8]) -> Vec<u8> {
        let mut m = Hmac::<Sha1>::new_from_slice(key).expect("hmac accepts any key length");
        m.update(msg);
        m.finalize().into_bytes().to_vec()
    }
}

/// Label under which the DK family derives its checksum subkey.
const CHECKSUM_KEY_LABEL: &[u8] = b"checksumkey";

/// Label salting the RC4-family signature key.
const SIGNATURE_KEY_LABEL: &[u8] = b"signaturekey\0";

/// DK-family checksum: derive a checksum subkey from `base_key`, then MAC
/// the message under it.
pub fn derive_and_mac(mac: &dyn MacProvider, base_key: &[u8], msg: &[u8]) -> Vec<u8> {
    let subkey = mac.mac(base_key, CHECKSUM_KEY_LABEL);
    mac.mac(&subkey, msg)
}

/// RC4-family signature key derived from the session key.
pub fn signing_key(mac: &dyn MacProvider, base_key: &[u8]) -> Vec<u8> {
    mac.mac(base_key, SIGNATURE_KEY_LABEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 2202 test case 1 for both HMACs.
    #[test]
    fn hmac_md5_rfc2202_vector() {
        let key = [0x0bu8; 16];
        let got = HMAC_MD5.mac(&key, b"Hi There");
        let exp = [
            0x92, 0x94, 0x72, 0x7a, 0x36, 0x38, 0xbb, 0x1c, 0x13, 0xf4, 0x8e, 0xf8, 0x15, 0x8b,
            0xfc, 0x9d,
        ];
        assert_eq!(got, exp);
    }

    #[test]
    fn hmac_sha1_rfc2202_vector() {
        let key = [0x0bu8; 20];
        let got = HMAC_SHA1.mac(&key, b"Hi There");
        let exp = [
            0xb6, 0x17, 0x31, 0x86, 0x55, 0x05, 0x72, 0x64, 0xe2, 0x8b, 0xc0, 0xb6, 0xfb, 0x37,
            0x8c, 0x8e, 0xf1, 0x46, 0xbe, 0x00,
        ];
        assert_eq!(got, exp);
    }

    #[test]
    fn derived_mac_differs_from_plain_mac() {
        let key = [0x42u8; 16];
        let plain = HMAC_SHA1.mac(&key, b"message");
        let derived = derive_and_mac(&HMAC_SHA1, &key, b"message");
        assert_ne!(plain, derived);
        assert_eq!(derived.len(), HMAC_SHA1.output_len());
    }

    #[test]
    fn signing_key_depends_on_base_key() {
        let a = signing_key(&HMAC_MD5, &[1u8; 16]);
        let b = signing_key(&HMAC_MD5, &[2u8; 16]);
        assert_ne!(a, b);
    }
}
