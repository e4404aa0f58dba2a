//! CRC-32 (IEEE) as an unkeyed HashProvider; value emitted little-endian.

use crate::crypto::hash::HashProvider;

pub struct Crc32Provider;

pub static CRC32: Crc32Provider = Crc32Provider;

impl HashProvider for Crc32Provider {
    fn name(&self) -> &'static str {
        "crc32"
    }

    fn output_len(&self) -> usize {
        4
    }

    fn digest(&self, data: &[u8]) -> Vec<u8> {
        crc32fast::hash(data).to_le_bytes().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // CRC-32("abc") = 0x352441c2
    #[test]
    fn crc32_abc_vector() {
        let got = CRC32.digest(b"abc");
        assert_eq!(got, vec![0xc2, 0x41, 0x24, 0x35]);
    }

    #[test]
    fn crc32_is_deterministic() {
        assert_eq!(CRC32.digest(b"abc"), CRC32.digest(b"abc"));
        assert_ne!(CRC32.digest(b"abc"), CRC32.digest(b"abd"));
    }
}
