//! SHA-1 as a HashProvider.

use sha1::{Digest, Sha1};

use crate::crypto::hash::HashProvider;

pub struct Sha1Provider;

pub static SHA1: Sha1Provider = Sha1Provider;

impl HashProvider for Sha1Provider {
    fn name(&self) -> &'static str {
        "sha1"
    }

    fn output_len(&self) -> usize {
        20
    }

    fn digest(&self, data: &[u8]) -> Vec<u8> {
        Sha1::digest(data).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // SHA-1("abc") = a9993e364706816aba3e25717850c26c9cd0d89d
    #[test]
    fn sha1_abc_vector() {
        let got = SHA1.digest(b"abc");
        let exp = [
            0xa9, 0x99, 0x3e, 0x36, 0x47, 0x06, 0x81, 0x6a, 0xba, 0x3e, 0x25, 0x71, 0x78, 0x50,
            0xc2, 0x6c, 0x9c, 0xd0, 0xd8, 0x9d,
        ];
        assert_eq!(got, exp);
    }
}
