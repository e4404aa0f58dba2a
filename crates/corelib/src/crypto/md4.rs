//! MD4 as a HashProvider. Kept only for the legacy md4/md4-des types.

use md4::{Digest, Md4};

use crate::crypto::hash::HashProvider;

pub struct Md4Provider;

pub static MD4: Md4Provider = Md4Provider;

impl HashProvider for Md4Provider {
    fn name(&self) -> &'static str {
        "md4"
    }

    fn output_len(&self) -> usize {
        16
    }

    fn digest(&self, data: &[u8]) -> Vec<u8> {
        Md4::digest(data).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // MD4("abc") = a448017aaf21d8525fc10ae87aa6729d
    #[test]
    fn md4_abc_vector() {
        let got = MD4.digest(b"abc");
        let exp = [
            0xa4, 0x48, 0x01, 0x7a, 0xaf, 0x21, 0xd8, 0x52, 0x5f, 0xc1, 0x0a, 0xe8, 0x7a, 0xa6,
            0x72, 0x9d,
        ];
        assert_eq!(got, exp);
    }
}
