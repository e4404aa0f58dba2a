//! MD5 as a HashProvider.

use md5::{Digest, Md5};

use crate::crypto::hash::HashProvider;

pub struct Md5Provider;

pub static MD5: Md5Provider = Md5Provider;

impl HashProvider for Md5Provider {
    fn name(&self) -> &'static str {
        "md5"
    }

    fn output_len(&self) -> usize {
        16
    }

    fn digest(&self, data: &[u8]) -> Vec<u8> {
        Md5::digest(data).to_vec()
    }
}
