//! Camellia-128/Camellia-256 BlockCipherProviders.

use camellia::{Camellia128, Camellia256};

use crate::crypto::cipher::{cbc_decrypt_with, cbc_encrypt_with, cbc_mac_with, BlockCipherProvider};
use crate::errors::PrimitiveError;

pub struct Camellia128Provider;
pub struct Camellia256Provider;

pub static CAMELLIA128: Camellia128Provider = Camellia128Provider;
pub static CAMELLIA256: Camellia256Provider = Camellia256Provider;

impl BlockCipherProvider for Camellia128Provider {
    fn name(&self) -> &'static str {
        "camellia128"
    }

    fn key_len(&self) -> usize {
        16
    }

    fn block_len(&self) -> usize {
        16
    }

    fn cbc_mac(&self, key: &[u8], msg: &[u8]) -> Result<Vec<u8>, PrimitiveError> {
        cbc_mac_with::<Camellia128>(self.name(), key, msg)
    }

    fn cbc_encrypt(&self, key: &[u8], data: &[u8]) -> Result<Vec<u8>, PrimitiveError> {
        cbc_encrypt_with::<Camellia128>(self.name(), key, data)
    }

    fn cbc_decrypt(&self, key: &[u8], data: &[u8]) -> Result<Vec<u8>, PrimitiveError> {
        cbc_decrypt_with::<Camellia128>(self.name(), key, data)
    }
}

impl BlockCipherProvider for Camellia256Provider {
    fn name(&self) -> &'static str {
        "camellia256"
    }

    fn key_len(&self) -> usize {
        32
    }

    fn block_len(&self) -> usize {
        16
    }

    fn cbc_mac(&self, key: &[u8], msg: &[u8]) -> Result<Vec<u8>, PrimitiveError> {
        cbc_mac_with::<Camellia256>(self.name(), key, msg)
    }

    fn cbc_encrypt(&self, key: &[u8], data: &[u8]) -> Result<Vec<u8>, PrimitiveError> {
        cbc_encrypt_with::<Camellia256>(self.name(), key, data)
    }

    fn cbc_decrypt(&self, key: &[u8], data: &[u8]) -> Result<Vec<u8>, PrimitiveError> {
        cbc_decrypt_with::<Camellia256>(self.name(), key, data)
    }
}
