//! AES-128/AES-256 BlockCipherProviders for the flag-gated CBC types.

use aes::{Aes128, Aes256};

use crate::crypto::cipher::{cbc_decrypt_with, cbc_encrypt_with, cbc_mac_with, BlockCipherProvider};
use crate::errors::PrimitiveError;

pub struct Aes128Provider;
pub struct Aes256Provider;

pub static AES128: Aes128Provider = Aes128Provider;
pub static AES256: Aes256Provider = Aes256Provider;

impl BlockCipherProvider for Aes128Provider {
    fn name(&self) -> &'static str {
        "aes128"
    }

    fn key_len(&self) -> usize {
        16
    }

    fn block_len(&self) -> usize {
        16
    }

    fn cbc_mac(&self, key: &[u8], msg: &[u8]) -> Result<Vec<u8>, PrimitiveError> {
        cbc_mac_with::<Aes128>(self.name(), key, msg)
    }

    fn cbc_encrypt(&self, key: &[u8], data: &[u8]) -> Result<Vec<u8>, PrimitiveError> {
        cbc_encrypt_with::<Aes128>(self.name(), key, data)
    }

    fn cbc_decrypt(&self, key: &[u8], data: &[u8]) -> Result<Vec<u8>, PrimitiveError> {
        cbc_decrypt_with::<Aes128>(self.name(), key, data)
    }
}

impl BlockCipherProvider for Aes256Provider {
    fn name(&self) -> &'static str {
        "aes256"
    }

    fn key_len(&self) -> usize {
        32
    }

    fn block_len(&self) -> usize {
        16
    }

    fn cbc_mac(&self, key: &[u8], msg: &[u8]) -> Result<Vec<u8>, PrimitiveError> {
        cbc_mac_with::<Aes256>(self.name(), key, msg)
    }

    fn cbc_encrypt(&self, key: &[u8], data: &[u8]) -> Result<Vec<u8>, PrimitiveError> {
        cbc_encrypt_with::<Aes256>(self.name(), key, data)
    }

    fn cbc_decrypt(&self, key: &[u8], data: &[u8]) -> Result<Vec<u8>, PrimitiveError> {
        cbc_decrypt_with::<Aes256>(self.name(), key, data)
    }
}
