//! Single DES as a BlockCipherProvider, for the legacy CBC and
//! confounder checksum types.

use des::Des;

use crate::crypto::cipher::{cbc_decrypt_with, cbc_encrypt_with, cbc_mac_with, BlockCipherProvider};
use crate::errors::PrimitiveError;

pub struct DesProvider;

pub static DES: DesProvider = DesProvider;

impl BlockCipherProvider for DesProvider {
    fn name(&self) -> &'static str {
        "des"
    }

    fn key_len(&self) -> usize {
        8
    }

    fn block_len(&self) -> usize {
        8
    }

    fn cbc_mac(&self, key: &[u8], msg: &[u8]) -> Result<Vec<u8>, PrimitiveError> {
        cbc_mac_with::<Des>(self.name(), key, msg)
    }

    fn cbc_encrypt(&self, key: &[u8], data: &[u8]) -> Result<Vec<u8>, PrimitiveError> {
        cbc_encrypt_with::<Des>(self.name(), key, data)
    }

    fn cbc_decrypt(&self, key: &[u8], data: &[u8]) -> Result<Vec<u8>, PrimitiveError> {
        cbc_decrypt_with::<Des>(self.name(), key, data)
    }
}
