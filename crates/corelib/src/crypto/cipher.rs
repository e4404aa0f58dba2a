//! Block-cipher provider trait and shared CBC plumbing.

use cipher::{Block, BlockDecrypt, BlockEncrypt, KeyInit};

use crate::errors::PrimitiveError;

/// CBC-mode operations over a block cipher, always with a zero IV.
///
/// `cbc_encrypt`/`cbc_decrypt` zero-pad to a whole number of blocks;
/// `cbc_mac` emits only the final chaining block. Key length violations
/// surface as [`PrimitiveError::InvalidKeyLength`].
pub trait BlockCipherProvider: Sync {
    fn name(&self) -> &'static str;
    fn key_len(&self) -> usize;
    fn block_len(&self) -> usize;
    fn cbc_mac(&self, key: &[u8], msg: &[u8]) -> Result<Vec<u8>, PrimitiveError>;
    fn cbc_encrypt(&self, key: &[u8], data: &[u8]) -> Result<Vec<u8>, PrimitiveError>;
    fn cbc_decrypt(&self, key: &[u8], data: &[u8]) -> Result<Vec<u8>, PrimitiveError>;
}

fn new_cipher<C: KeyInit>(name: &'static str, key: &[u8]) -> Result<C, PrimitiveError> {
    C::new_from_slice(key).map_err(|_| PrimitiveError::InvalidKeyLength {
        cipher: name,
        got: key.len(),
        expected: C::key_size(),
    })
}

/// CBC-MAC: chain the zero-padded message through the cipher, keep the last
/// block. The empty message MACs as a single all-zero block.
pub(crate) fn cbc_mac_with<C>(
    name: &'static str,
    key: &[u8],
    msg: &[u8],
) -> Result<Vec<u8>, PrimitiveError>
where
    C: BlockEncrypt + KeyInit,
{
    let cipher = new_cipher::<C>(name, key)?;
    let mut state = Block::<C>::default();
    if msg.is_empty() {
        cipher.encrypt_block(&mut state);
        return Ok(state.to_vec());
    }
    for chunk in msg.chunks(C::block_size()) {
        for (s, b) in state.iter_mut().zip(chunk) {
            *s ^= *b;
        }
        cipher.encrypt_block(&mut state);
    }
    Ok(state.to_vec())
}

pub(crate) fn cbc_encrypt_with<C>(
    name: &'static str,
    key: &[u8],
    data: &[u8],
) -> Result<Vec<u8>, PrimitiveError>
where
    C: BlockEncrypt + KeyInit,
{
    let cipher = new_cipher::<C>(name, key)?;
    let bs = C::block_size();
    let mut out = data.to_vec();
    let rem = out.len() % bs;
    if rem != 0 {
        out.resize(out.len() + bs - rem, 0);
    }
    let mut prev = Block::<C>::default();
    for chunk in out.chunks_exact_mut(bs) {
        for (b, p) in chunk.iter_mut().zip(prev.iter()) {
            *b ^= *p;
        }
        let block = Block::<C>::from_mut_slice(chunk);
        cipher.encrypt_block(block);
        prev.copy_from_slice(block);
    }
    Ok(out)
}

/// Inverse of [`cbc_encrypt_with`]; `data` must be a whole number of blocks.
pub(crate) fn cbc_decrypt_with<C>(
    name: &'static str,
    key: &[u8],
    data: &[u8],
) -> Result<Vec<u8>, PrimitiveError>
where
    C: BlockDecrypt + KeyInit,
{
    let cipher = new_cipher::<C>(name, key)?;
    let bs = C::block_size();
    debug_assert_eq!(data.len() % bs, 0, "ciphertext must be block-aligned");
    let mut out = data.to_vec();
    let mut prev = Block::<C>::default();
    for chunk in out.chunks_exact_mut(bs) {
        let saved = Block::<C>::clone_from_slice(chunk);
        let block = Block::<C>::from_mut_slice(chunk);
        cipher.decrypt_block(block);
        for (b, p) in block.iter_mut().zip(prev.iter()) {
            *b ^= *p;
        }
        prev = saved;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cbc_round_trips_under_des() {
        let key = [0x13u8; 8];
        let data = [0xa5u8; 24];
        let ct = cbc_encrypt_with::<des::Des>("des", &key, &data).unwrap();
        assert_eq!(ct.len(), 24);
        assert_ne!(ct.as_slice(), &data[..]);
        let pt = cbc_decrypt_with::<des::Des>("des", &key, &ct).unwrap();
        assert_eq!(pt.as_slice(), &data[..]);
    }

    #[test]
    fn cbc_mac_matches_last_ciphertext_block() {
        let key = [0x13u8; 8];
        let data = [0xa5u8; 24];
        let ct = cbc_encrypt_with::<des::Des>("des", &key, &data).unwrap();
        let mac = cbc_mac_with::<des::Des>("des", &key, &data).unwrap();
        assert_eq!(mac.as_slice(), &ct[16..24]);
    }

    #[test]
    fn cbc_mac_handles_partial_and_empty_input() {
        let key = [0x13u8; 8];
        let partial = cbc_mac_with::<des::Des>("des", &key, b"abc").unwrap();
        let padded = cbc_mac_with::<des::Des>("des", &key, b"abc\0\0\0\0\0").unwrap();
        assert_eq!(partial, padded);
        let empty = cbc_mac_with::<des::Des>("des", &key, b"").unwrap();
        assert_eq!(empty.len(), 8);
    }

    #[test]
    fn wrong_key_length_is_a_primitive_error() {
        let err = cbc_mac_with::<des::Des>("des", &[0u8; 5], b"msg").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("invalid key length 5"), "{msg}");
    }
}
