//! Generic hash provider trait.

/// One-shot hash over a message with a fixed, provider-defined output size.
///
/// Providers are stateless and reentrant; a single static instance is shared
/// by every descriptor that references the algorithm.
pub trait HashProvider: Sync {
    fn name(&self) -> &'static str;
    /// Native digest size in bytes.
    fn output_len(&self) -> usize;
    /// Compute the digest of `data`. Always returns `output_len()` bytes.
    fn digest(&self, data: &[u8]) -> Vec<u8>;
}

/// Digest of `prefix || data` without the caller assembling the buffer.
pub fn digest_with_prefix(hash: &dyn HashProvider, prefix: &[u8], data: &[u8]) -> Vec<u8> {
    let mut input = Vec::with_capacity(prefix.len() + data.len());
    input.extend_from_slice(prefix);
    input.extend_from_slice(data);
    hash.digest(&input)
}
