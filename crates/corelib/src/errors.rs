use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("checksum type with code {0} not found")]
    UnknownCode(i32),
    #[error("checksum type '{0}' not found")]
    UnknownName(String),
    #[error("duplicate checksum type code {0}")]
    DuplicateCode(i32),
    #[error("duplicate checksum type name '{0}'")]
    DuplicateName(String),
    #[error("checksum type '{name}': truncated length {trunc} exceeds output length {output}")]
    BadTruncation {
        name: &'static str,
        trunc: usize,
        output: usize,
    },
}

/// Error reported by an underlying hash/cipher provider.
#[derive(Debug, Error)]
pub enum PrimitiveError {
    #[error("{cipher}: invalid key length {got}, expected {expected}")]
    InvalidKeyLength {
        cipher: &'static str,
        got: usize,
        expected: usize,
    },
}

#[derive(Debug, Error)]
pub enum ChecksumError {
    #[error("checksum type '{0}' requires key material")]
    MissingKey(&'static str),
    #[error("candidate checksum is {got} bytes, expected {expected}")]
    LengthMismatch { expected: usize, got: usize },
    #[error("primitive failure: {0}")]
    Primitive(#[from] PrimitiveError),
}
