//! Primitive providers consumed by the checksum dispatcher.
//! Each provider is a stateless static; descriptors hold `&'static dyn`
//! references so the registry table stays a plain immutable value.

pub mod aes;
pub mod camellia;
pub mod cipher;
pub mod crc32;
pub mod des;
pub mod dk;
pub mod hash;
pub mod md4;
pub mod md5;
pub mod sha1;

pub use self::cipher::BlockCipherProvider;
pub use self::dk::MacProvider;
pub use self::hash::HashProvider;
