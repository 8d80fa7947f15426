//!
//! ubridge-crypto - Repeating-Key XOR Codec
//!
//! Host-facing codec operations over `UbBytes` buffers:
//!
//! - `ubridge_crypto_encrypt(data, key) -> bytes` - XOR data with the key
//!   repeated cyclically
//! - `ubridge_crypto_decrypt(data, key) -> bytes` - identical operation
//!   (XOR is self-inverse)
//! - `ubridge_crypto_generate_key(length) -> bytes` - random key material
//!
//! A null or empty key yields a null result rather than faulting; the
//! boundary never raises.
//!

pub mod xor;
pub mod key;

pub use xor::*;
pub use key::*;
