///
/// XOR Codec
///
/// Position-wise exclusive-or of a buffer with a key repeated cyclically.
/// The output length always equals the input length, and applying the same
/// key twice restores the original buffer.
///

use ubridge_core::{UbBytes, bytes_from_ub, bytes_to_ub};

/// Apply the repeating key to the data. Returns None for an empty key;
/// callers decide how to surface that at the boundary.
pub fn xor_with_key(data: &[u8], key: &[u8]) -> Option<Vec<u8>> {
    if key.is_empty() {
        return None;
    }
    Some(
        data.iter()
            .enumerate()
            .map(|(i, b)| b ^ key[i % key.len()])
            .collect(),
    )
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn ubridge_crypto_encrypt(
    data: *const UbBytes,
    key: *const UbBytes,
) -> *mut UbBytes {
    if data.is_null() {
        return std::ptr::null_mut();
    }
    let data_vec = unsafe { bytes_from_ub(data) };
    let key_vec = unsafe { bytes_from_ub(key) };
    match xor_with_key(&data_vec, &key_vec) {
        Some(out) => unsafe { bytes_to_ub(&out) },
        None => {
            log::debug!("encrypt called with empty key");
            std::ptr::null_mut()
        }
    }
}

/// Decryption is the same operation as encryption for XOR
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ubridge_crypto_decrypt(
    data: *const UbBytes,
    key: *const UbBytes,
) -> *mut UbBytes {
    unsafe { ubridge_crypto_encrypt(data, key) }
}
