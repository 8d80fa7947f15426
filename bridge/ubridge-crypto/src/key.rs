///
/// Key Generation
///
/// Random key material from an explicit source object. The source is
/// seeded from OS entropy when constructed; the boundary holds one
/// process-wide instance behind a mutex, created on first use.
///

use std::sync::{LazyLock, Mutex};

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use ubridge_core::UbBytes;

/// An explicit random source for key material
pub struct KeySource {
    rng: StdRng,
}

impl KeySource {
    /// Construct a source seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Construct a deterministic source from a fixed seed
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Fill the buffer with random bytes
    pub fn fill(&mut self, buf: &mut [u8]) {
        self.rng.fill_bytes(buf);
    }
}

impl Default for KeySource {
    fn default() -> Self {
        Self::new()
    }
}

static KEY_SOURCE: LazyLock<Mutex<KeySource>> = LazyLock::new(|| Mutex::new(KeySource::new()));

#[unsafe(no_mangle)]
pub unsafe extern "C" fn ubridge_crypto_generate_key(length: i64) -> *mut UbBytes {
    let len = if length <= 0 { 0usize } else { length as usize };
    let ptr = unsafe { ubridge_core::ubridge_bytes_new(len) };
    if len > 0 {
        let buf = unsafe { std::slice::from_raw_parts_mut((*ptr).data.as_mut_ptr(), len) };
        KEY_SOURCE.lock().unwrap().fill(buf);
    }
    ptr
}
