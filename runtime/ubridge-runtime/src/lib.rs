///
/// ubridge Runtime Library
///
/// Provides the complete boundary surface a managed-runtime host loads.
/// This crate produces a static/dynamic library that re-exports every
/// bridge crate and owns the library lifecycle:
///
/// - `ubridge_version() -> string` - fixed library version
/// - `ubridge_initialize() -> int` - always returns success
/// - `ubridge_on_load() -> int` - one-time load hook; initializes logging,
///   emits a load diagnostic, returns the ABI version constant
///

pub use ubridge_core::*;
pub use ubridge_cpu::*;
pub use ubridge_crypto::*;
pub use ubridge_sysinfo::*;
pub use ubridge_sqlite3::*;

/// Library version reported to the host
pub const LIBRARY_VERSION: &str = "1.0.0";

/// ABI version returned by the on-load hook
pub const ABI_VERSION: i64 = 0x0001_0008;

#[unsafe(no_mangle)]
pub extern "C" fn ubridge_version() -> *mut UbString {
    unsafe { string_to_ub(LIBRARY_VERSION) }
}

#[unsafe(no_mangle)]
pub extern "C" fn ubridge_initialize() -> i64 {
    0
}

/// Invoked once when the host loads the bridge library. Safe to call more
/// than once; logger initialization is idempotent.
#[unsafe(no_mangle)]
pub extern "C" fn ubridge_on_load() -> i64 {
    let _ = env_logger::try_init();
    log::info!("native bridge loaded");
    ABI_VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        unsafe {
            for _ in 0..3 {
                let v = ubridge_version();
                assert_eq!(string_from_ub(v), "1.0.0");
                ubridge_string_decref(v);
            }
        }
    }

    #[test]
    fn test_initialize_succeeds() {
        assert_eq!(ubridge_initialize(), 0);
    }

    #[test]
    fn test_on_load_returns_abi_version() {
        assert_eq!(ubridge_on_load(), 0x0001_0008);
        // Repeated loads must not panic on the already-set logger.
        assert_eq!(ubridge_on_load(), 0x0001_0008);
    }
}
