///
/// ubridge-cpu - CPU and Page Introspection
///
/// Provides processor information through sysconf and the cpuinfo
/// pseudo-file.
///
/// ## Boundary Operations
///
/// - `ubridge_cpu_page_size() -> int` - OS page size
/// - `ubridge_cpu_cores() -> int` - Online processor count
/// - `ubridge_cpu_model() -> string` - CPU model name
///
/// ## Fallback Behavior
///
/// The model lookup is best-effort: an unreadable pseudo-file yields
/// "Could not read CPU info", a readable file with no model line yields
/// "Unknown". Neither case is reported as a hard failure across the
/// boundary; the internal lookup keeps the distinction as
/// `Result<Option<String>, io::Error>`.
///

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use ubridge_core::{UbString, string_to_ub};

const CPUINFO_PATH: &str = "/proc/cpuinfo";

/// Fallback text when the pseudo-file cannot be read
const MODEL_UNREADABLE: &str = "Could not read CPU info";

/// Fallback text when no model line is present
const MODEL_UNKNOWN: &str = "Unknown";

#[unsafe(no_mangle)]
pub extern "C" fn ubridge_cpu_page_size() -> i64 {
    unsafe { libc::sysconf(libc::_SC_PAGESIZE) as i64 }
}

#[unsafe(no_mangle)]
pub extern "C" fn ubridge_cpu_cores() -> i64 {
    unsafe { libc::sysconf(libc::_SC_NPROCESSORS_ONLN) as i64 }
}

/// Extract the model name from cpuinfo-formatted text.
///
/// Scans for the first line containing "model name" (x86) or "Processor"
/// (ARM) and returns the text after the colon separator. Returns Ok(None)
/// when no line matches.
fn model_from_reader<R: BufRead>(reader: R) -> io::Result<Option<String>> {
    for line in reader.lines() {
        let line = line?;
        if line.contains("model name") || line.contains("Processor") {
            if let Some((_, rest)) = line.split_once(':') {
                let value = rest.strip_prefix(' ').unwrap_or(rest);
                return Ok(Some(value.trim_end().to_string()));
            }
        }
    }
    Ok(None)
}

/// Look up the CPU model from the system pseudo-file
pub fn model_lookup() -> io::Result<Option<String>> {
    let file = File::open(CPUINFO_PATH)?;
    model_from_reader(BufReader::new(file))
}

#[unsafe(no_mangle)]
pub extern "C" fn ubridge_cpu_model() -> *mut UbString {
    match model_lookup() {
        Ok(Some(model)) => unsafe { string_to_ub(&model) },
        Ok(None) => unsafe { string_to_ub(MODEL_UNKNOWN) },
        Err(e) => {
            log::debug!("cpuinfo read failed: {}", e);
            unsafe { string_to_ub(MODEL_UNREADABLE) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ubridge_core::string_from_ub;

    #[test]
    fn test_page_size() {
        let size = ubridge_cpu_page_size();
        assert!(size > 0);
        assert!(size % 1024 == 0 || size == 512);
    }

    #[test]
    fn test_cores() {
        assert!(ubridge_cpu_cores() >= 1);
    }

    #[test]
    fn test_model_first_match_wins() {
        let input = "\
processor\t: 0
model name\t: Example CPU @ 2.40GHz
model name\t: Other CPU
";
        let model = model_from_reader(input.as_bytes()).unwrap();
        assert_eq!(model.as_deref(), Some("Example CPU @ 2.40GHz"));
    }

    #[test]
    fn test_model_arm_processor_line() {
        let input = "Processor\t: ARMv8 Processor rev 1 (v8l)\n";
        let model = model_from_reader(input.as_bytes()).unwrap();
        assert_eq!(model.as_deref(), Some("ARMv8 Processor rev 1 (v8l)"));
    }

    #[test]
    fn test_model_no_match() {
        let input = "vendor_id\t: GenuineIntel\ncpu MHz\t\t: 2400.0\n";
        let model = model_from_reader(input.as_bytes()).unwrap();
        assert!(model.is_none());
    }

    #[test]
    fn test_model_line_without_separator() {
        // A matching line with no colon is skipped rather than reported empty.
        let input = "model name no separator\nmodel name\t: Real CPU\n";
        let model = model_from_reader(input.as_bytes()).unwrap();
        assert_eq!(model.as_deref(), Some("Real CPU"));
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn test_model_boundary_non_empty() {
        unsafe {
            let s = ubridge_cpu_model();
            assert!(!s.is_null());
            assert!(!string_from_ub(s).is_empty());
            ubridge_core::ubridge_string_decref(s);
        }
    }
}
