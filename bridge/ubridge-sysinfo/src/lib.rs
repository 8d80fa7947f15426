///
/// ubridge-sysinfo - System Information
///
/// Captures uname(2) output into a `SystemInfo` value and formats it as the
/// labeled multi-line string the host displays. Also carries the small
/// demo probes (add, processor count) whose diagnostic side effects go
/// through the log facade.
///
/// ## Boundary Operations
///
/// - `ubridge_sysinfo_describe() -> string` - formatted system information,
///   fixed fallback text when uname fails
/// - `ubridge_sysinfo_pid() -> int` - calling process id
/// - `ubridge_sysinfo_add(a, b) -> int` - sum with a diagnostic message
/// - `ubridge_sysinfo_processor_count() -> int` - online processor count
///   with a diagnostic message
///

use std::fmt;

use thiserror::Error;

use ubridge_core::{UbString, string_to_ub};

/// Fallback text when the kernel query fails
const DESCRIBE_FALLBACK: &str = "Failed to get system information";

#[derive(Debug, Error)]
pub enum SysinfoError {
    #[error("uname failed with errno {0}")]
    Uname(i32),
    #[error("system information not supported on this platform")]
    Unsupported,
}

/// Kernel identification plus the calling process id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemInfo {
    pub sysname: String,
    pub nodename: String,
    pub release: String,
    pub version: String,
    pub machine: String,
    pub pid: i64,
}

impl fmt::Display for SystemInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Native system info:\n  System: {}\n  Node: {}\n  Release: {}\n  Version: {}\n  Machine: {}\n  PID: {}",
            self.sysname, self.nodename, self.release, self.version, self.machine, self.pid
        )
    }
}

/// Copy a NUL-terminated utsname field into an owned string
#[cfg(unix)]
fn field_to_string(field: &[libc::c_char]) -> String {
    let bytes: Vec<u8> = field
        .iter()
        .map(|&c| c as u8)
        .take_while(|&c| c != 0)
        .collect();
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Capture the current system identification via uname(2)
#[cfg(unix)]
pub fn capture() -> Result<SystemInfo, SysinfoError> {
    let mut info: libc::utsname = unsafe { std::mem::zeroed() };
    let rc = unsafe { libc::uname(&mut info) };
    if rc != 0 {
        let errno = std::io::Error::last_os_error().raw_os_error().unwrap_or(-1);
        return Err(SysinfoError::Uname(errno));
    }
    Ok(SystemInfo {
        sysname: field_to_string(&info.sysname),
        nodename: field_to_string(&info.nodename),
        release: field_to_string(&info.release),
        version: field_to_string(&info.version),
        machine: field_to_string(&info.machine),
        pid: std::process::id() as i64,
    })
}

#[cfg(not(unix))]
pub fn capture() -> Result<SystemInfo, SysinfoError> {
    Err(SysinfoError::Unsupported)
}

#[unsafe(no_mangle)]
pub extern "C" fn ubridge_sysinfo_describe() -> *mut UbString {
    match capture() {
        Ok(info) => unsafe { string_to_ub(&info.to_string()) },
        Err(e) => {
            log::debug!("system info capture failed: {}", e);
            unsafe { string_to_ub(DESCRIBE_FALLBACK) }
        }
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn ubridge_sysinfo_pid() -> i64 {
    std::process::id() as i64
}

#[unsafe(no_mangle)]
pub extern "C" fn ubridge_sysinfo_add(a: i64, b: i64) -> i64 {
    log::debug!("native add called: {} + {}", a, b);
    a.wrapping_add(b)
}

#[unsafe(no_mangle)]
pub extern "C" fn ubridge_sysinfo_processor_count() -> i64 {
    let processors = unsafe { libc::sysconf(libc::_SC_NPROCESSORS_ONLN) as i64 };
    log::debug!("detected {} processors", processors);
    processors
}

#[cfg(test)]
mod tests {
    use super::*;
    use ubridge_core::string_from_ub;

    #[test]
    #[cfg(unix)]
    fn test_capture() {
        let info = capture().unwrap();
        assert!(!info.sysname.is_empty());
        assert!(!info.machine.is_empty());
        assert_eq!(info.pid, std::process::id() as i64);
    }

    #[test]
    fn test_display_has_all_fields() {
        let info = SystemInfo {
            sysname: "Linux".into(),
            nodename: "host1".into(),
            release: "6.1.0".into(),
            version: "#1 SMP".into(),
            machine: "x86_64".into(),
            pid: 4242,
        };
        let text = info.to_string();
        for label in ["System: Linux", "Node: host1", "Release: 6.1.0",
                      "Version: #1 SMP", "Machine: x86_64", "PID: 4242"] {
            assert!(text.contains(label), "missing {:?} in {:?}", label, text);
        }
    }

    #[test]
    #[cfg(unix)]
    fn test_describe_boundary() {
        unsafe {
            let s = ubridge_sysinfo_describe();
            let text = string_from_ub(s);
            assert!(text.contains("System:"));
            assert!(text.contains("PID:"));
            ubridge_core::ubridge_string_decref(s);
        }
    }

    #[test]
    fn test_pid_positive() {
        assert!(ubridge_sysinfo_pid() > 0);
    }

    #[test]
    fn test_add() {
        assert_eq!(ubridge_sysinfo_add(2, 3), 5);
        assert_eq!(ubridge_sysinfo_add(-1, 1), 0);
        assert_eq!(ubridge_sysinfo_add(i64::MAX, 1), i64::MIN);
    }

    #[test]
    fn test_processor_count() {
        assert!(ubridge_sysinfo_processor_count() >= 1);
    }
}
