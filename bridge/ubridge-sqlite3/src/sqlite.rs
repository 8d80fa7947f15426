///
/// SQLite handle bridge.
///
/// The host never sees a connection pointer. Connections live in a
/// process-wide registry behind LazyLock<Mutex<ConnRegistry>>; the host
/// holds i64 handles. Handle ids start at 1 and are never reused, so:
/// - 0 stays free as the "creation failed" sentinel
/// - a double close or a close of a stale id misses the registry and
///   degrades to a logged no-op instead of a double free
///
/// Error handling follows the boundary policy: detectable failures become
/// sentinel values (0 handle), never a raised condition.
///

use std::collections::HashMap;
use std::sync::{LazyLock, Mutex};

use rusqlite::Connection;

use ubridge_core::{UbString, string_from_ub, string_to_ub};

struct ConnRegistry {
    connections: HashMap<i64, Connection>,
    next_id: i64,
}

impl ConnRegistry {
    fn new() -> Self {
        Self {
            connections: HashMap::new(),
            next_id: 1,
        }
    }

    fn insert(&mut self, conn: Connection) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        self.connections.insert(id, conn);
        id
    }

    fn remove(&mut self, id: i64) -> Option<Connection> {
        self.connections.remove(&id)
    }
}

static CONN_REGISTRY: LazyLock<Mutex<ConnRegistry>> =
    LazyLock::new(|| Mutex::new(ConnRegistry::new()));

#[unsafe(no_mangle)]
pub unsafe extern "C" fn ubridge_sqlite3_open(path: *const UbString) -> i64 {
    let path_str = unsafe { string_from_ub(path) };
    match Connection::open(&path_str) {
        Ok(conn) => {
            let mut reg = CONN_REGISTRY.lock().unwrap();
            let handle = reg.insert(conn);
            log::debug!("opened database {:?} as handle {}", path_str, handle);
            handle
        }
        Err(e) => {
            log::debug!("failed to open database {:?}: {}", path_str, e);
            0
        }
    }
}

/// Close a database handle. Handle 0 is a guarded no-op; an unknown id is
/// detected and logged instead of faulting.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ubridge_sqlite3_close(handle: i64) {
    if handle == 0 {
        return;
    }
    let mut reg = CONN_REGISTRY.lock().unwrap();
    if reg.remove(handle).is_none() {
        log::warn!("close of unknown database handle {}", handle);
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn ubridge_sqlite3_version() -> *mut UbString {
    unsafe { string_to_ub(rusqlite::version()) }
}
