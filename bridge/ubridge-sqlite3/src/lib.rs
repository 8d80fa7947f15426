//!
//! ubridge-sqlite3 - Embedded Database Bridge
//!
//! Thin pass-through wrapper over SQLite exposed to the managed host as
//! three boundary operations: open, close, and library version. Uses
//! rusqlite with bundled SQLite for zero system dependency.
//!

pub mod sqlite;

pub use sqlite::*;
