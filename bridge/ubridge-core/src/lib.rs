//!
//! ubridge-core - Core Marshaling Types
//!
//! This crate provides the types every boundary operation uses to pass
//! strings and byte sequences between the managed host and native code:
//!
//! - `HeapHeader` and `HeapTag` for reference-counted heap objects
//! - `UbString` for heap-allocated strings
//! - `UbBytes` for heap-allocated byte arrays
//!
//! All heap objects use atomic reference counting. The host holds raw
//! pointers to these objects and releases them through the decref
//! functions; a null pointer is the sentinel for "no object".
//!

pub mod value;
pub mod bytes;

pub use value::*;
pub use bytes::*;
