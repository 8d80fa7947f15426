///
/// UbBytes - Core Bytes Type
///
/// Heap-allocated byte arrays with reference counting. Similar to strings
/// but for raw binary data; the codec operations pass these across the
/// boundary in both directions.
///

use std::alloc::{Layout, alloc, dealloc};

use crate::{HeapHeader, HeapTag};

/// A heap-allocated byte array
#[repr(C)]
pub struct UbBytes {
    pub header: HeapHeader,
    pub len: usize,
    pub capacity: usize,
    pub data: [u8; 0],
}

impl UbBytes {
    pub fn as_slice(&self) -> &[u8] {
        unsafe { std::slice::from_raw_parts(self.data.as_ptr(), self.len) }
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn ubridge_bytes_new(len: usize) -> *mut UbBytes {
    unsafe {
        let cap = if len == 0 { 8 } else { len };
        let layout = Layout::from_size_align(
            std::mem::size_of::<UbBytes>() + cap,
            std::mem::align_of::<UbBytes>(),
        ).unwrap();

        let ptr = alloc(layout) as *mut UbBytes;
        if ptr.is_null() {
            panic!("Failed to allocate bytes");
        }

        (*ptr).header = HeapHeader::new(HeapTag::Bytes);
        (*ptr).len = len;
        (*ptr).capacity = cap;

        ptr
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn ubridge_bytes_from(data: *const u8, len: usize) -> *mut UbBytes {
    unsafe {
        let ptr = ubridge_bytes_new(len);
        if !data.is_null() && len > 0 {
            std::ptr::copy_nonoverlapping(data, (*ptr).data.as_mut_ptr(), len);
        }
        ptr
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn ubridge_bytes_len(b: *const UbBytes) -> i64 {
    if b.is_null() {
        0
    } else {
        unsafe { (*b).len as i64 }
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn ubridge_bytes_get(b: *const UbBytes, index: i64) -> i64 {
    if b.is_null() {
        return 0;
    }
    unsafe {
        if index < 0 || index as usize >= (*b).len {
            return 0;
        }
        *(*b).data.as_ptr().add(index as usize) as i64
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn ubridge_bytes_set(b: *mut UbBytes, index: i64, value: i64) {
    if b.is_null() {
        return;
    }
    unsafe {
        if index >= 0 && (index as usize) < (*b).len {
            *(*b).data.as_mut_ptr().add(index as usize) = value as u8;
        }
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn ubridge_bytes_incref(b: *mut UbBytes) {
    if !b.is_null() {
        unsafe { (*b).header.incref(); }
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn ubridge_bytes_decref(b: *mut UbBytes) {
    if !b.is_null() {
        unsafe {
            if (*b).header.decref() {
                let cap = (*b).capacity;
                let layout = Layout::from_size_align(
                    std::mem::size_of::<UbBytes>() + cap,
                    std::mem::align_of::<UbBytes>(),
                ).unwrap();
                dealloc(b as *mut u8, layout);
            }
        }
    }
}

/// Build a heap byte array from a Rust slice
pub unsafe fn bytes_to_ub(data: &[u8]) -> *mut UbBytes {
    unsafe { ubridge_bytes_from(data.as_ptr(), data.len()) }
}

/// Copy a heap byte array into an owned Vec; null yields an empty Vec
pub unsafe fn bytes_from_ub(b: *const UbBytes) -> Vec<u8> {
    if b.is_null() {
        return Vec::new();
    }
    unsafe { (*b).as_slice().to_vec() }
}
