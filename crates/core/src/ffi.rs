//! C FFI bindings for mobile platforms

use core::ffi::{CStr, c_char};
use core::slice;

use crate::params::DIGEST_BYTES;
use crate::{Hasher, Verification, digest, verify};

/// Opaque hasher handle for FFI
pub struct PiHasher {
    inner: Hasher,
}

/// Create a new streaming hasher
/// Returns a pointer to the hasher (caller must release it with
/// pisponge_hasher_finalize or pisponge_hasher_free)
#[unsafe(no_mangle)]
pub extern "C" fn pisponge_hasher_new() -> *mut PiHasher {
    let hasher = Box::new(PiHasher {
        inner: Hasher::new(),
    });
    Box::into_raw(hasher)
}

/// Free a hasher instance without producing a digest
#[unsafe(no_mangle)]
pub extern "C" fn pisponge_hasher_free(hasher: *mut PiHasher) {
    if !hasher.is_null() {
        unsafe {
            let _ = Box::from_raw(hasher);
        }
    }
}

/// Absorb more input bytes
/// - hasher: pointer from pisponge_hasher_new()
/// - input: pointer to input bytes (may be null when input_len is 0)
/// - input_len: length of input
#[unsafe(no_mangle)]
pub extern "C" fn pisponge_hasher_update(hasher: *mut PiHasher, input: *const u8, input_len: usize) {
    if hasher.is_null() || (input.is_null() && input_len != 0) {
        return;
    }

    unsafe {
        let hasher = &mut *hasher;
        hasher.inner.update(input_slice(input, input_len));
    }
}

/// Finish hashing, write 20 bytes to output and free the hasher
/// The handle must not be used afterwards.
#[unsafe(no_mangle)]
pub extern "C" fn pisponge_hasher_finalize(hasher: *mut PiHasher, output: *mut u8) {
    if hasher.is_null() {
        return;
    }

    let hasher = unsafe { Box::from_raw(hasher) };
    let result = hasher.inner.finalize();
    if output.is_null() {
        return;
    }

    unsafe {
        let output_slice = slice::from_raw_parts_mut(output, DIGEST_BYTES);
        output_slice.copy_from_slice(result.as_bytes());
    }
}

/// Compute the digest of input data
/// - input: pointer to input bytes (may be null when input_len is 0)
/// - input_len: length of input
/// - output: pointer to 20-byte buffer for result
#[unsafe(no_mangle)]
pub extern "C" fn pisponge_digest(input: *const u8, input_len: usize, output: *mut u8) {
    if (input.is_null() && input_len != 0) || output.is_null() {
        return;
    }

    unsafe {
        let result = digest(input_slice(input, input_len));
        let output_slice = slice::from_raw_parts_mut(output, DIGEST_BYTES);
        output_slice.copy_from_slice(result.as_bytes());
    }
}

/// Verify a NUL-terminated candidate (binary or hex) against input data
/// Returns 0 on match, 1 on mismatch, 2 on invalid format,
/// -1 on a null argument or a candidate that is not UTF-8
#[unsafe(no_mangle)]
pub extern "C" fn pisponge_verify(
    input: *const u8,
    input_len: usize,
    candidate: *const c_char,
) -> i32 {
    if (input.is_null() && input_len != 0) || candidate.is_null() {
        return -1;
    }

    let candidate = match unsafe { CStr::from_ptr(candidate) }.to_str() {
        Ok(s) => s,
        Err(_) => return -1,
    };
    let data = unsafe { input_slice(input, input_len) };

    match verify(data, candidate) {
        Verification::Match => 0,
        Verification::Mismatch => 1,
        Verification::InvalidFormat => 2,
    }
}

/// Borrow `len` bytes at `ptr`, tolerating a null pointer for empty input
unsafe fn input_slice<'a>(ptr: *const u8, len: usize) -> &'a [u8] {
    if len == 0 {
        &[]
    } else {
        unsafe { slice::from_raw_parts(ptr, len) }
    }
}
