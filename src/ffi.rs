//! FFI bindings for the fitness tracker
//!
//! This module provides C-compatible functions for calling the calculator from
//! other languages. Returned strings are allocated here and must be freed by the
//! caller using `tracker_free_string`.

use std::cell::RefCell;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use crate::encoder::ReportEncoder;
use crate::error::TrackerError;
use crate::pipeline::training_info;

// Thread-local storage for the last error message
thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

/// Set the last error message
fn set_last_error(msg: &str) {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = CString::new(msg).ok();
    });
}

/// Clear the last error message
fn clear_last_error() {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = None;
    });
}

/// Helper to convert Rust string to C string (caller must free)
fn string_to_cstr(s: &str) -> *mut c_char {
    match CString::new(s) {
        Ok(cstr) => cstr.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Read the package arguments, recording an error when they are unusable
unsafe fn read_args(
    code: *const c_char,
    data: *const f64,
    len: usize,
) -> Option<(String, Vec<f64>)> {
    if code.is_null() {
        set_last_error("Invalid workout code pointer");
        return None;
    }
    let Ok(code) = CStr::from_ptr(code).to_str() else {
        set_last_error("Workout code is not valid UTF-8");
        return None;
    };

    let values = if len == 0 {
        Vec::new()
    } else if data.is_null() {
        set_last_error("Invalid data pointer");
        return None;
    } else {
        std::slice::from_raw_parts(data, len).to_vec()
    };

    Some((code.to_string(), values))
}

fn finish(result: Result<String, TrackerError>) -> *mut c_char {
    match result {
        Ok(s) => string_to_cstr(&s),
        Err(e) => {
            set_last_error(&e.descriptor());
            ptr::null_mut()
        }
    }
}

/// Compute the report line for a sensor package.
///
/// # Safety
/// - `code` must be a valid null-terminated C string.
/// - `data` must point to `len` readable `f64` values (may be NULL when `len` is 0).
/// - Returns a newly allocated string that must be freed with `tracker_free_string`.
/// - Returns NULL on error; call `tracker_last_error` to get the error message.
#[no_mangle]
pub unsafe extern "C" fn tracker_report_message(
    code: *const c_char,
    data: *const f64,
    len: usize,
) -> *mut c_char {
    clear_last_error();

    let Some((code, values)) = read_args(code, data, len) else {
        return ptr::null_mut();
    };

    finish(training_info(&code, &values).map(|info| info.get_message()))
}

/// Compute the JSON report for a sensor package.
///
/// # Safety
/// Same contract as `tracker_report_message`.
#[no_mangle]
pub unsafe extern "C" fn tracker_report_json(
    code: *const c_char,
    data: *const f64,
    len: usize,
) -> *mut c_char {
    clear_last_error();

    let Some((code, values)) = read_args(code, data, len) else {
        return ptr::null_mut();
    };

    let encoder = ReportEncoder::new();
    finish(training_info(&code, &values).and_then(|info| encoder.encode_to_json(&info)))
}

/// Get the last error message.
///
/// # Safety
/// - Returns a newly allocated string that must be freed with `tracker_free_string`.
/// - Returns NULL if no error has occurred.
#[no_mangle]
pub unsafe extern "C" fn tracker_last_error() -> *mut c_char {
    LAST_ERROR.with(|e| match e.borrow().as_ref() {
        Some(msg) => msg.clone().into_raw(),
        None => ptr::null_mut(),
    })
}

/// Free a string returned by this library.
///
/// # Safety
/// - `s` must be a pointer returned by a `tracker_*` function, or NULL.
/// - After calling this function, the pointer is invalid.
#[no_mangle]
pub unsafe extern "C" fn tracker_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}
