//! # tvm-ffi
//!
//! C ABI for the time-value-of-money calculators.
//!
//! Each calculator family (`pv`, `fv`, `ir`) exports four functions with the
//! same shape:
//!
//! | Function | Returns |
//! |----------|---------|
//! | `{x}_calculator_create()` | opaque handle, or null |
//! | `{x}_calculator_calculate(handle, args…, result*)` | `0` on success, `-1` on failure |
//! | `{x}_calculator_get_error(handle)` | message of the last failure (empty after a success) |
//! | `{x}_calculator_destroy(handle)` | nothing; null is ignored |
//!
//! No error or panic unwinds into the host: every failure becomes
//! [`TVM_STATUS_FAILURE`] plus a message stored on the handle.  A handle must
//! not be used from two threads at once; distinct handles are independent.
//!
//! The matching C declarations live in `include/tvm_calculator.h`.

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

/// `fv_calculator_*` entry points.
pub mod future_value;

/// The generic handle record and its life cycle.
pub mod handle;

/// `ir_calculator_*` entry points.
pub mod interest_rate;

/// `pv_calculator_*` entry points.
pub mod present_value;

/// Status codes and panic containment.
pub mod status;

use std::os::raw::c_char;

pub use future_value::*;
pub use handle::CalculatorHandle;
pub use interest_rate::*;
pub use present_value::*;
pub use status::{TVM_STATUS_FAILURE, TVM_STATUS_SUCCESS};

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "\0");

/// Library version as a static NUL-terminated string.
#[no_mangle]
pub extern "C" fn tvm_version() -> *const c_char {
    VERSION.as_ptr().cast()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    #[test]
    fn version_matches_package() {
        // SAFETY: `tvm_version` returns a static NUL-terminated string.
        let version = unsafe { CStr::from_ptr(tvm_version()) };
        assert_eq!(version.to_str().unwrap(), env!("CARGO_PKG_VERSION"));
    }
}
