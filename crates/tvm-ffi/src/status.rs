//! Status codes and panic containment for the exported functions.

use std::any::Any;
use std::os::raw::c_int;
use std::panic::{self, AssertUnwindSafe};
use tvm_core::{Error, Result};

/// Returned by a calculate entry point that wrote its result.
pub const TVM_STATUS_SUCCESS: c_int = 0;

/// Returned by a calculate entry point that failed; the reason is available
/// from the matching `*_get_error` function.
pub const TVM_STATUS_FAILURE: c_int = -1;

/// Map a calculation outcome onto its status code.
pub fn status_of<T>(outcome: &Result<T>) -> c_int {
    match outcome {
        Ok(_) => TVM_STATUS_SUCCESS,
        Err(_) => TVM_STATUS_FAILURE,
    }
}

/// Run `f`, turning a panic into [`Error::Unknown`] so it never unwinds into
/// the host.
pub(crate) fn contain<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    panic::catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|payload| {
        let err = Error::Unknown(panic_detail(payload.as_ref()));
        log::error!("contained panic at the C boundary: {err}");
        Err(err)
    })
}

fn panic_detail(payload: &(dyn Any + Send)) -> Option<String> {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        Some((*message).to_owned())
    } else {
        payload.downcast_ref::<String>().cloned()
    }
}
