//! The record behind every opaque calculator handle.
//!
//! A handle is a `Box<CalculatorHandle<P>>` leaked to the host as a raw
//! pointer.  The generic helpers in this module implement the create /
//! calculate / get-error / destroy life cycle once; the per-policy modules
//! only adapt argument lists.

use crate::status::{contain, status_of, TVM_STATUS_FAILURE};
use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_int};
use std::ptr;
use tvm_core::{Error, Real, Result};
use tvm_policies::{CalculationPolicy, Calculator};

/// Returned by every `*_get_error` function when given a null handle.
pub(crate) const INVALID_HANDLE_MESSAGE: &[u8] = b"Invalid calculator handle\0";

/// A calculator plus the message of its most recent failure.
///
/// The error slot is empty until a calculation fails and is overwritten by
/// every calculation, so it only ever describes the latest call.
#[derive(Debug, Default)]
pub struct CalculatorHandle<P> {
    calculator: Calculator<P>,
    last_error: CString,
}

impl<P: CalculationPolicy> CalculatorHandle<P> {
    /// A handle around a fresh calculator with an empty error slot.
    pub fn new() -> Self {
        Self {
            calculator: Calculator::new(),
            last_error: CString::default(),
        }
    }

    /// The wrapped calculator.
    pub fn calculator(&self) -> &Calculator<P> {
        &self.calculator
    }

    /// Message of the most recent failed calculation, empty after a success.
    pub fn last_error(&self) -> &CStr {
        &self.last_error
    }

    /// Store the outcome of a calculation: clear the slot on success, set it
    /// on failure.
    fn record(&mut self, outcome: &Result<Real>) {
        match outcome {
            Ok(value) => {
                log::trace!("{} calculation returned {value}", P::KIND);
                self.last_error = CString::default();
            }
            Err(err) => {
                log::debug!("{} calculation failed: {err}", P::KIND);
                self.last_error = c_message(err);
            }
        }
    }
}

/// Render `err` as a C string, dropping any interior NUL bytes.
fn c_message(err: &Error) -> CString {
    let mut bytes = err.to_string().into_bytes();
    bytes.retain(|&b| b != 0);
    CString::new(bytes).unwrap_or_default()
}

// ── Life cycle ───────────────────────────────────────────────────────────────

/// Allocate a handle, or return null if allocation panics.
pub(crate) fn create<P: CalculationPolicy>() -> *mut CalculatorHandle<P> {
    match contain(|| Ok(Box::new(CalculatorHandle::<P>::new()))) {
        Ok(handle) => {
            let raw = Box::into_raw(handle);
            log::debug!("created {} calculator {raw:p}", P::KIND);
            raw
        }
        Err(err) => {
            log::error!("{} calculator: {}: {err}", P::KIND, Error::AllocationFailure);
            ptr::null_mut()
        }
    }
}

/// Validate the boundary arguments, run `run` on the handle's calculator and
/// publish the outcome.
///
/// `arguments_present` carries the caller's checks on its own pointer and
/// length arguments; `precondition` is the message stored when those checks
/// or the output pointer fail.  `out` is written only on success.
///
/// # Safety
/// `handle` must be null or a live pointer returned by [`create`] for the same
/// policy, not used concurrently.  `out` must be null or valid for a write.
pub(crate) unsafe fn calculate<P, F>(
    handle: *mut CalculatorHandle<P>,
    out: *mut Real,
    arguments_present: bool,
    precondition: &'static str,
    run: F,
) -> c_int
where
    P: CalculationPolicy,
    F: FnOnce(&Calculator<P>) -> Result<Real>,
{
    // SAFETY: the caller guarantees `handle` is null or live and unaliased.
    let Some(handle) = (unsafe { handle.as_mut() }) else {
        log::debug!("{}_calculator_calculate: null handle", P::KIND.short_name());
        return TVM_STATUS_FAILURE;
    };

    let outcome = if out.is_null() || !arguments_present {
        Err(Error::Precondition(precondition.to_owned()))
    } else {
        contain(|| run(&handle.calculator))
    };

    if let Ok(value) = outcome {
        // SAFETY: `out` was checked non-null and the caller guarantees it is
        // valid for writes.
        unsafe { out.write(value) };
    }
    handle.record(&outcome);
    status_of(&outcome)
}

/// Borrow the error slot of `handle` as a C string.
///
/// # Safety
/// `handle` must be null or a live pointer returned by [`create`].
pub(crate) unsafe fn last_error<P: CalculationPolicy>(
    handle: *const CalculatorHandle<P>,
) -> *const c_char {
    // SAFETY: the caller guarantees `handle` is null or live.
    match unsafe { handle.as_ref() } {
        Some(handle) => handle.last_error.as_ptr(),
        None => INVALID_HANDLE_MESSAGE.as_ptr().cast(),
    }
}

/// Free a handle; null is ignored.
///
/// # Safety
/// `handle` must be null or a pointer returned by [`create`] that has not yet
/// been destroyed.
pub(crate) unsafe fn destroy<P: CalculationPolicy>(handle: *mut CalculatorHandle<P>) {
    if handle.is_null() {
        return;
    }
    log::debug!("destroying {} calculator {handle:p}", P::KIND);
    // SAFETY: `handle` came from `Box::into_raw` in `create` and ownership is
    // handed back exactly once.
    drop(unsafe { Box::from_raw(handle) });
}
