//! `fv_calculator_*`: future value of a principal.

use crate::handle::{self, CalculatorHandle};
use std::os::raw::{c_char, c_int};
use tvm_policies::FutureValuePolicy;

/// Opaque handle type behind `FvCalculator*`.
pub type FvCalculator = CalculatorHandle<FutureValuePolicy>;

/// Create a future value calculator, or null on allocation failure.
#[no_mangle]
pub extern "C" fn fv_calculator_create() -> *mut FvCalculator {
    handle::create()
}

/// Future value of `principal` after `periods` periods at `interest_rate`.
///
/// Returns `0` and writes `*result` on success; `-1` when a pointer is null,
/// `principal < 0` or `periods < 0`.
///
/// # Safety
/// * `calc` must be null or a live handle from [`fv_calculator_create`].
/// * `result` must be null or valid for a write.
#[no_mangle]
pub unsafe extern "C" fn fv_calculator_calculate(
    calc: *mut FvCalculator,
    principal: f64,
    interest_rate: f64,
    periods: c_int,
    result: *mut f64,
) -> c_int {
    // SAFETY: forwarded from this function's contract.
    unsafe {
        handle::calculate(calc, result, true, "null pointer", |calculator| {
            calculator.calculate((principal, interest_rate, periods))
        })
    }
}

/// Message of the last failed calculation on `calc`.
///
/// # Safety
/// `calc` must be null or a live handle from [`fv_calculator_create`].
#[no_mangle]
pub unsafe extern "C" fn fv_calculator_get_error(calc: *const FvCalculator) -> *const c_char {
    // SAFETY: forwarded from this function's contract.
    unsafe { handle::last_error(calc) }
}

/// Destroy a future value calculator.  Null is ignored.
///
/// # Safety
/// `calc` must be null or a handle from [`fv_calculator_create`] that has not
/// been destroyed yet.
#[no_mangle]
pub unsafe extern "C" fn fv_calculator_destroy(calc: *mut FvCalculator) {
    // SAFETY: forwarded from this function's contract.
    unsafe { handle::destroy(calc) }
}
