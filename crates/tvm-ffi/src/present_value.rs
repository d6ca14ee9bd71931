//! `pv_calculator_*`: present value of a cash-flow stream.

use crate::handle::{self, CalculatorHandle};
use std::os::raw::{c_char, c_int};
use std::slice;
use tvm_policies::PresentValuePolicy;

/// Opaque handle type behind `PvCalculator*`.
pub type PvCalculator = CalculatorHandle<PresentValuePolicy>;

/// Create a present value calculator.
///
/// Returns null if the handle could not be allocated.
#[no_mangle]
pub extern "C" fn pv_calculator_create() -> *mut PvCalculator {
    handle::create()
}

/// Present value of `n_cash_flows` cash flows discounted at `discount_rate`.
///
/// Writes the result to `*result` and returns `0` on success.  Returns `-1`
/// and leaves `*result` untouched when an argument is null, the sequence is
/// empty, or `discount_rate <= -1`.
///
/// # Safety
/// * `calc` must be null or a live handle from [`pv_calculator_create`].
/// * `cash_flows` must be null or point to `n_cash_flows` readable `f64`s.
/// * `result` must be null or valid for a write.
#[no_mangle]
pub unsafe extern "C" fn pv_calculator_calculate(
    calc: *mut PvCalculator,
    discount_rate: f64,
    cash_flows: *const f64,
    n_cash_flows: usize,
    result: *mut f64,
) -> c_int {
    let arguments_present = !cash_flows.is_null() && n_cash_flows > 0;
    // SAFETY: forwarded from this function's contract.
    unsafe {
        handle::calculate(
            calc,
            result,
            arguments_present,
            "null pointer or empty cash flows",
            |calculator| {
                // SAFETY: checked non-null and non-empty above; the caller
                // guarantees `n_cash_flows` readable elements.
                let flows = unsafe { slice::from_raw_parts(cash_flows, n_cash_flows) };
                calculator.calculate((discount_rate, flows))
            },
        )
    }
}

/// Message of the last failed calculation on `calc`.
///
/// The pointer stays valid until the next call on `calc` or its destruction.
///
/// # Safety
/// `calc` must be null or a live handle from [`pv_calculator_create`].
#[no_mangle]
pub unsafe extern "C" fn pv_calculator_get_error(calc: *const PvCalculator) -> *const c_char {
    // SAFETY: forwarded from this function's contract.
    unsafe { handle::last_error(calc) }
}

/// Destroy a present value calculator.  Null is ignored.
///
/// # Safety
/// `calc` must be null or a handle from [`pv_calculator_create`] that has not
/// been destroyed yet.
#[no_mangle]
pub unsafe extern "C" fn pv_calculator_destroy(calc: *mut PvCalculator) {
    // SAFETY: forwarded from this function's contract.
    unsafe { handle::destroy(calc) }
}
