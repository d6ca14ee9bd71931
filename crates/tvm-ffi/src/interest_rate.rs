//! `ir_calculator_*`: nominal to effective annual rate.

use crate::handle::{self, CalculatorHandle};
use std::os::raw::{c_char, c_int};
use tvm_policies::InterestRateConversionPolicy;

/// Opaque handle type behind `IrCalculator*`.
pub type IrCalculator = CalculatorHandle<InterestRateConversionPolicy>;

/// Create an interest rate conversion calculator, or null on failure.
#[no_mangle]
pub extern "C" fn ir_calculator_create() -> *mut IrCalculator {
    handle::create()
}

/// Effective annual rate of `nominal_rate` compounded `compounding_periods`
/// times per year.
///
/// # Safety
/// * `calc` must be null or a live handle from [`ir_calculator_create`].
/// * `result` must be null or valid for a write.
#[no_mangle]
pub unsafe extern "C" fn ir_calculator_calculate(
    calc: *mut IrCalculator,
    nominal_rate: f64,
    compounding_periods: c_int,
    result: *mut f64,
) -> c_int {
    // SAFETY: forwarded from this function's contract.
    unsafe {
        handle::calculate(calc, result, true, "null pointer", |calculator| {
            calculator.calculate((nominal_rate, compounding_periods))
        })
    }
}

/// Message of the last failed calculation on `calc`.
///
/// # Safety
/// `calc` must be null or a live handle from [`ir_calculator_create`].
#[no_mangle]
pub unsafe extern "C" fn ir_calculator_get_error(calc: *const IrCalculator) -> *const c_char {
    // SAFETY: forwarded from this function's contract.
    unsafe { handle::last_error(calc) }
}

/// Destroy an interest rate conversion calculator.  Null is ignored.
///
/// # Safety
/// `calc` must be null or a handle from [`ir_calculator_create`] that has not
/// been destroyed yet.
#[no_mangle]
pub unsafe extern "C" fn ir_calculator_destroy(calc: *mut IrCalculator) {
    // SAFETY: forwarded from this function's contract.
    unsafe { handle::destroy(calc) }
}
