//! # tvm
//!
//! Time-value-of-money calculators: present value, future value and
//! effective annual rate, usable from Rust directly or from any host through
//! the C ABI of [`ffi`].
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on it rather than on the individual
//! `tvm-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use tvm::policies::{Calculator, InterestRateConversionPolicy};
//!
//! let ear = Calculator::<InterestRateConversionPolicy>::new()
//!     .calculate((0.12, 12))
//!     .unwrap();
//! assert!((ear - 0.126825).abs() < 1e-6);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use tvm_core as core;

/// Calculation policies and the generic calculator.
pub use tvm_policies as policies;

/// C ABI: opaque handles, status codes, last-error strings.
pub use tvm_ffi as ffi;

pub use tvm_core::{Error, Result};
pub use tvm_policies::{
    CalculationPolicy, Calculator, FutureValuePolicy, InterestRateConversionPolicy,
    PolicyKind, PresentValuePolicy,
};
