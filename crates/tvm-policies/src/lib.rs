//! # tvm-policies
//!
//! The three time-value-of-money formulas and the generic calculator that
//! delegates to them.
//!
//! Each formula is a *policy*: a stateless type implementing
//! [`CalculationPolicy`] that validates its own inputs.  A
//! [`Calculator<P>`](Calculator) is bound to one policy at construction and
//! forwards every call to it unchanged.
//!
//! ```
//! use tvm_policies::{Calculator, PresentValuePolicy};
//!
//! let calc = Calculator::<PresentValuePolicy>::new();
//! let pv = calc.calculate((0.05, &[100.0, 200.0, 300.0][..])).unwrap();
//! assert!((pv - 535.795_270).abs() < 1e-6);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// The generic `Calculator<P>` delegator.
pub mod calculator;

/// Future value of a principal.
pub mod future_value;

/// Nominal to effective annual rate conversion.
pub mod interest_rate_conversion;

/// The `CalculationPolicy` capability and the policy variant tag.
pub mod policy;

/// Present value of a cash-flow stream.
pub mod present_value;

pub use calculator::Calculator;
pub use future_value::FutureValuePolicy;
pub use interest_rate_conversion::InterestRateConversionPolicy;
pub use policy::{CalculationPolicy, PolicyKind};
pub use present_value::PresentValuePolicy;
