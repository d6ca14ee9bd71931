//! The policy capability shared by all formulas.

use std::fmt;
use tvm_core::{Real, Result};

/// Which formula a policy implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    /// Present value of a cash-flow stream.
    PresentValue,
    /// Future value of a principal.
    FutureValue,
    /// Nominal to effective annual rate conversion.
    InterestRateConversion,
}

impl PolicyKind {
    /// Short tag used as the prefix of the exported C symbols (`pv`, `fv`, `ir`).
    pub fn short_name(self) -> &'static str {
        match self {
            PolicyKind::PresentValue => "pv",
            PolicyKind::FutureValue => "fv",
            PolicyKind::InterestRateConversion => "ir",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PolicyKind::PresentValue => "present value",
            PolicyKind::FutureValue => "future value",
            PolicyKind::InterestRateConversion => "interest rate conversion",
        };
        f.write_str(name)
    }
}

/// A stateless formula with a fixed argument list.
///
/// Implementors validate their own inputs and report violations through
/// [`tvm_core::Error`].  The argument bundle is an associated type so each
/// policy keeps its own signature while [`Calculator`](crate::Calculator)
/// stays generic.
pub trait CalculationPolicy: Default {
    /// Arguments accepted by [`compute`](Self::compute).
    type Args<'a>;

    /// Variant tag of this policy.
    const KIND: PolicyKind;

    /// Evaluate the formula.
    fn compute(&self, args: Self::Args<'_>) -> Result<Real>;
}
