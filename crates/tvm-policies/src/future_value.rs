//! Future value of a principal compounded over whole periods.

use crate::policy::{CalculationPolicy, PolicyKind};
use tvm_core::{ensure, Amount, Error, Integer, Rate, Real, Result};

/// Compounds a principal at a flat per-period rate: `FV = P·(1 + r)^n`.
///
/// The rate itself is not validated.  A rate at or below `-1` with a positive
/// period count yields zero or sign-alternating values, which are returned
/// as computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FutureValuePolicy;

impl FutureValuePolicy {
    /// Future value of `principal` after `periods` periods at `interest_rate`.
    ///
    /// # Errors
    /// * [`Error::InvalidPrincipal`] if `principal < 0`.
    /// * [`Error::InvalidPeriods`] if `periods < 0`.
    pub fn calculate(
        &self,
        principal: Amount,
        interest_rate: Rate,
        periods: Integer,
    ) -> Result<Real> {
        ensure!(principal >= 0.0, Error::InvalidPrincipal { principal });
        ensure!(
            periods >= 0,
            Error::InvalidPeriods {
                periods,
                requirement: "periods must be non-negative",
            }
        );
        Ok(principal * (1.0 + interest_rate).powi(periods))
    }
}

impl CalculationPolicy for FutureValuePolicy {
    /// `(principal, interest_rate, periods)`
    type Args<'a> = (Amount, Rate, Integer);

    const KIND: PolicyKind = PolicyKind::FutureValue;

    fn compute(&self, (principal, interest_rate, periods): Self::Args<'_>) -> Result<Real> {
        self.calculate(principal, interest_rate, periods)
    }
}
