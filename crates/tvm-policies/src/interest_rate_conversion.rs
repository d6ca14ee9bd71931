//! Conversion of a nominal annual rate into an effective annual rate.
//!
//! `EAR = (1 + r/m)^m - 1` where `m` is the number of compounding periods per
//! year.  As `m` grows the result converges towards `e^r - 1`.

use crate::policy::{CalculationPolicy, PolicyKind};
use tvm_core::{ensure, Error, Integer, Rate, Real, Result};

/// Converts a nominal rate compounded `m` times a year into its effective
/// annual equivalent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InterestRateConversionPolicy;

impl InterestRateConversionPolicy {
    /// Effective annual rate of `nominal_rate` compounded
    /// `compounding_periods` times per year.
    ///
    /// With annual compounding the nominal rate is returned as is.
    ///
    /// # Errors
    /// [`Error::InvalidPeriods`] if `compounding_periods <= 0`.
    pub fn calculate(&self, nominal_rate: Rate, compounding_periods: Integer) -> Result<Real> {
        ensure!(
            compounding_periods > 0,
            Error::InvalidPeriods {
                periods: compounding_periods,
                requirement: "compounding periods must be positive",
            }
        );
        if compounding_periods == 1 {
            return Ok(nominal_rate);
        }
        let m = Real::from(compounding_periods);
        Ok((1.0 + nominal_rate / m).powi(compounding_periods) - 1.0)
    }
}

impl CalculationPolicy for InterestRateConversionPolicy {
    /// `(nominal_rate, compounding_periods)`
    type Args<'a> = (Rate, Integer);

    const KIND: PolicyKind = PolicyKind::InterestRateConversion;

    fn compute(&self, (nominal_rate, compounding_periods): Self::Args<'_>) -> Result<Real> {
        self.calculate(nominal_rate, compounding_periods)
    }
}
