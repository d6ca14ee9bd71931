//! Present value of an ordered cash-flow stream.
//!
//! `PV = Σ_{t=1..n} CF_t / (1 + r)^t`: the first cash flow is discounted one
//! period, the second two periods, and so on.

use crate::policy::{CalculationPolicy, PolicyKind};
use tvm_core::{ensure, Amount, Error, Rate, Real, Result};

/// Discounts a cash-flow stream at a flat per-period rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PresentValuePolicy;

impl PresentValuePolicy {
    /// Present value of `cash_flows` discounted at `discount_rate`.
    ///
    /// # Errors
    /// * [`Error::InvalidRate`] if `discount_rate <= -1` (or NaN).
    /// * [`Error::EmptyInput`] if `cash_flows` is empty.
    pub fn calculate(&self, discount_rate: Rate, cash_flows: &[Amount]) -> Result<Real> {
        ensure!(
            discount_rate > -1.0,
            Error::InvalidRate {
                rate: discount_rate
            }
        );
        ensure!(!cash_flows.is_empty(), Error::EmptyInput);

        let growth = 1.0 + discount_rate;
        let mut compound = 1.0;
        let mut pv = 0.0;
        for cf in cash_flows {
            compound *= growth;
            pv += cf / compound;
        }
        Ok(pv)
    }
}

impl CalculationPolicy for PresentValuePolicy {
    /// `(discount_rate, cash_flows)`
    type Args<'a> = (Rate, &'a [Amount]);

    const KIND: PolicyKind = PolicyKind::PresentValue;

    fn compute(&self, (discount_rate, cash_flows): Self::Args<'_>) -> Result<Real> {
        self.calculate(discount_rate, cash_flows)
    }
}
