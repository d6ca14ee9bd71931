//! Generic calculator bound to a single policy.

use crate::policy::{CalculationPolicy, PolicyKind};
use tvm_core::{Real, Result};

/// Forwards calculations to the policy `P` it was constructed with.
///
/// The calculator adds no validation and keeps no state: the result (or
/// error) of [`calculate`](Self::calculate) is exactly what the policy
/// returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calculator<P> {
    policy: P,
}

impl<P: CalculationPolicy> Calculator<P> {
    /// Create a calculator using the default instance of `P`.
    pub fn new() -> Self {
        Self::with_policy(P::default())
    }

    /// Create a calculator around an explicit policy value.
    pub fn with_policy(policy: P) -> Self {
        Self { policy }
    }

    /// The bound policy.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Variant tag of the bound policy.
    pub fn kind(&self) -> PolicyKind {
        P::KIND
    }

    /// Evaluate the bound policy.
    pub fn calculate(&self, args: P::Args<'_>) -> Result<Real> {
        self.policy.compute(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FutureValuePolicy, InterestRateConversionPolicy, PresentValuePolicy};
    use tvm_core::Error;

    #[test]
    fn kind_follows_policy() {
        assert_eq!(
            Calculator::<PresentValuePolicy>::new().kind(),
            PolicyKind::PresentValue
        );
        assert_eq!(
            Calculator::<FutureValuePolicy>::new().kind(),
            PolicyKind::FutureValue
        );
        assert_eq!(
            Calculator::<InterestRateConversionPolicy>::new().kind(),
            PolicyKind::InterestRateConversion
        );
    }

    #[test]
    fn forwards_results_unchanged() {
        let calc = Calculator::<FutureValuePolicy>::new();
        assert_eq!(
            calc.calculate((1000.0, 0.05, 10)),
            FutureValuePolicy.calculate(1000.0, 0.05, 10)
        );
    }

    #[test]
    fn forwards_errors_unchanged() {
        let calc = Calculator::with_policy(PresentValuePolicy);
        let flows: Vec<f64> = Vec::new();
        assert_eq!(
            calc.calculate((0.05, flows.as_slice())),
            Err(Error::EmptyInput)
        );
    }

    /// A policy with per-instance configuration, to check that the
    /// calculator calls the instance it was given.
    #[derive(Default)]
    struct Scaled {
        factor: Real,
    }

    impl CalculationPolicy for Scaled {
        type Args<'a> = Real;
        const KIND: PolicyKind = PolicyKind::FutureValue;

        fn compute(&self, x: Real) -> Result<Real> {
            Ok(self.factor * x)
        }
    }

    #[test]
    fn uses_supplied_policy_instance() {
        let calc = Calculator::with_policy(Scaled { factor: 3.0 });
        assert_eq!(calc.calculate(2.0), Ok(6.0));
        assert_eq!(calc.policy().factor, 3.0);
    }
}
