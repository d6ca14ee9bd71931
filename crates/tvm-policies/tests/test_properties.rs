//! Property tests for the three calculation policies.
//!
//! Each block checks one universally quantified statement about a formula,
//! driven through [`Calculator`] so the delegation path is covered as well.

use approx::assert_relative_eq;
use proptest::prelude::*;
use tvm_core::Error;
use tvm_policies::{
    Calculator, FutureValuePolicy, InterestRateConversionPolicy, PresentValuePolicy,
};

fn closed_form_pv(rate: f64, flows: &[f64]) -> f64 {
    flows
        .iter()
        .enumerate()
        .map(|(i, cf)| cf / (1.0 + rate).powi(i as i32 + 1))
        .sum()
}

// ─── Present value ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn pv_matches_closed_form(
        rate in -0.9f64..2.0,
        flows in prop::collection::vec(-1.0e4f64..1.0e4, 1..40),
    ) {
        let pv = Calculator::<PresentValuePolicy>::new()
            .calculate((rate, flows.as_slice()))
            .unwrap();
        prop_assert!(pv.is_finite());
        let expected = closed_form_pv(rate, &flows);
        let largest_factor = (1.0 + rate).powi(-(flows.len() as i32)).max(1.0);
        let bound = flows.iter().map(|cf| cf.abs()).sum::<f64>() * largest_factor;
        prop_assert!((pv - expected).abs() <= 1e-12 * bound * flows.len() as f64 + 1e-12);
    }

    #[test]
    fn pv_single_flow(rate in -0.99f64..5.0, cf in -1.0e6f64..1.0e6) {
        let pv = PresentValuePolicy.calculate(rate, &[cf]).unwrap();
        assert_relative_eq!(pv, cf / (1.0 + rate), max_relative = 1e-12);
    }

    #[test]
    fn pv_empty_always_fails(rate in -0.99f64..5.0) {
        prop_assert_eq!(PresentValuePolicy.calculate(rate, &[]), Err(Error::EmptyInput));
    }

    #[test]
    fn pv_invalid_rate_always_fails(
        rate in -1.0e6f64..=-1.0,
        flows in prop::collection::vec(-1.0e4f64..1.0e4, 0..10),
    ) {
        prop_assert_eq!(
            PresentValuePolicy.calculate(rate, &flows),
            Err(Error::InvalidRate { rate })
        );
    }
}

// ─── Future value ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn fv_non_decreasing_in_periods(
        principal in 0.0f64..1.0e6,
        rate in prop_oneof![Just(0.0), 0.001f64..0.5],
        periods in 0i32..200,
    ) {
        let calc = Calculator::<FutureValuePolicy>::new();
        let now = calc.calculate((principal, rate, periods)).unwrap();
        let next = calc.calculate((principal, rate, periods + 1)).unwrap();
        prop_assert!(next >= now);
    }

    #[test]
    fn fv_zero_periods_is_principal(principal in 0.0f64..1.0e9, rate in -10.0f64..10.0) {
        prop_assert_eq!(FutureValuePolicy.calculate(principal, rate, 0), Ok(principal));
    }

    #[test]
    fn fv_negative_principal_always_fails(
        principal in -1.0e9f64..-1.0e-9,
        rate in -10.0f64..10.0,
        periods in 0i32..100,
    ) {
        prop_assert_eq!(
            FutureValuePolicy.calculate(principal, rate, periods),
            Err(Error::InvalidPrincipal { principal })
        );
    }

    #[test]
    fn fv_negative_periods_always_fails(periods in i32::MIN..0) {
        let is_periods_error = matches!(
            FutureValuePolicy.calculate(100.0, 0.05, periods),
            Err(Error::InvalidPeriods { .. })
        );
        prop_assert!(is_periods_error);
    }
}

// ─── Effective annual rate ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn ear_annual_is_identity(rate in -10.0f64..10.0) {
        prop_assert_eq!(InterestRateConversionPolicy.calculate(rate, 1), Ok(rate));
    }

    #[test]
    fn ear_non_positive_periods_always_fails(rate in -1.0f64..1.0, periods in -1000i32..=0) {
        let is_periods_error = matches!(
            InterestRateConversionPolicy.calculate(rate, periods),
            Err(Error::InvalidPeriods { .. })
        );
        prop_assert!(is_periods_error);
    }

    #[test]
    fn ear_strictly_increasing_and_bounded(rate in 0.01f64..1.0, periods in 1i32..200) {
        let calc = Calculator::<InterestRateConversionPolicy>::new();
        let coarse = calc.calculate((rate, periods)).unwrap();
        let fine = calc.calculate((rate, periods + 1)).unwrap();
        prop_assert!(fine > coarse);
        prop_assert!(fine < rate.exp_m1());
    }
}

#[test]
fn ear_converges_to_continuous() {
    let continuous = 0.12_f64.exp_m1();
    let calc = Calculator::<InterestRateConversionPolicy>::new();
    let mut gap = f64::INFINITY;
    for periods in [1, 2, 4, 12, 52, 365, 8760] {
        let ear = calc.calculate((0.12, periods)).unwrap();
        let next_gap = continuous - ear;
        assert!(next_gap < gap, "gap did not shrink at {periods} periods");
        gap = next_gap;
    }
    assert!(gap < 1e-5);
}

#[test]
fn pv_of_fv_recovers_principal() {
    let fv = FutureValuePolicy.calculate(1000.0, 0.05, 10).unwrap();
    let mut flows = vec![0.0; 9];
    flows.push(fv);
    let pv = PresentValuePolicy.calculate(0.05, &flows).unwrap();
    assert_relative_eq!(pv, 1000.0, max_relative = 1e-12);
}
