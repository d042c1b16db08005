//! Integration test: discount a semi-annual bond off a zero-rate curve.
//!
//! Valuation: January 15, 2025. 3Y bond, 4% coupon paid semi-annually,
//! face 100. Curve rates are semi-annually compounded, ACT/365F.
//!
//! | Tenor | Zero rate |
//! |-------|-----------|
//! | 6M    | 4.20%     |
//! | 1Y    | 4.10%     |
//! | 2Y    | 3.95%     |
//! | 3Y    | 3.90%     |
//! | 5Y    | 3.92%     |

use std::sync::Arc;

use approx::assert_relative_eq;
use meridian_core::daycounts::{DayCount, DayCountConvention};
use meridian_core::{Currency, Date};
use meridian_curves::prelude::*;

const FACE: f64 = 100.0;
const COUPON: f64 = 0.04;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn valuation() -> Date {
    Date::from_ymd(2025, 1, 15).unwrap()
}

fn curve() -> InterpolatedNodalCurve {
    let metadata = CurveMetadata::zero_rates("USD-TSY", DayCountConvention::Act365Fixed)
        .with_compounding_per_year(2);
    InterpolatedNodalCurve::new(
        metadata,
        vec![0.5, 1.0, 2.0, 3.0, 5.0],
        vec![0.042, 0.041, 0.0395, 0.039, 0.0392],
    )
    .unwrap()
}

fn model() -> DiscountCurveModel<InterpolatedNodalCurve> {
    DiscountCurveModel::new(Currency::USD, valuation(), Arc::new(curve())).unwrap()
}

/// (payment date, amount) for the bond.
fn cashflows() -> Vec<(Date, f64)> {
    (1..=6)
        .map(|k| {
            let date = valuation().add_months(6 * k).unwrap();
            let amount = if k == 6 { FACE + FACE * COUPON / 2.0 } else { FACE * COUPON / 2.0 };
            (date, amount)
        })
        .collect()
}

fn present_value<D: DiscountFactors>(model: &D) -> f64 {
    cashflows()
        .iter()
        .map(|(date, amount)| amount * model.discount_factor(*date))
        .sum()
}

#[test]
fn test_bond_present_value() {
    init_tracing();
    let model = model();

    let pv = present_value(&model);

    // coupon just above the curve: priced slightly above par
    assert!(pv > 100.0 && pv < 100.5, "pv = {pv}");

    let manual: f64 = cashflows()
        .iter()
        .map(|(date, amount)| {
            let t = DayCountConvention::Act365Fixed.relative_year_fraction(valuation(), *date);
            let r = curve().y_value(t);
            amount * (1.0 + r / 2.0).powf(-2.0 * t)
        })
        .sum();
    assert_relative_eq!(pv, manual, epsilon = 1e-12);
}

#[test]
fn test_spread_lowers_present_value() {
    init_tracing();
    let model = model();
    let base = present_value(&model);

    let spread_pv: f64 = cashflows()
        .iter()
        .map(|(date, amount)| {
            amount
                * model
                    .discount_factor_with_spread(*date, 0.005, CompoundedRateType::Periodic, 2)
                    .unwrap()
        })
        .sum();

    // a semi-annual spread on a semi-annual curve is a parallel shift of the rates
    let shifted = model.apply_perturbation(&ParallelShift::from_bps(50.0)).unwrap();
    assert!(spread_pv < base);
    assert_relative_eq!(spread_pv, present_value(&shifted), epsilon = 1e-10);
}

#[test]
fn test_parameter_sensitivity_against_node_bumps() {
    init_tracing();
    let model = model();

    // -df·t is the derivative under continuous compounding; dividing by
    // (1 + r/m) converts it to the periodic derivative of each cash flow
    let analytic = cashflows()
        .iter()
        .map(|(date, amount)| {
            let scale = amount / (1.0 + model.zero_rate(*date) / 2.0);
            let point = model
                .zero_rate_point_sensitivity(*date, Currency::USD)
                .multiplied_by(scale);
            model.curve_parameter_sensitivity(&point)
        })
        .try_fold(CurveCurrencyParameterSensitivities::empty(), |acc, s| acc.combined_with_all(s))
        .unwrap();

    let entry = analytic.find(&CurveName::new("USD-TSY"), Currency::USD).unwrap();
    assert_eq!(entry.parameter_count(), 5);

    let h = 1e-5;
    for node in 0..5 {
        let up = model.apply_perturbation(&NodeShifts::single(5, node, h)).unwrap();
        let down = model.apply_perturbation(&NodeShifts::single(5, node, -h)).unwrap();
        let bumped = (present_value(&up) - present_value(&down)) / (2.0 * h);
        assert_relative_eq!(entry.sensitivity()[node], bumped, epsilon = 1e-5);
    }

    // nothing beyond the 3Y maturity
    assert_eq!(entry.sensitivity()[4], 0.0);
    // roughly the bond's dollar duration
    assert!(entry.total() < -250.0 && entry.total() > -300.0, "total = {}", entry.total());
}

#[test]
fn test_point_sensitivity_convention() {
    let model = model();
    for (date, _) in cashflows() {
        let t = model.relative_year_fraction(date);
        let point = model.zero_rate_point_sensitivity(date, Currency::USD);
        assert_relative_eq!(point.sensitivity(), -model.discount_factor(date) * t, epsilon = 1e-15);
    }
}

#[test]
fn test_shared_across_threads() {
    let model = Arc::new(model());
    let expected = present_value(model.as_ref());

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let model = Arc::clone(&model);
                scope.spawn(move || present_value(model.as_ref()))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_flat_nodal_matches_constant_curve() {
    let metadata = CurveMetadata::zero_rates("FLAT", DayCountConvention::Act365Fixed)
        .with_compounding_per_year(2);
    let flat_nodal =
        InterpolatedNodalCurve::new(metadata.clone(), vec![1.0, 10.0], vec![0.04, 0.04]).unwrap();
    let flat_constant = ConstantCurve::new(metadata, 0.04).unwrap();

    let nodal = DiscountCurveModel::new(Currency::USD, valuation(), Arc::new(flat_nodal)).unwrap();
    let constant =
        DiscountCurveModel::new(Currency::USD, valuation(), Arc::new(flat_constant)).unwrap();

    assert_relative_eq!(present_value(&nodal), present_value(&constant), epsilon = 1e-12);

    let last = cashflows()[5].0;
    let nodal_total = nodal
        .curve_parameter_sensitivity(&nodal.zero_rate_point_sensitivity(last, Currency::USD))
        .total(Currency::USD);
    let constant_total = constant
        .curve_parameter_sensitivity(&constant.zero_rate_point_sensitivity(last, Currency::USD))
        .total(Currency::USD);
    assert_relative_eq!(nodal_total, constant_total, epsilon = 1e-12);
}

#[test]
fn test_replacement_keeps_date_and_currency() {
    let model = model();
    let flat = InterpolatedNodalCurve::new(
        CurveMetadata::zero_rates("USD-TSY-FLAT", DayCountConvention::Act365Fixed)
            .with_compounding_per_year(2),
        vec![1.0],
        vec![0.05],
    )
    .unwrap();

    let replaced = model.with_curve(Arc::new(flat.clone())).unwrap();
    assert_eq!(replaced.currency(), Currency::USD);
    assert_eq!(replaced.valuation_date(), valuation());
    assert_eq!(replaced.curve().as_ref(), &flat);
    assert!(present_value(&replaced) < present_value(&model));
}

#[test]
fn test_curve_roundtrip_through_json() {
    let json = serde_json::to_string(&curve()).unwrap();
    let restored: InterpolatedNodalCurve = serde_json::from_str(&json).unwrap();
    let from_json =
        DiscountCurveModel::new(Currency::USD, valuation(), Arc::new(restored)).unwrap();
    assert_eq!(from_json, model());
}
