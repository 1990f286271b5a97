//! 연간 배출량 계산 회귀 테스트. 입력 폼 시나리오별 기대값을 확인한다.
use approx::assert_relative_eq;
use india_co2_estimator::emission::{
    compute, compute_with, Category, EmissionError, EmissionFactors, EmissionInput,
};
use rstest::rstest;

fn transport_only() -> EmissionInput {
    let mut input = EmissionInput::zero();
    let t = &mut input.transport;
    t.car_km_per_week = 20.0;
    t.two_wheeler_km_per_week = 10.0;
    t.cab_km_per_week = 5.0;
    t.bus_km_per_week = 10.0;
    t.train_km_per_week = 5.0;
    t.metro_km_per_week = 5.0;
    input
}

#[test]
fn zero_input_vegetarian() {
    let out = compute(&EmissionInput::zero()).expect("compute");
    assert_eq!(out.get(Category::Electricity), 0.0);
    assert_eq!(out.get(Category::Transport), 0.0);
    assert_eq!(out.get(Category::Cooking), 0.0);
    assert_eq!(out.get(Category::Flights), 0.0);
    assert_eq!(out.get(Category::Diet), 1000.0);
    assert_eq!(out.get(Category::Digital), 0.0);
    assert_eq!(out.get(Category::Waste), 0.0);
    assert_eq!(out.get(Category::Appliances), 0.0);
    assert_eq!(out.total(), 1000.0);
    assert_eq!(out.total_tons(), 1.0);
}

#[rstest]
#[case("Vegetarian", 1000.0)]
#[case("Eggetarian", 1200.0)]
#[case("Occasional Meat", 1500.0)]
#[case("Regular Meat", 2000.0)]
fn diet_only(#[case] diet: &str, #[case] expected: f64) {
    let out = compute(&EmissionInput::zero().with_diet(diet)).expect("compute");
    assert_eq!(out.get(Category::Diet), expected);
    assert_eq!(out.total(), expected);
}

#[test]
fn transport_scenario() {
    let out = compute(&transport_only()).expect("compute");
    assert_relative_eq!(out.get(Category::Transport), 300.82, epsilon = 1e-9);
    assert_relative_eq!(out.total(), 1300.82, epsilon = 1e-9);
}

#[rstest]
#[case(100.0, 150.0, 0.0)]
#[case(150.0, 150.0, 0.0)]
#[case(150.0, 50.0, 100.0 * 12.0 * 0.82)]
fn electricity_net_of_solar(#[case] grid: f64, #[case] solar: f64, #[case] expected: f64) {
    let mut input = EmissionInput::zero();
    input.electricity.grid_kwh_per_month = grid;
    input.electricity.solar_kwh_per_month = solar;
    let out = compute(&input).expect("compute");
    assert_relative_eq!(out.get(Category::Electricity), expected);
    assert!(out.get(Category::Electricity) >= 0.0);
}

#[test]
fn form_defaults_breakdown() {
    let out = compute(&EmissionInput::default()).expect("compute");
    assert_relative_eq!(out.get(Category::Electricity), 1476.0, epsilon = 1e-9);
    assert_relative_eq!(out.get(Category::Transport), 300.82, epsilon = 1e-9);
    assert_relative_eq!(out.get(Category::Cooking), 384.0 + 196.8, epsilon = 1e-9);
    assert_relative_eq!(out.get(Category::Flights), 1300.0);
    assert_relative_eq!(out.get(Category::Diet), 1156.0, epsilon = 1e-9);
    assert_relative_eq!(out.get(Category::Digital), 54.75, epsilon = 1e-9);
    assert_relative_eq!(out.get(Category::Waste), 82.0, epsilon = 1e-9);
    assert_relative_eq!(out.get(Category::Appliances), 365.0 * 3.95, epsilon = 1e-9);
}

#[test]
fn total_is_exact_sum_and_tons_is_total_over_thousand() {
    for input in [EmissionInput::default(), transport_only(), EmissionInput::zero()] {
        let out = compute(&input).expect("compute");
        let sum = out.categories().fold(0.0, |acc, (_, v)| acc + v);
        assert_eq!(out.total(), sum);
        assert_eq!(out.total_tons(), out.total() / 1000.0);
    }
}

#[test]
fn non_negative_inputs_give_non_negative_categories() {
    let out = compute(&EmissionInput::default()).expect("compute");
    for (category, value) in out.categories() {
        assert!(value >= 0.0, "{category} = {value}");
    }
    assert!(out.total() >= 0.0);
}

#[test]
fn compute_is_idempotent() {
    let input = EmissionInput::default().with_diet("Occasional Meat");
    let a = compute(&input).expect("first");
    let b = compute(&input).expect("second");
    for ((_, x), (_, y)) in a.categories().zip(b.categories()) {
        assert_eq!(x.to_bits(), y.to_bits());
    }
    assert_eq!(a.total().to_bits(), b.total().to_bits());
}

#[test]
fn explicit_table_matches_shared_table() {
    let input = EmissionInput::default();
    assert_eq!(
        compute_with(&input, &EmissionFactors::india()),
        compute(&input)
    );
}

#[rstest]
#[case("Vegan")]
#[case("")]
#[case("regular meat")]
fn unrecognized_diet_is_invalid_input(#[case] diet: &str) {
    let err = compute(&EmissionInput::default().with_diet(diet)).unwrap_err();
    assert_eq!(
        err,
        EmissionError::InvalidInput {
            field: "diet.diet_type",
            value: diet.to_string(),
        }
    );
}

#[test]
fn out_of_range_counts_are_still_computed() {
    let mut input = EmissionInput::zero();
    input.cooking.lpg_cylinders_per_year = 30;
    let out = compute(&input).expect("compute");
    assert_eq!(out.get(Category::Cooking), 960.0);
}
