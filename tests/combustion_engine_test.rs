// ==========================================
// CombustionCalculator engine tests
// ==========================================
// Coverage: heat-balance figures for a known boiler-day, the capacity
// lookup, every precondition guard, rounding, determinism.
// ==========================================

use std::collections::HashMap;

use boiler_efficiency::config::BoilerCapacityTable;
use boiler_efficiency::domain::{BoilerOperationReading, CoalQualityReading};
use boiler_efficiency::engine::{CombustionCalculator, CombustionError};
use chrono::NaiveDate;

// ==========================================
// Test builders
// ==========================================

fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

fn test_coal() -> CoalQualityReading {
    CoalQualityReading {
        date: test_date(),
        moisture_pct: 12.0,
        ash_pct: 25.0,
        volatile_pct: 30.0,
        q_low_kcal: 4200,
        fuel_equiv_k: 0.9,
        q_bomb_kcal: 5100,
    }
}

fn test_operation(boiler_number: i32) -> BoilerOperationReading {
    BoilerOperationReading {
        date: test_date(),
        boiler_number,
        steam_rate_tph: 240,
        steam_daily_t: 10.0,
        o2_pct: 4.0,
        flue_temp_c: 140,
        blowdown_pct: 1.5,
        cold_air_temp_c: 30,
        flyash_combustible_pct: 2.0,
        coal_date: test_date(),
    }
}

fn assert_2dp(actual: f64, expected: f64, field: &str) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "{field}: expected {expected}, got {actual}"
    );
}

fn invalid_field(err: CombustionError) -> &'static str {
    match err {
        CombustionError::InvalidInput { field, .. } => field,
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

// ==========================================
// Reference boiler-day
// ==========================================

#[test]
fn test_reference_day_boiler_7() {
    let calculator = CombustionCalculator::with_defaults();

    let figures = calculator
        .compute(&test_operation(7), &test_coal())
        .expect("reference day must compute");

    // Boiler 7 resolves to the 50 t unit.
    assert_2dp(figures.q2_pct, 5.25, "q2_pct");
    assert_2dp(figures.q4_pct, 0.85, "q4_pct");
    assert_2dp(figures.q5_pct, 3.85, "q5_pct");
    assert_2dp(figures.efficiency_pct, 90.05, "efficiency_pct");
    assert_2dp(figures.fuel_rate, 158.80, "fuel_rate");
    assert_2dp(figures.useful_heat, 164.64, "useful_heat");
    assert_2dp(figures.blowdown_heat, 0.23, "blowdown_heat");
    assert_2dp(figures.standard_fuel_t, 26.18, "standard_fuel_t");
    assert_2dp(figures.natural_fuel_t, 29.09, "natural_fuel_t");
}

#[test]
fn test_other_boiler_resolves_default_capacity() {
    let calculator = CombustionCalculator::with_defaults();

    let figures = calculator
        .compute(&test_operation(3), &test_coal())
        .expect("boiler 3 day must compute");

    // 75 t default: q5 = 0.77 * 75 / 10, and everything downstream shifts.
    assert_2dp(figures.q5_pct, 5.78, "q5_pct");
    assert_2dp(figures.efficiency_pct, 88.12, "efficiency_pct");
    assert_2dp(figures.fuel_rate, 162.27, "fuel_rate");
    // Losses that do not involve capacity are unchanged.
    assert_2dp(figures.q2_pct, 5.25, "q2_pct");
    assert_2dp(figures.q4_pct, 0.85, "q4_pct");
}

#[test]
fn test_configured_capacity_is_honored() {
    let table = BoilerCapacityTable::new(HashMap::from([(3, 100.0)]), 75.0);
    let calculator = CombustionCalculator::new(table);

    let figures = calculator
        .compute(&test_operation(3), &test_coal())
        .expect("boiler 3 day must compute");

    assert_2dp(figures.q5_pct, 7.70, "q5_pct");
    assert_2dp(figures.efficiency_pct, 86.20, "efficiency_pct");
    assert_2dp(figures.fuel_rate, 165.89, "fuel_rate");
}

// ==========================================
// Precondition guards
// ==========================================

#[test]
fn test_o2_at_atmospheric_is_rejected() {
    let calculator = CombustionCalculator::with_defaults();

    let mut operation = test_operation(7);
    operation.o2_pct = 21.0;
    assert_eq!(
        invalid_field(calculator.compute(&operation, &test_coal()).unwrap_err()),
        "o2_pct"
    );

    operation.o2_pct = 25.0;
    assert_eq!(
        invalid_field(calculator.compute(&operation, &test_coal()).unwrap_err()),
        "o2_pct"
    );
}

#[test]
fn test_flyash_combustible_at_100_is_rejected() {
    let calculator = CombustionCalculator::with_defaults();

    let mut operation = test_operation(7);
    operation.flyash_combustible_pct = 100.0;
    assert_eq!(
        invalid_field(calculator.compute(&operation, &test_coal()).unwrap_err()),
        "flyash_combustible_pct"
    );
}

#[test]
fn test_zero_daily_steam_is_rejected() {
    let calculator = CombustionCalculator::with_defaults();

    let mut operation = test_operation(7);
    operation.steam_daily_t = 0.0;
    assert_eq!(
        invalid_field(calculator.compute(&operation, &test_coal()).unwrap_err()),
        "steam_daily_t"
    );
}

#[test]
fn test_fuel_side_guards() {
    let calculator = CombustionCalculator::with_defaults();
    let operation = test_operation(7);

    let mut coal = test_coal();
    coal.q_low_kcal = 0;
    assert_eq!(
        invalid_field(calculator.compute(&operation, &coal).unwrap_err()),
        "q_low_kcal"
    );

    let mut coal = test_coal();
    coal.fuel_equiv_k = 0.0;
    assert_eq!(
        invalid_field(calculator.compute(&operation, &coal).unwrap_err()),
        "fuel_equiv_k"
    );
}

#[test]
fn test_losses_summing_to_100_are_rejected() {
    // Capacity 100 t with a 0.77 t daily figure makes q5 exactly 100 %;
    // equal temperatures and clean fly-ash zero out q2 and q4.
    let table = BoilerCapacityTable::new(HashMap::from([(3, 100.0)]), 75.0);
    let calculator = CombustionCalculator::new(table);

    let mut operation = test_operation(3);
    operation.steam_daily_t = 0.77;
    operation.flue_temp_c = 30;
    operation.cold_air_temp_c = 30;
    operation.flyash_combustible_pct = 0.0;

    assert_eq!(
        invalid_field(calculator.compute(&operation, &test_coal()).unwrap_err()),
        "efficiency_pct"
    );
}

#[test]
fn test_nan_reading_surfaces_as_named_nonfinite() {
    let calculator = CombustionCalculator::with_defaults();

    let mut operation = test_operation(7);
    operation.o2_pct = f64::NAN;

    match calculator.compute(&operation, &test_coal()).unwrap_err() {
        CombustionError::NonFinite { field } => assert_eq!(field, "q2_pct"),
        other => panic!("expected NonFinite, got {other:?}"),
    }
}

// ==========================================
// Result guarantees
// ==========================================

#[test]
fn test_identical_inputs_give_identical_figures() {
    let calculator = CombustionCalculator::with_defaults();

    let first = calculator.compute(&test_operation(7), &test_coal()).unwrap();
    let second = calculator.compute(&test_operation(7), &test_coal()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_efficiency_above_100_passes_through() {
    // A stack reading below the cold-air temperature drives q2 negative; the
    // calculator reports the implausible figure instead of clamping it.
    let calculator = CombustionCalculator::with_defaults();

    let mut operation = test_operation(7);
    operation.flue_temp_c = 20;
    operation.cold_air_temp_c = 180;
    operation.flyash_combustible_pct = 0.0;
    operation.steam_daily_t = 1000.0;

    let figures = calculator.compute(&operation, &test_coal()).unwrap();
    assert!(figures.efficiency_pct > 100.0);
}
