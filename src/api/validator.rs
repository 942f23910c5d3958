// ==========================================
// Boiler Combustion-Efficiency Tracker - reading validator
// ==========================================
// Responsibility: physical-range checks on incoming readings before they are
// persisted. Violations are collected per field so the operator sees every
// problem in one pass.
// ==========================================

use crate::api::boiler_api::BoilerOperationInput;
use crate::api::error::{ApiError, ApiResult, ValidationViolation};
use crate::domain::CoalQualityReading;

/// Residual oxygen must stay strictly below the atmospheric share.
const MAX_O2_PCT: f64 = 21.0;
/// Fly-ash combustible content must stay strictly below 100 %.
const MAX_FLYASH_PCT: f64 = 100.0;

fn check(
    violations: &mut Vec<ValidationViolation>,
    ok: bool,
    field: &str,
    reason: impl Into<String>,
) {
    if !ok {
        violations.push(ValidationViolation {
            field: field.to_string(),
            reason: reason.into(),
        });
    }
}

fn finish(violations: Vec<ValidationViolation>, what: &str) -> ApiResult<()> {
    if violations.is_empty() {
        Ok(())
    } else {
        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        let reason = format!(
            "{} field(s) rejected in {what}: {}",
            violations.len(),
            fields.join(", ")
        );
        Err(ApiError::ValidationError { reason, violations })
    }
}

/// Validate a coal-quality reading.
///
/// Percentages must lie in [0, 100]; calorific values and the standard-fuel
/// coefficient must be positive.
pub fn validate_coal_reading(reading: &CoalQualityReading) -> ApiResult<()> {
    let mut violations = Vec::new();

    check(
        &mut violations,
        (0.0..=100.0).contains(&reading.moisture_pct),
        "moisture_pct",
        format!("moisture {} % must lie in [0, 100]", reading.moisture_pct),
    );
    check(
        &mut violations,
        (0.0..=100.0).contains(&reading.ash_pct),
        "ash_pct",
        format!("ash {} % must lie in [0, 100]", reading.ash_pct),
    );
    check(
        &mut violations,
        (0.0..=100.0).contains(&reading.volatile_pct),
        "volatile_pct",
        format!("volatile matter {} % must lie in [0, 100]", reading.volatile_pct),
    );
    check(
        &mut violations,
        reading.q_low_kcal > 0,
        "q_low_kcal",
        format!("lower heating value {} kcal/kg must be positive", reading.q_low_kcal),
    );
    check(
        &mut violations,
        reading.q_bomb_kcal > 0,
        "q_bomb_kcal",
        format!("bomb heating value {} kcal/kg must be positive", reading.q_bomb_kcal),
    );
    check(
        &mut violations,
        reading.fuel_equiv_k > 0.0,
        "fuel_equiv_k",
        format!("conversion coefficient {} must be positive", reading.fuel_equiv_k),
    );

    finish(violations, "coal-quality reading")
}

/// Validate a boiler-operation submission.
///
/// Enforces the ranges the combustion formulas depend on, so stored readings
/// are always computable.
pub fn validate_operation_input(input: &BoilerOperationInput) -> ApiResult<()> {
    let mut violations = Vec::new();

    check(
        &mut violations,
        input.boiler_number > 0,
        "boiler_number",
        format!("boiler number {} must be positive", input.boiler_number),
    );
    check(
        &mut violations,
        input.steam_rate_tph > 0,
        "steam_rate_tph",
        format!("hourly steam output {} t/h must be positive", input.steam_rate_tph),
    );
    check(
        &mut violations,
        (0.0..MAX_O2_PCT).contains(&input.o2_pct),
        "o2_pct",
        format!("residual oxygen {} % must lie in [0, 21)", input.o2_pct),
    );
    check(
        &mut violations,
        (0.0..=100.0).contains(&input.blowdown_pct),
        "blowdown_pct",
        format!("blowdown {} % must lie in [0, 100]", input.blowdown_pct),
    );
    check(
        &mut violations,
        (0.0..MAX_FLYASH_PCT).contains(&input.flyash_combustible_pct),
        "flyash_combustible_pct",
        format!(
            "fly-ash combustible content {} % must lie in [0, 100)",
            input.flyash_combustible_pct
        ),
    );

    finish(violations, "boiler-operation reading")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn coal() -> CoalQualityReading {
        CoalQualityReading {
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            moisture_pct: 12.0,
            ash_pct: 25.0,
            volatile_pct: 30.0,
            q_low_kcal: 4200,
            fuel_equiv_k: 0.9,
            q_bomb_kcal: 5100,
        }
    }

    fn operation() -> BoilerOperationInput {
        BoilerOperationInput {
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            boiler_number: 7,
            steam_rate_tph: 240,
            o2_pct: 4.0,
            flue_temp_c: 140,
            blowdown_pct: 1.5,
            cold_air_temp_c: 30,
            flyash_combustible_pct: 2.0,
        }
    }

    #[test]
    fn test_valid_readings_pass() {
        assert!(validate_coal_reading(&coal()).is_ok());
        assert!(validate_operation_input(&operation()).is_ok());
    }

    #[test]
    fn test_o2_at_atmospheric_rejected() {
        let mut input = operation();
        input.o2_pct = 21.0;
        let err = validate_operation_input(&input).unwrap_err();
        match err {
            ApiError::ValidationError { violations, .. } => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].field, "o2_pct");
            }
            _ => panic!("Expected ValidationError"),
        }
    }

    #[test]
    fn test_multiple_violations_collected() {
        let mut input = operation();
        input.steam_rate_tph = 0;
        input.flyash_combustible_pct = 100.0;
        let err = validate_operation_input(&input).unwrap_err();
        match err {
            ApiError::ValidationError { violations, .. } => {
                let fields: Vec<_> = violations.iter().map(|v| v.field.as_str()).collect();
                assert_eq!(fields, vec!["steam_rate_tph", "flyash_combustible_pct"]);
            }
            _ => panic!("Expected ValidationError"),
        }
    }

    #[test]
    fn test_nonpositive_heating_value_rejected() {
        let mut reading = coal();
        reading.q_low_kcal = 0;
        reading.fuel_equiv_k = 0.0;
        let err = validate_coal_reading(&reading).unwrap_err();
        match err {
            ApiError::ValidationError { violations, .. } => {
                let fields: Vec<_> = violations.iter().map(|v| v.field.as_str()).collect();
                assert_eq!(fields, vec!["q_low_kcal", "fuel_equiv_k"]);
            }
            _ => panic!("Expected ValidationError"),
        }
    }
}
