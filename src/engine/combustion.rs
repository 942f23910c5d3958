// ==========================================
// Boiler Combustion-Efficiency Tracker - combustion-efficiency engine
// ==========================================
// One fixed heat-balance pass per invocation: two validated readings in, one
// set of efficiency figures out. No I/O, no state beyond the capacity table.
// ==========================================
// Input: BoilerOperationReading + CoalQualityReading (same date)
// Output: EfficiencyFigures (all fields rounded to 2 decimal places)
// ==========================================

use crate::config::BoilerCapacityTable;
use crate::domain::{BoilerOperationReading, CoalQualityReading, EfficiencyFigures};
use thiserror::Error;
use tracing::instrument;

// ==========================================
// Formula constants
// ==========================================

/// Oxygen share of atmospheric air (%).
const ATMOSPHERIC_O2_PCT: f64 = 21.0;
/// Flue-gas loss divisor (temperature differential scale).
const FLUE_GAS_DIVISOR: f64 = 2085.0;
/// Excess-air weighting in the flue-gas loss.
const EXCESS_AIR_FACTOR: f64 = 0.7;
/// Constant air-ingress term in the flue-gas loss.
const AIR_INGRESS_TERM: f64 = 0.13;
/// Weighting of unburnt combustibles in the mechanical loss.
const UNBURNT_FACTOR: f64 = 0.9;
/// Heat of the combustible residue carried in ash (kcal/kg).
const ASH_COMBUSTIBLE_HEAT_KCAL: f64 = 7800.0;
/// Ambient-loss factor applied to nameplate capacity.
const RADIATION_FACTOR: f64 = 0.77;
/// Base of the specific fuel-consumption factor.
const FUEL_RATE_BASE: f64 = 143.0;
/// Heat content of generated steam (per tonne).
const STEAM_HEAT_FACTOR: f64 = 0.79;
/// Heat returned with feedwater (per tonne).
const FEEDWATER_HEAT_FACTOR: f64 = 0.104;
/// Heat share carried away by blowdown water.
const BLOWDOWN_HEAT_FACTOR: f64 = 0.065;

// ==========================================
// Error type
// ==========================================

/// Combustion-engine error.
///
/// Every failure names the input or output field it is attributable to, so
/// callers can map it to an operator-facing message instead of surfacing a
/// bare arithmetic fault.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CombustionError {
    #[error("invalid input (field={field}): {message}")]
    InvalidInput { field: &'static str, message: String },

    #[error("computed value is not finite (field={field})")]
    NonFinite { field: &'static str },
}

/// Result type alias
pub type CombustionResult<T> = Result<T, CombustionError>;

/// Round to 2 decimal places, half away from zero (`f64::round` semantics).
///
/// Applied independently to every output field; intermediate chaining always
/// uses unrounded values.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Reject non-finite values before they reach a stored record.
fn finite(field: &'static str, value: f64) -> CombustionResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CombustionError::NonFinite { field })
    }
}

// ==========================================
// CombustionCalculator - heat-balance engine
// ==========================================

/// Combustion-efficiency calculator.
///
/// Deterministic: identical inputs produce bit-identical figures. The only
/// configuration is the nameplate-capacity table used by the ambient-loss
/// term.
pub struct CombustionCalculator {
    capacities: BoilerCapacityTable,
}

impl CombustionCalculator {
    /// Create a calculator with an explicit capacity table.
    pub fn new(capacities: BoilerCapacityTable) -> Self {
        Self { capacities }
    }

    /// Create a calculator with the shipped plant capacity defaults.
    pub fn with_defaults() -> Self {
        Self::new(BoilerCapacityTable::default())
    }

    /// Compute the efficiency figures for one boiler-day.
    ///
    /// # Preconditions (guarded, surfaced as named errors)
    /// - o2_pct < 21 (flue-gas loss divides by 21 - o2)
    /// - flyash_combustible_pct < 100 (mechanical loss divides by 100 - g)
    /// - steam_daily_t > 0 (ambient loss divides by daily output)
    /// - q_low_kcal > 0, fuel_equiv_k != 0 (fuel-side divisions)
    /// - resulting efficiency != 0 (fuel rate divides by it)
    ///
    /// Efficiency outside [0, 100] is passed through unclamped; flagging an
    /// implausible value is the caller's concern.
    #[instrument(
        skip(self, operation, coal),
        fields(date = %operation.date, boiler = operation.boiler_number)
    )]
    pub fn compute(
        &self,
        operation: &BoilerOperationReading,
        coal: &CoalQualityReading,
    ) -> CombustionResult<EfficiencyFigures> {
        // ===== Precondition guards =====
        if operation.o2_pct >= ATMOSPHERIC_O2_PCT {
            return Err(CombustionError::InvalidInput {
                field: "o2_pct",
                message: format!(
                    "residual oxygen {} % must stay below the atmospheric {} %",
                    operation.o2_pct, ATMOSPHERIC_O2_PCT
                ),
            });
        }
        if operation.flyash_combustible_pct >= 100.0 {
            return Err(CombustionError::InvalidInput {
                field: "flyash_combustible_pct",
                message: format!(
                    "combustible content {} % must stay below 100 %",
                    operation.flyash_combustible_pct
                ),
            });
        }
        if operation.steam_daily_t <= 0.0 {
            return Err(CombustionError::InvalidInput {
                field: "steam_daily_t",
                message: format!(
                    "daily steam output {} t must be positive",
                    operation.steam_daily_t
                ),
            });
        }
        if coal.q_low_kcal <= 0 {
            return Err(CombustionError::InvalidInput {
                field: "q_low_kcal",
                message: format!(
                    "lower heating value {} kcal/kg must be positive",
                    coal.q_low_kcal
                ),
            });
        }
        if coal.fuel_equiv_k == 0.0 {
            return Err(CombustionError::InvalidInput {
                field: "fuel_equiv_k",
                message: "standard-fuel conversion coefficient must be nonzero".to_string(),
            });
        }

        let size_t = self.capacities.capacity_for(operation.boiler_number);

        // ===== Heat losses =====

        // q2: flue-gas exhaust loss over the stack/cold-air temperature
        // differential, weighted by excess air.
        let delta_t = f64::from(operation.flue_temp_c - operation.cold_air_temp_c);
        let q2 = delta_t / FLUE_GAS_DIVISOR
            * (EXCESS_AIR_FACTOR * ATMOSPHERIC_O2_PCT / (ATMOSPHERIC_O2_PCT - operation.o2_pct)
                + AIR_INGRESS_TERM)
            * 100.0;

        // q4: unburnt combustibles leaving with the fly-ash, driven by the
        // coal ash content.
        let q4 = UNBURNT_FACTOR
            * (operation.flyash_combustible_pct / (100.0 - operation.flyash_combustible_pct))
            * (ASH_COMBUSTIBLE_HEAT_KCAL * coal.ash_pct)
            / f64::from(coal.q_low_kcal);

        // q5: ambient/radiation loss, nameplate size over daily output.
        let q5 = RADIATION_FACTOR * size_t / operation.steam_daily_t;

        // ===== Efficiency and fuel consumption =====

        let n = 100.0 - (q2 + q4 + q5);
        if n == 0.0 {
            return Err(CombustionError::InvalidInput {
                field: "efficiency_pct",
                message: "losses sum to exactly 100 %, fuel rate is undefined".to_string(),
            });
        }

        let b = FUEL_RATE_BASE / n * 100.0;
        let qist =
            f64::from(operation.steam_rate_tph) * (STEAM_HEAT_FACTOR - FEEDWATER_HEAT_FACTOR);
        let qpr = BLOWDOWN_HEAT_FACTOR
            * (operation.blowdown_pct * f64::from(operation.steam_rate_tph))
            / 100.0;
        let bk = b * (qist + qpr) / 1000.0;
        let bnat = bk / coal.fuel_equiv_k;

        Ok(EfficiencyFigures {
            q2_pct: round2(finite("q2_pct", q2)?),
            q4_pct: round2(finite("q4_pct", q4)?),
            q5_pct: round2(finite("q5_pct", q5)?),
            efficiency_pct: round2(finite("efficiency_pct", n)?),
            fuel_rate: round2(finite("fuel_rate", b)?),
            useful_heat: round2(finite("useful_heat", qist)?),
            blowdown_heat: round2(finite("blowdown_heat", qpr)?),
            standard_fuel_t: round2(finite("standard_fuel_t", bk)?),
            natural_fuel_t: round2(finite("natural_fuel_t", bnat)?),
        })
    }
}
