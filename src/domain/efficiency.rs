// ==========================================
// Boiler Combustion-Efficiency Tracker - efficiency-result domain model
// ==========================================
// Output of the combustion calculation. Stored per (date, boiler number);
// recomputing replaces the stored record.
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// EfficiencyFigures - computed values
// ==========================================
// All fields are percentages or tonnage figures rounded to 2 decimal places.
// Loss numbering follows the standard heat-balance convention (q2 flue gas,
// q4 mechanical underburn, q5 ambient).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EfficiencyFigures {
    // ===== Heat losses =====
    pub q2_pct: f64,          // flue-gas heat loss (%)
    pub q4_pct: f64,          // mechanical incomplete-combustion loss (%)
    pub q5_pct: f64,          // ambient/radiation heat loss (%)

    // ===== Efficiency =====
    pub efficiency_pct: f64,  // net boiler efficiency (%)

    // ===== Fuel consumption =====
    pub fuel_rate: f64,       // specific fuel-consumption factor
    pub useful_heat: f64,     // useful heat in generated steam
    pub blowdown_heat: f64,   // heat carried away by blowdown
    pub standard_fuel_t: f64, // standard-fuel-equivalent consumption
    pub natural_fuel_t: f64,  // as-fired natural fuel consumption
}

// ==========================================
// EfficiencyResult - keyed, persisted record
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EfficiencyResult {
    pub date: NaiveDate,
    pub boiler_number: i32,

    #[serde(flatten)]
    pub figures: EfficiencyFigures,
}

impl EfficiencyResult {
    /// Attach the storage key to a set of computed figures.
    pub fn new(date: NaiveDate, boiler_number: i32, figures: EfficiencyFigures) -> Self {
        Self {
            date,
            boiler_number,
            figures,
        }
    }
}
