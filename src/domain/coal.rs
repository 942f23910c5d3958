// ==========================================
// Boiler Combustion-Efficiency Tracker - coal-quality domain model
// ==========================================
// One laboratory reading per calendar date. Values come straight from the
// daily fuel analysis sheet.
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// CoalQualityReading - daily fuel analysis
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoalQualityReading {
    pub date: NaiveDate,     // sampling date (primary key)

    // ===== Proximate analysis (working mass) =====
    pub moisture_pct: f64,   // moisture (%)
    pub ash_pct: f64,        // ash (%)
    pub volatile_pct: f64,   // volatile-matter yield (%)

    // ===== Calorific values =====
    pub q_low_kcal: i32,     // lower heating value (kcal/kg)
    pub q_bomb_kcal: i32,    // bomb-calorimeter heating value (kcal/kg)

    // ===== Fuel accounting =====
    pub fuel_equiv_k: f64,   // conversion coefficient to standard fuel
}
