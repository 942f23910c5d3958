// ==========================================
// Boiler Combustion-Efficiency Tracker - boiler-operation domain model
// ==========================================
// One shift log per (date, boiler number). The daily steam figure is derived
// from the hourly output at record creation, never entered by hand.
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// BoilerOperationReading - daily boiler telemetry
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoilerOperationReading {
    pub date: NaiveDate,               // log date (key, together with boiler_number)
    pub boiler_number: i32,            // plant boiler identifier

    // ===== Steam output =====
    pub steam_rate_tph: i32,           // hourly steam output (t/h)
    pub steam_daily_t: f64,            // daily steam figure, derived as steam_rate_tph / 24

    // ===== Flue-gas measurements =====
    pub o2_pct: f64,                   // residual oxygen in flue gas (%)
    pub flue_temp_c: i32,              // flue-gas temperature (degC)
    pub cold_air_temp_c: i32,          // cold-air temperature (degC)
    pub flyash_combustible_pct: f64,   // combustible content in fly-ash (%)

    // ===== Water side =====
    pub blowdown_pct: f64,             // blowdown share (%)

    // ===== Fuel link =====
    pub coal_date: NaiveDate,          // coal-quality reading this log was recorded against
}

impl BoilerOperationReading {
    /// Daily steam figure derived from the hourly output.
    pub fn derive_daily_steam(steam_rate_tph: i32) -> f64 {
        f64::from(steam_rate_tph) / 24.0
    }
}
