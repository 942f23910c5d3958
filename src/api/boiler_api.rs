// ==========================================
// Boiler Combustion-Efficiency Tracker - boiler-operation API
// ==========================================
// Responsibility: record and look up daily boiler telemetry.
// A reading can only be recorded for a date that already has a coal-quality
// reading; the daily steam figure is derived here, never submitted.
// ==========================================

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::error::{ApiError, ApiResult};
use crate::api::validator;
use crate::domain::BoilerOperationReading;
use crate::repository::boiler_repo::BoilerOperationRepository;
use crate::repository::coal_repo::CoalQualityRepository;

// ==========================================
// BoilerOperationInput - submission shape
// ==========================================
/// Operator-submitted boiler telemetry for one day. The derived daily steam
/// figure and the coal-reading link are filled in by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoilerOperationInput {
    pub date: NaiveDate,
    pub boiler_number: i32,
    pub steam_rate_tph: i32,
    pub o2_pct: f64,
    pub flue_temp_c: i32,
    pub blowdown_pct: f64,
    pub cold_air_temp_c: i32,
    pub flyash_combustible_pct: f64,
}

// ==========================================
// BoilerApi
// ==========================================
pub struct BoilerApi {
    boiler_repo: Arc<BoilerOperationRepository>,
    coal_repo: Arc<CoalQualityRepository>,
}

impl BoilerApi {
    /// Create a new BoilerApi instance.
    pub fn new(
        boiler_repo: Arc<BoilerOperationRepository>,
        coal_repo: Arc<CoalQualityRepository>,
    ) -> Self {
        Self {
            boiler_repo,
            coal_repo,
        }
    }

    /// Record boiler telemetry for one (date, boiler) key (create-or-replace).
    ///
    /// # Returns
    /// - Ok(reading): the stored reading, with the derived daily steam figure
    /// - Err(ApiError::NotFound): no coal-quality reading exists for the date
    /// - Err(ApiError::ValidationError): a field is outside its physical range
    pub fn upsert_operation(
        &self,
        input: BoilerOperationInput,
    ) -> ApiResult<BoilerOperationReading> {
        validator::validate_operation_input(&input)?;

        // Telemetry is only meaningful against that day's fuel analysis.
        if self.coal_repo.find_by_date(input.date)?.is_none() {
            return Err(ApiError::NotFound(format!(
                "no coal-quality reading for {}; record the fuel analysis first",
                input.date
            )));
        }

        let reading = BoilerOperationReading {
            date: input.date,
            boiler_number: input.boiler_number,
            steam_rate_tph: input.steam_rate_tph,
            steam_daily_t: BoilerOperationReading::derive_daily_steam(input.steam_rate_tph),
            o2_pct: input.o2_pct,
            flue_temp_c: input.flue_temp_c,
            blowdown_pct: input.blowdown_pct,
            cold_air_temp_c: input.cold_air_temp_c,
            flyash_combustible_pct: input.flyash_combustible_pct,
            coal_date: input.date,
        };

        self.boiler_repo.upsert(&reading)?;
        info!(
            date = %reading.date,
            boiler = reading.boiler_number,
            steam_daily_t = reading.steam_daily_t,
            "boiler-operation reading stored"
        );

        Ok(reading)
    }

    /// Look up the telemetry for one (date, boiler) key.
    pub fn get_operation(
        &self,
        date: NaiveDate,
        boiler_number: i32,
    ) -> ApiResult<BoilerOperationReading> {
        self.boiler_repo
            .find_by_date_and_boiler(date, boiler_number)?
            .ok_or_else(|| {
                ApiError::NotFound(format!(
                    "no boiler-operation reading for {date}, boiler {boiler_number}"
                ))
            })
    }

    /// List all boiler readings recorded for one date.
    pub fn list_operations(&self, date: NaiveDate) -> ApiResult<Vec<BoilerOperationReading>> {
        Ok(self.boiler_repo.list_by_date(date)?)
    }
}
