// ==========================================
// Boiler Combustion-Efficiency Tracker - coal-quality API
// ==========================================
// Responsibility: record and look up daily fuel analyses.
// One reading per date; re-submitting a date replaces the stored values.
// ==========================================

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use crate::api::error::{ApiError, ApiResult};
use crate::api::validator;
use crate::domain::CoalQualityReading;
use crate::repository::coal_repo::CoalQualityRepository;

// ==========================================
// CoalApi
// ==========================================
pub struct CoalApi {
    coal_repo: Arc<CoalQualityRepository>,
}

impl CoalApi {
    /// Create a new CoalApi instance.
    pub fn new(coal_repo: Arc<CoalQualityRepository>) -> Self {
        Self { coal_repo }
    }

    /// Record the fuel analysis for a date (create-or-replace).
    ///
    /// # Returns
    /// - Ok(reading): the stored reading
    /// - Err(ApiError::ValidationError): a field is outside its physical range
    pub fn upsert_reading(&self, reading: CoalQualityReading) -> ApiResult<CoalQualityReading> {
        validator::validate_coal_reading(&reading)?;

        self.coal_repo.upsert(&reading)?;
        info!(date = %reading.date, q_low_kcal = reading.q_low_kcal, "coal-quality reading stored");

        Ok(reading)
    }

    /// Look up the fuel analysis for one date.
    ///
    /// # Returns
    /// - Err(ApiError::NotFound): no reading recorded for that date
    pub fn get_reading(&self, date: NaiveDate) -> ApiResult<CoalQualityReading> {
        self.coal_repo
            .find_by_date(date)?
            .ok_or_else(|| ApiError::NotFound(format!("no coal-quality reading for {date}")))
    }

    /// List recorded fuel analyses ordered by date.
    pub fn list_readings(&self, limit: i64, offset: i64) -> ApiResult<Vec<CoalQualityReading>> {
        Ok(self.coal_repo.list_all(limit, offset)?)
    }
}
