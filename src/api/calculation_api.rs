// ==========================================
// Boiler Combustion-Efficiency Tracker - calculation API
// ==========================================
// Responsibility: run the combustion engine for a (date, boiler) key and
// manage the stored result. Recalculation replaces the previous record;
// there is never more than one result per key.
// ==========================================

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use crate::api::error::{ApiError, ApiResult};
use crate::domain::EfficiencyResult;
use crate::engine::CombustionCalculator;
use crate::repository::boiler_repo::BoilerOperationRepository;
use crate::repository::coal_repo::CoalQualityRepository;
use crate::repository::efficiency_repo::EfficiencyResultRepository;

// ==========================================
// CalculationApi
// ==========================================
pub struct CalculationApi {
    boiler_repo: Arc<BoilerOperationRepository>,
    coal_repo: Arc<CoalQualityRepository>,
    result_repo: Arc<EfficiencyResultRepository>,
    calculator: Arc<CombustionCalculator>,
}

impl CalculationApi {
    /// Create a new CalculationApi instance.
    pub fn new(
        boiler_repo: Arc<BoilerOperationRepository>,
        coal_repo: Arc<CoalQualityRepository>,
        result_repo: Arc<EfficiencyResultRepository>,
        calculator: Arc<CombustionCalculator>,
    ) -> Self {
        Self {
            boiler_repo,
            coal_repo,
            result_repo,
            calculator,
        }
    }

    /// Compute and store the efficiency figures for one (date, boiler) key.
    ///
    /// Loads the day's telemetry and the fuel analysis it was recorded
    /// against, runs the heat-balance pass, and overwrites any previously
    /// stored result for the key.
    ///
    /// # Returns
    /// - Ok(result): the stored result
    /// - Err(ApiError::NotFound): telemetry or fuel analysis missing
    /// - Err(ApiError::InvalidInput): a reading makes the formulas undefined
    pub fn calculate(&self, date: NaiveDate, boiler_number: i32) -> ApiResult<EfficiencyResult> {
        let operation = self
            .boiler_repo
            .find_by_date_and_boiler(date, boiler_number)?
            .ok_or_else(|| {
                ApiError::NotFound(format!(
                    "no boiler-operation reading for {date}, boiler {boiler_number}"
                ))
            })?;

        let coal = self
            .coal_repo
            .find_by_date(operation.coal_date)?
            .ok_or_else(|| {
                ApiError::NotFound(format!(
                    "no coal-quality reading for {}",
                    operation.coal_date
                ))
            })?;

        let figures = self.calculator.compute(&operation, &coal)?;

        let result = EfficiencyResult::new(date, boiler_number, figures);
        self.result_repo.replace(&result)?;
        info!(
            date = %date,
            boiler = boiler_number,
            efficiency_pct = figures.efficiency_pct,
            "efficiency result stored"
        );

        Ok(result)
    }

    /// Look up the stored result for one (date, boiler) key.
    pub fn get_result(&self, date: NaiveDate, boiler_number: i32) -> ApiResult<EfficiencyResult> {
        self.result_repo
            .find_by_date_and_boiler(date, boiler_number)?
            .ok_or_else(|| {
                ApiError::NotFound(format!(
                    "no efficiency result for {date}, boiler {boiler_number}"
                ))
            })
    }

    /// List stored results ordered by date then boiler number.
    pub fn list_results(&self, limit: i64, offset: i64) -> ApiResult<Vec<EfficiencyResult>> {
        Ok(self.result_repo.list_all(limit, offset)?)
    }
}
