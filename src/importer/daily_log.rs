// ==========================================
// Boiler Combustion-Efficiency Tracker - daily-log CSV importer
// ==========================================
// Responsibility: bulk intake of daily readings from plant log exports.
// Rows go through the same API upserts as manual entry, so validation and
// the coal-first ordering rule apply unchanged. A bad row is rejected and
// reported; it never aborts the rest of the file.
// ==========================================
// Coal file header:
//   date,moisture_pct,ash_pct,volatile_pct,q_low_kcal,fuel_equiv_k,q_bomb_kcal
// Operations file header:
//   date,boiler_number,steam_rate_tph,o2_pct,flue_temp_c,blowdown_pct,cold_air_temp_c,flyash_combustible_pct
// ==========================================

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::api::boiler_api::{BoilerApi, BoilerOperationInput};
use crate::api::coal_api::CoalApi;
use crate::api::error::{ApiError, ApiResult};
use crate::domain::CoalQualityReading;

// ==========================================
// Import report
// ==========================================

/// One rejected CSV row.
#[derive(Debug, Clone, Serialize)]
pub struct RowRejection {
    /// 1-based data-row number (header not counted)
    pub row: usize,
    pub reason: String,
}

/// Outcome of one file import.
#[derive(Debug, Clone, Serialize)]
pub struct ImportReport {
    pub imported: usize,
    pub rejected: Vec<RowRejection>,
}

// ==========================================
// DailyLogImporter
// ==========================================
pub struct DailyLogImporter {
    coal_api: Arc<CoalApi>,
    boiler_api: Arc<BoilerApi>,
}

impl DailyLogImporter {
    /// Create a new DailyLogImporter instance.
    pub fn new(coal_api: Arc<CoalApi>, boiler_api: Arc<BoilerApi>) -> Self {
        Self {
            coal_api,
            boiler_api,
        }
    }

    /// Import coal-quality readings from a CSV file, one row per date.
    pub fn import_coal_csv(&self, path: &Path) -> ApiResult<ImportReport> {
        let mut reader = csv::Reader::from_path(path)
            .map_err(|e| ApiError::ImportError(format!("{}: {e}", path.display())))?;

        let mut report = ImportReport {
            imported: 0,
            rejected: Vec::new(),
        };

        for (index, record) in reader.deserialize::<CoalQualityReading>().enumerate() {
            let row = index + 1;
            let outcome = record
                .map_err(|e| ApiError::ImportError(e.to_string()))
                .and_then(|reading| self.coal_api.upsert_reading(reading));

            match outcome {
                Ok(_) => report.imported += 1,
                Err(e) => {
                    warn!(row, error = %e, "coal row rejected");
                    report.rejected.push(RowRejection {
                        row,
                        reason: e.to_string(),
                    });
                }
            }
        }

        info!(
            file = %path.display(),
            imported = report.imported,
            rejected = report.rejected.len(),
            "coal-quality import finished"
        );
        Ok(report)
    }

    /// Import boiler-operation readings from a CSV file, one row per
    /// (date, boiler number).
    ///
    /// Rows for a date with no coal-quality reading are rejected, matching
    /// manual entry.
    pub fn import_operations_csv(&self, path: &Path) -> ApiResult<ImportReport> {
        let mut reader = csv::Reader::from_path(path)
            .map_err(|e| ApiError::ImportError(format!("{}: {e}", path.display())))?;

        let mut report = ImportReport {
            imported: 0,
            rejected: Vec::new(),
        };

        for (index, record) in reader.deserialize::<BoilerOperationInput>().enumerate() {
            let row = index + 1;
            let outcome = record
                .map_err(|e| ApiError::ImportError(e.to_string()))
                .and_then(|input| self.boiler_api.upsert_operation(input));

            match outcome {
                Ok(_) => report.imported += 1,
                Err(e) => {
                    warn!(row, error = %e, "operation row rejected");
                    report.rejected.push(RowRejection {
                        row,
                        reason: e.to_string(),
                    });
                }
            }
        }

        info!(
            file = %path.display(),
            imported = report.imported,
            rejected = report.rejected.len(),
            "boiler-operation import finished"
        );
        Ok(report)
    }
}
