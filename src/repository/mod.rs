// ==========================================
// Boiler Combustion-Efficiency Tracker - repository layer
// ==========================================
// Repositories hold no business logic; they map rows and enforce the
// create-or-replace key discipline.
// ==========================================

pub mod boiler_repo;
pub mod coal_repo;
pub mod efficiency_repo;
pub mod error;

pub use boiler_repo::BoilerOperationRepository;
pub use coal_repo::CoalQualityRepository;
pub use efficiency_repo::EfficiencyResultRepository;
pub use error::{RepositoryError, RepositoryResult};

use chrono::NaiveDate;

/// Storage format for dates (TEXT columns).
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a date for a TEXT column.
pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a stored TEXT date back into a NaiveDate.
///
/// A malformed stored date is a corruption, not a business case; it surfaces
/// as a row-conversion error instead of a silent placeholder.
pub(crate) fn parse_stored_date(column: usize, raw: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(e))
    })
}
