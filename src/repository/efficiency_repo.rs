// ==========================================
// Boiler Combustion-Efficiency Tracker - efficiency-result repository
// ==========================================
// Key: at most one stored result per (date, boiler_number). Recomputation
// overwrites the previous record; results are never duplicated.
// ==========================================

use crate::domain::{EfficiencyFigures, EfficiencyResult};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::{format_date, parse_stored_date};
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Result as SqliteResult, Row};
use std::sync::{Arc, Mutex};

// ==========================================
// EfficiencyResultRepository
// ==========================================

/// Efficiency-result repository.
/// Responsibility: CRUD on the efficiency_result table.
pub struct EfficiencyResultRepository {
    conn: Arc<Mutex<Connection>>,
}

impl EfficiencyResultRepository {
    /// Create a repository over an existing shared connection.
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// Acquire the shared connection.
    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    fn map_row(row: &Row<'_>) -> SqliteResult<EfficiencyResult> {
        Ok(EfficiencyResult {
            date: parse_stored_date(0, &row.get::<_, String>(0)?)?,
            boiler_number: row.get(1)?,
            figures: EfficiencyFigures {
                q2_pct: row.get(2)?,
                q4_pct: row.get(3)?,
                q5_pct: row.get(4)?,
                efficiency_pct: row.get(5)?,
                fuel_rate: row.get(6)?,
                useful_heat: row.get(7)?,
                blowdown_heat: row.get(8)?,
                standard_fuel_t: row.get(9)?,
                natural_fuel_t: row.get(10)?,
            },
        })
    }

    const SELECT_COLUMNS: &'static str = r#"
        SELECT date, boiler_number, q2_pct, q4_pct, q5_pct, efficiency_pct,
               fuel_rate, useful_heat, blowdown_heat, standard_fuel_t,
               natural_fuel_t
        FROM efficiency_result
    "#;

    /// Store the result for its key, replacing any previous record.
    ///
    /// INSERT OR REPLACE keeps the at-most-one-per-key lifecycle without a
    /// separate delete step.
    pub fn replace(&self, result: &EfficiencyResult) -> RepositoryResult<()> {
        let conn = self.get_conn()?;

        conn.execute(
            r#"
            INSERT OR REPLACE INTO efficiency_result (
                date, boiler_number, q2_pct, q4_pct, q5_pct, efficiency_pct,
                fuel_rate, useful_heat, blowdown_heat, standard_fuel_t,
                natural_fuel_t
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            "#,
            params![
                format_date(result.date),
                result.boiler_number,
                result.figures.q2_pct,
                result.figures.q4_pct,
                result.figures.q5_pct,
                result.figures.efficiency_pct,
                result.figures.fuel_rate,
                result.figures.useful_heat,
                result.figures.blowdown_heat,
                result.figures.standard_fuel_t,
                result.figures.natural_fuel_t,
            ],
        )?;

        Ok(())
    }

    /// Look up the stored result for one (date, boiler_number) key.
    pub fn find_by_date_and_boiler(
        &self,
        date: NaiveDate,
        boiler_number: i32,
    ) -> RepositoryResult<Option<EfficiencyResult>> {
        let conn = self.get_conn()?;

        let sql = format!("{} WHERE date = ?1 AND boiler_number = ?2", Self::SELECT_COLUMNS);
        let mut stmt = conn.prepare(&sql)?;

        let result = stmt
            .query_row(params![format_date(date), boiler_number], Self::map_row)
            .optional()?;

        Ok(result)
    }

    /// List stored results ordered by date then boiler number.
    ///
    /// # Arguments
    /// - limit: maximum number of rows
    /// - offset: pagination offset
    pub fn list_all(&self, limit: i64, offset: i64) -> RepositoryResult<Vec<EfficiencyResult>> {
        let conn = self.get_conn()?;

        let sql = format!(
            "{} ORDER BY date, boiler_number LIMIT ?1 OFFSET ?2",
            Self::SELECT_COLUMNS
        );
        let mut stmt = conn.prepare(&sql)?;

        let results = stmt
            .query_map(params![limit, offset], Self::map_row)?
            .collect::<SqliteResult<Vec<EfficiencyResult>>>()?;

        Ok(results)
    }
}
