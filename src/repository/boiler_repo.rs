// ==========================================
// Boiler Combustion-Efficiency Tracker - boiler-operation repository
// ==========================================
// Key: one reading per (date, boiler_number). Re-submitting the pair
// replaces it.
// ==========================================

use crate::domain::BoilerOperationReading;
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::{format_date, parse_stored_date};
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Result as SqliteResult, Row};
use std::sync::{Arc, Mutex};

// ==========================================
// BoilerOperationRepository
// ==========================================

/// Boiler-operation reading repository.
/// Responsibility: CRUD on the boiler_operation table.
pub struct BoilerOperationRepository {
    conn: Arc<Mutex<Connection>>,
}

impl BoilerOperationRepository {
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

    fn map_row(row: &Row<'_>) -> SqliteResult<BoilerOperationReading> {
        Ok(BoilerOperationReading {
            date: parse_stored_date(0, &row.get::<_, String>(0)?)?,
            boiler_number: row.get(1)?,
            steam_rate_tph: row.get(2)?,
            steam_daily_t: row.get(3)?,
            o2_pct: row.get(4)?,
            flue_temp_c: row.get(5)?,
            blowdown_pct: row.get(6)?,
            cold_air_temp_c: row.get(7)?,
            flyash_combustible_pct: row.get(8)?,
            coal_date: parse_stored_date(9, &row.get::<_, String>(9)?)?,
        })
    }

    const SELECT_COLUMNS: &'static str = r#"
        SELECT date, boiler_number, steam_rate_tph, steam_daily_t, o2_pct,
               flue_temp_c, blowdown_pct, cold_air_temp_c,
               flyash_combustible_pct, coal_date
        FROM boiler_operation
    "#;

    /// Insert or replace the reading for its (date, boiler_number) key.
    ///
    /// Uses ON CONFLICT DO UPDATE so a stored efficiency_result row keeps a
    /// valid parent while the telemetry changes underneath it.
    pub fn upsert(&self, reading: &BoilerOperationReading) -> RepositoryResult<()> {
        let conn = self.get_conn()?;

        conn.execute(
            r#"
            INSERT INTO boiler_operation (
                date, boiler_number, steam_rate_tph, steam_daily_t, o2_pct,
                flue_temp_c, blowdown_pct, cold_air_temp_c,
                flyash_combustible_pct, coal_date
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            ON CONFLICT(date, boiler_number) DO UPDATE SET
                steam_rate_tph = excluded.steam_rate_tph,
                steam_daily_t = excluded.steam_daily_t,
                o2_pct = excluded.o2_pct,
                flue_temp_c = excluded.flue_temp_c,
                blowdown_pct = excluded.blowdown_pct,
                cold_air_temp_c = excluded.cold_air_temp_c,
                flyash_combustible_pct = excluded.flyash_combustible_pct,
                coal_date = excluded.coal_date
            "#,
            params![
                format_date(reading.date),
                reading.boiler_number,
                reading.steam_rate_tph,
                reading.steam_daily_t,
                reading.o2_pct,
                reading.flue_temp_c,
                reading.blowdown_pct,
                reading.cold_air_temp_c,
                reading.flyash_combustible_pct,
                format_date(reading.coal_date),
            ],
        )?;

        Ok(())
    }

    /// Look up the reading for one (date, boiler_number) key.
    pub fn find_by_date_and_boiler(
        &self,
        date: NaiveDate,
        boiler_number: i32,
    ) -> RepositoryResult<Option<BoilerOperationReading>> {
        let conn = self.get_conn()?;

        let sql = format!("{} WHERE date = ?1 AND boiler_number = ?2", Self::SELECT_COLUMNS);
        let mut stmt = conn.prepare(&sql)?;

        let reading = stmt
            .query_row(params![format_date(date), boiler_number], Self::map_row)
            .optional()?;

        Ok(reading)
    }

    /// List all boiler readings for one date, ordered by boiler number.
    pub fn list_by_date(&self, date: NaiveDate) -> RepositoryResult<Vec<BoilerOperationReading>> {
        let conn = self.get_conn()?;

        let sql = format!("{} WHERE date = ?1 ORDER BY boiler_number", Self::SELECT_COLUMNS);
        let mut stmt = conn.prepare(&sql)?;

        let readings = stmt
            .query_map(params![format_date(date)], Self::map_row)?
            .collect::<SqliteResult<Vec<BoilerOperationReading>>>()?;

        Ok(readings)
    }
}
