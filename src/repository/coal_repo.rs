// ==========================================
// Boiler Combustion-Efficiency Tracker - coal-quality repository
// ==========================================
// Key: one reading per calendar date. Re-submitting a date replaces it.
// ==========================================

use crate::domain::CoalQualityReading;
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::{format_date, parse_stored_date};
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Result as SqliteResult, Row};
use std::sync::{Arc, Mutex};

// ==========================================
// CoalQualityRepository
// ==========================================

/// Coal-quality reading repository.
/// Responsibility: CRUD on the coal_quality table.
pub struct CoalQualityRepository {
    conn: Arc<Mutex<Connection>>,
}

impl CoalQualityRepository {
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

    fn map_row(row: &Row<'_>) -> SqliteResult<CoalQualityReading> {
        Ok(CoalQualityReading {
            date: parse_stored_date(0, &row.get::<_, String>(0)?)?,
            moisture_pct: row.get(1)?,
            ash_pct: row.get(2)?,
            volatile_pct: row.get(3)?,
            q_low_kcal: row.get(4)?,
            fuel_equiv_k: row.get(5)?,
            q_bomb_kcal: row.get(6)?,
        })
    }

    /// Insert or replace the reading for its date.
    ///
    /// Uses ON CONFLICT DO UPDATE so dependent boiler_operation rows keep a
    /// valid parent while the values change underneath them.
    ///
    /// # Arguments
    /// - reading: the daily fuel analysis
    pub fn upsert(&self, reading: &CoalQualityReading) -> RepositoryResult<()> {
        let conn = self.get_conn()?;

        conn.execute(
            r#"
            INSERT INTO coal_quality (
                date, moisture_pct, ash_pct, volatile_pct,
                q_low_kcal, fuel_equiv_k, q_bomb_kcal
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            ON CONFLICT(date) DO UPDATE SET
                moisture_pct = excluded.moisture_pct,
                ash_pct = excluded.ash_pct,
                volatile_pct = excluded.volatile_pct,
                q_low_kcal = excluded.q_low_kcal,
                fuel_equiv_k = excluded.fuel_equiv_k,
                q_bomb_kcal = excluded.q_bomb_kcal
            "#,
            params![
                format_date(reading.date),
                reading.moisture_pct,
                reading.ash_pct,
                reading.volatile_pct,
                reading.q_low_kcal,
                reading.fuel_equiv_k,
                reading.q_bomb_kcal,
            ],
        )?;

        Ok(())
    }

    /// Look up the reading for one date.
    ///
    /// # Returns
    /// - Ok(Some(reading)): found
    /// - Ok(None): no reading for that date
    pub fn find_by_date(&self, date: NaiveDate) -> RepositoryResult<Option<CoalQualityReading>> {
        let conn = self.get_conn()?;

        let mut stmt = conn.prepare(
            r#"
            SELECT date, moisture_pct, ash_pct, volatile_pct,
                   q_low_kcal, fuel_equiv_k, q_bomb_kcal
            FROM coal_quality
            WHERE date = ?1
            "#,
        )?;

        let reading = stmt
            .query_row(params![format_date(date)], Self::map_row)
            .optional()?;

        Ok(reading)
    }

    /// List readings ordered by date.
    ///
    /// # Arguments
    /// - limit: maximum number of rows
    /// - offset: pagination offset
    pub fn list_all(&self, limit: i64, offset: i64) -> RepositoryResult<Vec<CoalQualityReading>> {
        let conn = self.get_conn()?;

        let mut stmt = conn.prepare(
            r#"
            SELECT date, moisture_pct, ash_pct, volatile_pct,
                   q_low_kcal, fuel_equiv_k, q_bomb_kcal
            FROM coal_quality
            ORDER BY date
            LIMIT ?1 OFFSET ?2
            "#,
        )?;

        let readings = stmt
            .query_map(params![limit, offset], Self::map_row)?
            .collect::<SqliteResult<Vec<CoalQualityReading>>>()?;

        Ok(readings)
    }
}
