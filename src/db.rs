// ==========================================
// Boiler Combustion-Efficiency Tracker - SQLite infrastructure
// ==========================================
// Goals:
// - one place for Connection::open so every connection gets the same PRAGMAs
// - unified busy_timeout to reduce sporadic busy errors on concurrent writes
// - schema creation for the measurement and result tables
// ==========================================

use rusqlite::Connection;
use std::time::Duration;

/// Default busy_timeout (milliseconds)
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Apply the unified PRAGMAs to a SQLite connection.
///
/// foreign_keys and busy_timeout are per-connection settings and must be
/// applied to every connection the process opens.
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// Open a SQLite connection with the unified configuration applied.
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// Create all tables if they do not exist yet.
///
/// Keys:
/// - coal_quality: one reading per calendar date
/// - boiler_operation: one reading per (date, boiler_number)
/// - efficiency_result: at most one stored result per (date, boiler_number)
/// - config_kv: key/value store for capacity overrides
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS coal_quality (
            date TEXT PRIMARY KEY,
            moisture_pct REAL NOT NULL,
            ash_pct REAL NOT NULL,
            volatile_pct REAL NOT NULL,
            q_low_kcal INTEGER NOT NULL,
            fuel_equiv_k REAL NOT NULL,
            q_bomb_kcal INTEGER NOT NULL
        )
        "#,
        [],
    )?;

    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS boiler_operation (
            date TEXT NOT NULL,
            boiler_number INTEGER NOT NULL,
            steam_rate_tph INTEGER NOT NULL,
            steam_daily_t REAL NOT NULL,
            o2_pct REAL NOT NULL,
            flue_temp_c INTEGER NOT NULL,
            blowdown_pct REAL NOT NULL,
            cold_air_temp_c INTEGER NOT NULL,
            flyash_combustible_pct REAL NOT NULL,
            coal_date TEXT NOT NULL REFERENCES coal_quality(date),
            PRIMARY KEY (date, boiler_number)
        )
        "#,
        [],
    )?;

    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS efficiency_result (
            date TEXT NOT NULL,
            boiler_number INTEGER NOT NULL,
            q2_pct REAL NOT NULL,
            q4_pct REAL NOT NULL,
            q5_pct REAL NOT NULL,
            efficiency_pct REAL NOT NULL,
            fuel_rate REAL NOT NULL,
            useful_heat REAL NOT NULL,
            blowdown_heat REAL NOT NULL,
            standard_fuel_t REAL NOT NULL,
            natural_fuel_t REAL NOT NULL,
            PRIMARY KEY (date, boiler_number),
            FOREIGN KEY (date, boiler_number)
                REFERENCES boiler_operation(date, boiler_number)
        )
        "#,
        [],
    )?;

    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS config_kv (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        )
        "#,
        [],
    )?;

    Ok(())
}
