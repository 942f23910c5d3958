// ==========================================
// Boiler Combustion-Efficiency Tracker - configuration manager
// ==========================================
// Storage: config_kv table (key -> value)
// Keys:
//   boiler_capacity/<n>      per-boiler nameplate capacity override (tonnes)
//   boiler_capacity_default  capacity for boilers with no explicit entry
// Unset keys fall back to the shipped plant defaults.
// ==========================================

use crate::config::capacity::BoilerCapacityTable;
use anyhow::{anyhow, Context};
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex};

/// Key prefix for per-boiler capacity overrides.
const CAPACITY_KEY_PREFIX: &str = "boiler_capacity/";
/// Key for the fallback capacity.
const CAPACITY_DEFAULT_KEY: &str = "boiler_capacity_default";

// ==========================================
// ConfigManager
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    /// Create a ConfigManager over an existing shared connection.
    ///
    /// The unified PRAGMAs are re-applied to the connection (idempotent) so
    /// behavior does not depend on who opened it.
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> anyhow::Result<Self> {
        {
            let guard = conn
                .lock()
                .map_err(|e| anyhow!("config lock poisoned: {e}"))?;
            crate::db::configure_sqlite_connection(&guard)?;
        }
        Ok(Self { conn })
    }

    /// Read one configuration value.
    pub fn get_value(&self, key: &str) -> anyhow::Result<Option<String>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| anyhow!("config lock poisoned: {e}"))?;

        let result = conn.query_row(
            "SELECT value FROM config_kv WHERE key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Write one configuration value (create-or-replace).
    pub fn set_value(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| anyhow!("config lock poisoned: {e}"))?;

        conn.execute(
            r#"
            INSERT INTO config_kv (key, value, updated_at)
            VALUES (?1, ?2, datetime('now'))
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
            params![key, value],
        )?;
        Ok(())
    }

    /// Override the nameplate capacity for one boiler (tonnes).
    pub fn set_boiler_capacity(&self, boiler_number: i32, capacity_t: f64) -> anyhow::Result<()> {
        self.set_value(
            &format!("{CAPACITY_KEY_PREFIX}{boiler_number}"),
            &capacity_t.to_string(),
        )
    }

    /// Override the fallback capacity for unlisted boilers (tonnes).
    pub fn set_default_capacity(&self, capacity_t: f64) -> anyhow::Result<()> {
        self.set_value(CAPACITY_DEFAULT_KEY, &capacity_t.to_string())
    }

    /// Build the capacity table: shipped defaults + stored overrides.
    pub fn load_capacity_table(&self) -> anyhow::Result<BoilerCapacityTable> {
        let mut table = BoilerCapacityTable::default();

        if let Some(raw) = self.get_value(CAPACITY_DEFAULT_KEY)? {
            let capacity: f64 = raw
                .parse()
                .with_context(|| format!("bad {CAPACITY_DEFAULT_KEY} value: {raw}"))?;
            table.set_default_capacity(capacity);
        }

        let conn = self
            .conn
            .lock()
            .map_err(|e| anyhow!("config lock poisoned: {e}"))?;
        let mut stmt = conn.prepare(
            "SELECT key, value FROM config_kv WHERE key LIKE ?1 ORDER BY key",
        )?;
        let rows = stmt.query_map(params![format!("{CAPACITY_KEY_PREFIX}%")], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        for row in rows {
            let (key, value) = row?;
            let number: i32 = key[CAPACITY_KEY_PREFIX.len()..]
                .parse()
                .with_context(|| format!("bad boiler number in config key: {key}"))?;
            let capacity: f64 = value
                .parse()
                .with_context(|| format!("bad capacity value for {key}: {value}"))?;
            table.set_capacity(number, capacity);
        }

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_schema;

    fn manager() -> ConfigManager {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        ConfigManager::from_connection(Arc::new(Mutex::new(conn))).unwrap()
    }

    #[test]
    fn test_set_and_get_value() {
        let mgr = manager();
        assert_eq!(mgr.get_value("boiler_capacity_default").unwrap(), None);

        mgr.set_value("boiler_capacity_default", "80").unwrap();
        assert_eq!(
            mgr.get_value("boiler_capacity_default").unwrap(),
            Some("80".to_string())
        );

        // Create-or-replace: the second write wins.
        mgr.set_value("boiler_capacity_default", "85").unwrap();
        assert_eq!(
            mgr.get_value("boiler_capacity_default").unwrap(),
            Some("85".to_string())
        );
    }

    #[test]
    fn test_load_capacity_table_defaults() {
        let mgr = manager();
        let table = mgr.load_capacity_table().unwrap();
        assert_eq!(table.capacity_for(7), 50.0);
        assert_eq!(table.capacity_for(1), 75.0);
    }

    #[test]
    fn test_load_capacity_table_with_overrides() {
        let mgr = manager();
        mgr.set_boiler_capacity(9, 35.0).unwrap();
        mgr.set_default_capacity(90.0).unwrap();

        let table = mgr.load_capacity_table().unwrap();
        assert_eq!(table.capacity_for(9), 35.0);
        assert_eq!(table.capacity_for(7), 50.0);
        assert_eq!(table.capacity_for(2), 90.0);
    }
}
