// ==========================================
// Boiler Combustion-Efficiency Tracker - boiler capacity table
// ==========================================
// Nameplate capacity per boiler number. The ambient-loss formula scales with
// nameplate size; the table is injected into the calculator and new boilers
// are added through configuration.
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Nameplate capacity used for boilers with no explicit entry (tonnes).
pub const DEFAULT_CAPACITY_T: f64 = 75.0;

// ==========================================
// BoilerCapacityTable - boiler number -> nameplate capacity
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoilerCapacityTable {
    /// Per-boiler entries; boilers not listed fall back to the default.
    entries: HashMap<i32, f64>,
    /// Capacity for unlisted boilers (tonnes).
    default_capacity_t: f64,
}

impl Default for BoilerCapacityTable {
    /// Shipped plant defaults: boiler 7 is the 50 t unit, the rest are 75 t.
    fn default() -> Self {
        Self {
            entries: HashMap::from([(7, 50.0)]),
            default_capacity_t: DEFAULT_CAPACITY_T,
        }
    }
}

impl BoilerCapacityTable {
    /// Build a table from explicit entries and a fallback capacity.
    pub fn new(entries: HashMap<i32, f64>, default_capacity_t: f64) -> Self {
        Self {
            entries,
            default_capacity_t,
        }
    }

    /// Nameplate capacity for a boiler (tonnes).
    pub fn capacity_for(&self, boiler_number: i32) -> f64 {
        self.entries
            .get(&boiler_number)
            .copied()
            .unwrap_or(self.default_capacity_t)
    }

    /// Add or overwrite the entry for one boiler.
    pub fn set_capacity(&mut self, boiler_number: i32, capacity_t: f64) {
        self.entries.insert(boiler_number, capacity_t);
    }

    /// Overwrite the fallback capacity for unlisted boilers.
    pub fn set_default_capacity(&mut self, capacity_t: f64) {
        self.default_capacity_t = capacity_t;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_matches_plant() {
        let table = BoilerCapacityTable::default();
        assert_eq!(table.capacity_for(7), 50.0);
        assert_eq!(table.capacity_for(3), 75.0);
        assert_eq!(table.capacity_for(12), 75.0);
    }

    #[test]
    fn test_overrides_take_precedence() {
        let mut table = BoilerCapacityTable::default();
        table.set_capacity(3, 120.0);
        table.set_default_capacity(90.0);
        assert_eq!(table.capacity_for(3), 120.0);
        assert_eq!(table.capacity_for(7), 50.0);
        assert_eq!(table.capacity_for(99), 90.0);
    }
}
